/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// A point in client (screen) or canvas-local space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of a chart plus its stacking order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub z_index: usize,
}

impl Position {
    pub fn new(left: f64, top: f64, z_index: usize) -> Self {
        Self { left, top, z_index }
    }

    pub fn offset(&self, by: Offset) -> Self {
        Self {
            left: self.left + by.left,
            top: self.top + by.top,
            z_index: self.z_index,
        }
    }

    pub fn point(&self) -> Offset {
        Offset { left: self.left, top: self.top }
    }
}

/// Left/top pair without a stacking order, used by the transform tool and as
/// a translation delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is smaller than the matching side of `min`.
    pub fn below(&self, min: Size) -> bool {
        self.width < min.width || self.height < min.height
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;

/// Canvas zoom factor. Always finite and strictly positive, so pointer deltas
/// can be divided by it without further checks.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    pub const ONE: Zoom = Zoom(1.0);

    pub fn new(value: f64) -> Result<Self, StudioError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(StudioError::InvalidZoom(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Multiplies the zoom by `factor`, keeping the result inside
    /// [`MIN_ZOOM`, `MAX_ZOOM`].
    pub fn step(self, factor: f64) -> Self {
        let next = self.0 * factor;
        if !next.is_finite() || next <= 0.0 {
            return self;
        }
        Self(next.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Converts a client-space point into canvas-local units given the
    /// canvas' client-space origin.
    pub fn to_canvas(self, client: Coordinate, origin: Coordinate) -> Coordinate {
        Coordinate {
            x: (client.x - origin.x) / self.0,
            y: (client.y - origin.y) / self.0,
        }
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::ONE
    }
}
