/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::{Position, Scale, Size};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ChartId(pub u64);

impl ChartId {
    /// Largest identifier a layout may carry: JSON numbers above 2^53 do not
    /// survive a trip through the browser clipboard.
    pub const MAX_RESTORED: ChartId = ChartId(1 << 53);
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One chart placed on the canvas. `option` is handed to the chart renderer
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub id: ChartId,
    #[serde(default)]
    pub option: Value,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub scale: Scale,
}

impl Chart {
    pub fn new(id: ChartId, option: Value, position: Position, size: Size) -> Self {
        Self {
            id,
            option,
            position,
            size,
            scale: Scale::IDENTITY,
        }
    }

    /// Size as currently painted, with the live drag scale applied.
    pub fn displayed_size(&self) -> Size {
        Size::new(self.size.width * self.scale.x, self.size.height * self.scale.y)
    }

    /// Title carried by the option payload, if any (`title.text` or `title`).
    pub fn title(&self) -> Option<&str> {
        let title = self.option.get("title")?;
        title
            .get("text")
            .and_then(Value::as_str)
            .or_else(|| title.as_str())
    }
}
