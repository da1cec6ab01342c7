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
use crate::geometry::{Offset, Size};

/// Tunables of the chart canvas. Every field falls back to its default when
/// missing from the JSON form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Frames smaller than this on either axis are dropped, not clamped.
    pub min_size: Size,
    /// Size of a chart created from a palette drop.
    pub default_size: Size,
    /// Translation applied to a duplicated chart.
    pub duplicate_offset: Offset,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(50.0, 50.0),
            default_size: Size::new(300.0, 300.0),
            duplicate_offset: Offset::new(10.0, 10.0),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(input: &str) -> Result<Self, StudioError> {
        let config: CanvasConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StudioError> {
        let sizes = [("minSize", self.min_size), ("defaultSize", self.default_size)];
        for (name, size) in sizes {
            if !(size.width.is_finite() && size.height.is_finite()) || size.width <= 0.0 || size.height <= 0.0 {
                return Err(StudioError::InvalidConfig(format!("{} must be positive", name)));
            }
        }
        if self.default_size.below(self.min_size) {
            return Err(StudioError::InvalidConfig("defaultSize is below minSize".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = CanvasConfig::from_json(r#"{ "duplicateOffset": { "left": 20.0, "top": 5.0 } }"#).unwrap();
        assert_eq!(config.min_size, Size::new(50.0, 50.0));
        assert_eq!(config.default_size, Size::new(300.0, 300.0));
        assert_eq!(config.duplicate_offset, Offset::new(20.0, 5.0));
    }

    #[test]
    fn rejects_default_size_below_floor() {
        let err = CanvasConfig::from_json(r#"{ "defaultSize": { "width": 10.0, "height": 300.0 } }"#).unwrap_err();
        assert!(matches!(err, StudioError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(CanvasConfig::from_json("{ nope"), Err(StudioError::Json(_))));
    }
}
