/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasState;
use crate::chart::{Chart, ChartId};
use crate::config::CanvasConfig;
use crate::error::StudioError;

/// Serializable picture of a canvas: its viewport and every chart record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub charts: Vec<Chart>,
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Layout {
    pub fn from_json(input: &str) -> Result<Self, StudioError> {
        let layout: Layout = serde_json::from_str(input)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn to_json_pretty(&self) -> Result<String, StudioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), StudioError> {
        let mut seen = HashSet::new();
        for chart in &self.charts {
            if chart.id > ChartId::MAX_RESTORED {
                return Err(StudioError::InvalidLayout(format!("chart id {} is out of range", chart.id)));
            }
            if !seen.insert(chart.id) {
                return Err(StudioError::InvalidLayout(format!("duplicate chart id {}", chart.id)));
            }
            if !(chart.size.width > 0.0 && chart.size.height > 0.0) {
                return Err(StudioError::InvalidLayout(format!("chart {} has an empty size", chart.id)));
            }
        }
        Ok(())
    }

    /// Charts sorted the way the canvas paints them.
    pub fn paint_order(&self) -> Vec<&Chart> {
        let mut charts: Vec<&Chart> = self.charts.iter().collect();
        charts.sort_by_key(|c| (c.position.z_index, c.id));
        charts
    }

    /// Rebuilds a canvas from this layout. New identifiers continue after the
    /// largest restored one.
    pub fn into_canvas(self, config: CanvasConfig) -> Result<CanvasState, StudioError> {
        self.validate()?;
        Ok(CanvasState::from_parts(self.charts, config))
    }
}

impl CanvasState {
    pub fn layout(&self, width: u32, height: u32, background: &str) -> Layout {
        Layout {
            width,
            height,
            background: background.to_string(),
            charts: self.charts().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Position, Scale, Size};
    use serde_json::{json, Value};

    #[test]
    fn json_round_trip_resumes_identifiers() {
        let mut canvas = CanvasState::default();
        canvas.append(json!({ "title": "A" }), Position::new(1.0, 2.0, 0), Size::new(100.0, 100.0));
        let b = canvas.append(json!({ "title": "B" }), Position::new(3.0, 4.0, 1), Size::new(60.0, 80.0));
        canvas.append(Value::Null, Position::default(), Size::new(60.0, 60.0));
        canvas.delete(ChartId(2));

        let json = canvas.layout(800, 600, "#fafafa").to_json_pretty().unwrap();
        assert!(json.contains("\"zIndex\": 1"));

        let mut restored = Layout::from_json(&json).unwrap().into_canvas(CanvasConfig::default()).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.chart(b), canvas.chart(b));
        let next = restored.append(Value::Null, Position::default(), Size::new(60.0, 60.0));
        assert_eq!(next, ChartId(2));
    }

    #[test]
    fn missing_optional_fields_are_filled() {
        let layout = Layout::from_json(
            r#"{ "width": 400, "height": 300, "charts": [
                { "id": 7, "position": { "left": 0, "top": 0 }, "size": { "width": 50, "height": 50 } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(layout.background, "#ffffff");
        let chart = &layout.charts[0];
        assert_eq!(chart.scale, Scale::IDENTITY);
        assert_eq!(chart.position.z_index, 0);
        assert_eq!(chart.option, Value::Null);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Layout::from_json(
            r#"{ "width": 400, "height": 300, "charts": [
                { "id": 1, "position": { "left": 0, "top": 0 }, "size": { "width": 50, "height": 50 } },
                { "id": 1, "position": { "left": 9, "top": 9 }, "size": { "width": 50, "height": 50 } }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, StudioError::InvalidLayout(_)));
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let err = Layout::from_json(
            r#"{ "width": 400, "height": 300, "charts": [
                { "id": 18446744073709551615, "position": { "left": 0, "top": 0 }, "size": { "width": 50, "height": 50 } }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, StudioError::InvalidLayout(_)));

        let layout = Layout {
            width: 400,
            height: 300,
            background: default_background(),
            charts: vec![Chart::new(ChartId(u64::MAX), Value::Null, Position::default(), Size::new(50.0, 50.0))],
        };
        assert!(layout.into_canvas(CanvasConfig::default()).is_err());
    }

    #[test]
    fn largest_restorable_id_resumes_after_it() {
        let layout = Layout {
            width: 400,
            height: 300,
            background: default_background(),
            charts: vec![Chart::new(ChartId::MAX_RESTORED, Value::Null, Position::default(), Size::new(50.0, 50.0))],
        };
        let mut canvas = layout.into_canvas(CanvasConfig::default()).unwrap();
        let next = canvas.append(Value::Null, Position::default(), Size::new(50.0, 50.0));
        assert_eq!(next, ChartId((1 << 53) + 1));
    }
}
