/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::canvas::CanvasState;
use crate::chart::ChartId;
use crate::geometry::{Coordinate, Position, Zoom};

/// Item type tag carried by palette entries that create charts.
pub const PREVIEW_CHART: &str = "chart-preview";

/// Payload dragged out of the chart palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewItem {
    pub name: String,
    pub option: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub item_type: String,
    pub item: PreviewItem,
    pub client: Coordinate,
}

impl DropEvent {
    pub fn preview(item: PreviewItem, client: Coordinate) -> Self {
        Self {
            item_type: PREVIEW_CHART.to_string(),
            item,
            client,
        }
    }
}

impl CanvasState {
    /// Creates a default-sized chart centered under the drop point. Drops of
    /// any other item type are ignored.
    pub fn handle_drop(&mut self, event: &DropEvent, origin: Coordinate, zoom: Zoom) -> Option<ChartId> {
        if event.item_type != PREVIEW_CHART {
            debug!(item_type = %event.item_type, "ignoring drop of foreign item");
            return None;
        }

        let local = zoom.to_canvas(event.client, origin);
        let size = self.config().default_size;
        let position = Position {
            left: local.x - size.width / 2.0,
            top: local.y - size.height / 2.0,
            z_index: self.len(),
        };
        Some(self.append(event.item.option.clone(), position, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use serde_json::json;

    fn item() -> PreviewItem {
        PreviewItem {
            name: "Bar".into(),
            option: json!({ "series": [{ "type": "bar" }] }),
        }
    }

    #[test]
    fn drop_centers_default_chart_under_pointer() {
        let mut canvas = CanvasState::default();
        let event = DropEvent::preview(item(), Coordinate::new(150.0, 150.0));
        let id = canvas.handle_drop(&event, Coordinate::new(50.0, 50.0), Zoom::ONE).unwrap();

        let chart = canvas.chart(id).unwrap();
        assert_eq!(chart.position, Position::new(-50.0, -50.0, 0));
        assert_eq!(chart.size, Size::new(300.0, 300.0));
        assert_eq!(chart.option, item().option);
    }

    #[test]
    fn drop_accounts_for_zoom_and_stacking() {
        let mut canvas = CanvasState::default();
        let event = DropEvent::preview(item(), Coordinate::new(450.0, 350.0));
        canvas.handle_drop(&event, Coordinate::new(50.0, 50.0), Zoom::ONE);
        let id = canvas.handle_drop(&event, Coordinate::new(50.0, 50.0), Zoom::new(2.0).unwrap()).unwrap();

        let chart = canvas.chart(id).unwrap();
        assert_eq!(chart.position, Position::new(50.0, 0.0, 1));
    }

    #[test]
    fn foreign_item_types_are_ignored() {
        let mut canvas = CanvasState::default();
        let event = DropEvent {
            item_type: "file".into(),
            item: item(),
            client: Coordinate::new(10.0, 10.0),
        };
        assert_eq!(canvas.handle_drop(&event, Coordinate::default(), Zoom::ONE), None);
        assert!(canvas.is_empty());
    }
}
