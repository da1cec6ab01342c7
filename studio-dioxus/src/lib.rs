/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use studio_core::{Chart, Layout, StudioError};
use dioxus::prelude::*;

/// Inline style placing a chart frame on the canvas. Shared with the editor so
/// the viewer and the live canvas agree on geometry.
pub fn chart_frame_style(chart: &Chart) -> String {
    let size = chart.size;
    let mut style = format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
        chart.position.left, chart.position.top, size.width, size.height, chart.position.z_index
    );
    if chart.scale.x != 1.0 || chart.scale.y != 1.0 {
        style.push_str(&format!(" transform: scale({}, {});", chart.scale.x, chart.scale.y));
    }
    style
}

pub fn render_to_rsx(layout: &Layout) -> Element {
    let background_style = if layout.background.starts_with("http") || layout.background.starts_with('/') {
        format!("background-image: url('{}'); background-size: cover; background-position: center", layout.background)
    } else {
        format!("background: {}", layout.background)
    };

    let container_style = format!(
        "position: relative; width: {}px; height: {}px; {}; overflow: hidden;",
        layout.width, layout.height, background_style
    );

    rsx! {
        div {
            class: "studio-viewer",
            style: "{container_style}",
            for chart in layout.paint_order() {
                {
                    let style = chart_frame_style(chart);
                    let title = chart.title().unwrap_or("Untitled chart").to_string();
                    rsx! {
                        div {
                            key: "{chart.id}",
                            class: "chart-frame",
                            style: "{style}",
                            div { class: "chart-title", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

/// Parses an exported layout and renders it read-only.
pub fn render_layout_json(input: &str) -> Result<Element, StudioError> {
    let layout = Layout::from_json(input)?;
    Ok(render_to_rsx(&layout))
}
