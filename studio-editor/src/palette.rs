use dioxus::prelude::*;
use serde_json::json;
use studio_core::{PreviewItem, PREVIEW_CHART};

/// What is currently being dragged out of the palette, with its item tag.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggedItem {
    pub item_type: &'static str,
    pub item: PreviewItem,
}

pub fn default_palette() -> Vec<PreviewItem> {
    vec![
        PreviewItem {
            name: "Bar".into(),
            option: json!({
                "title": { "text": "Bar chart" },
                "xAxis": { "type": "category", "data": ["Mon", "Tue", "Wed", "Thu", "Fri"] },
                "yAxis": { "type": "value" },
                "series": [{ "type": "bar", "data": [120, 200, 150, 80, 70] }],
                "color": "#5470c6"
            }),
        },
        PreviewItem {
            name: "Line".into(),
            option: json!({
                "title": { "text": "Line chart" },
                "xAxis": { "type": "category", "data": ["Q1", "Q2", "Q3", "Q4"] },
                "yAxis": { "type": "value" },
                "series": [{ "type": "line", "data": [820, 932, 901, 1290] }],
                "color": "#91cc75"
            }),
        },
        PreviewItem {
            name: "Pie".into(),
            option: json!({
                "title": { "text": "Pie chart" },
                "series": [{ "type": "pie", "data": [{ "value": 1048, "name": "Search" }, { "value": 735, "name": "Direct" }] }],
                "color": "#fac858"
            }),
        },
        PreviewItem {
            name: "Scatter".into(),
            option: json!({
                "title": { "text": "Scatter chart" },
                "xAxis": {},
                "yAxis": {},
                "series": [{ "type": "scatter", "data": [[10.0, 8.04], [8.07, 6.95], [13.0, 7.58]] }],
                "color": "#ee6666"
            }),
        },
    ]
}

#[component]
pub fn ChartPreview(item: PreviewItem, mut drag_item: Signal<Option<DraggedItem>>) -> Element {
    let name = item.name.clone();

    rsx! {
        div {
            class: "chart-preview",
            draggable: true,
            ondragstart: move |_| {
                drag_item.set(Some(DraggedItem {
                    item_type: PREVIEW_CHART,
                    item: item.clone(),
                }));
            },
            ondragend: move |_| drag_item.set(None),
            div { class: "chart-preview-thumb" }
            span { "{name}" }
        }
    }
}
