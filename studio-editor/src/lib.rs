#![allow(non_snake_case)]

use dioxus::prelude::*;
use studio_core::{CanvasConfig, CanvasState, ChartId, OpenState, SidebarPanel, StudioError, TabPanel, Zoom};
use tracing::{debug, error};

mod canvas;
mod palette;
mod sidebar;
mod tabs;

pub use canvas::{Canvas, ChartView, TransformTool};
pub use palette::{default_palette, ChartPreview, DraggedItem};
pub use sidebar::Sidebar;
pub use tabs::Tabs;

const MAIN_CSS: Asset = asset!("/assets/studio.css");

const CANVAS_WIDTH: u32 = 1280;
const CANVAS_HEIGHT: u32 = 720;
const CANVAS_BACKGROUND: &str = "#ffffff";
const ZOOM_STEP: f64 = 1.1;

fn layout_json(canvas: &CanvasState) -> Result<String, StudioError> {
    canvas.layout(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_BACKGROUND).to_json_pretty()
}

#[component]
pub fn Studio() -> Element {
    let canvas = use_signal(|| CanvasState::new(CanvasConfig::default()));
    let mut zoom = use_signal(Zoom::default);
    let mut show_tool = use_signal(|| false);
    let drag_item = use_signal(|| None::<DraggedItem>);

    let panels = vec![
        SidebarPanel::new("Charts").with_icon("icon-chart"),
        SidebarPanel::new("Layout"),
    ];
    let palette = use_hook(default_palette);
    let zoom_percent = (zoom().get() * 100.0).round();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div {
            class: "studio",

            Sidebar {
                panels,
                width: "280px",
                on_open_change: move |state: OpenState| debug!(?state, "sidebar toggled"),
                render_panel: move |idx: usize| {
                    if idx == 0 {
                        rsx! {
                            div {
                                class: "chart-palette",
                                for item in palette.iter() {
                                    ChartPreview { key: "{item.name}", item: item.clone(), drag_item }
                                }
                            }
                        }
                    } else {
                        rsx! {
                            LayoutPanel { canvas, zoom }
                        }
                    }
                },
            }

            div {
                class: "studio-main",
                div {
                    class: "zoom-label",
                    "{zoom_percent}%"
                }
                div {
                    class: "canvas-viewport",
                    Canvas {
                        state: canvas,
                        width: CANVAS_WIDTH,
                        height: CANVAS_HEIGHT,
                        canvas_scale: zoom(),
                        is_show_transform_tool: show_tool(),
                        drag_item,
                        on_wheel: move |evt: WheelEvent| {
                            if !evt.modifiers().contains(Modifiers::CONTROL) {
                                return;
                            }
                            evt.prevent_default();
                            let dy = evt.delta().strip_units().y;
                            let factor = if dy < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
                            zoom.set(zoom().step(factor));
                        },
                        on_chart_click: move |_: ChartId| show_tool.set(true),
                        hide_transform_tool: move |_: ()| show_tool.set(false),
                    }
                }
            }
        }
    }
}

/// Layout tab set: exported JSON and a canvas summary with zoom controls.
#[component]
fn LayoutPanel(canvas: Signal<CanvasState>, mut zoom: Signal<Zoom>) -> Element {
    let tabs = vec![TabPanel::new("json", "JSON"), TabPanel::new("summary", "Summary")];

    rsx! {
        Tabs {
            panels: tabs,
            on_tab_click: move |(id, tab): (String, String)| debug!(%id, %tab, "layout tab opened"),
            render_panel: move |id: String| {
                match id.as_str() {
                    "json" => {
                        let json = layout_json(&canvas.read()).unwrap_or_else(|err| format!("<{}>", err));
                        rsx! {
                            div {
                                class: "json-output",
                                button {
                                    class: "primary-btn",
                                    onclick: move |_| async move {
                                        let literal = match layout_json(&canvas.read()).and_then(|json| Ok(serde_json::to_string(&json)?)) {
                                            Ok(literal) => literal,
                                            Err(err) => {
                                                error!(%err, "layout export failed");
                                                return;
                                            }
                                        };
                                        let mut eval = document::eval(&format!("navigator.clipboard.writeText({})", literal));
                                        let _: Result<serde_json::Value, _> = eval.recv().await;
                                    },
                                    "Copy JSON"
                                }
                                pre { "{json}" }
                            }
                        }
                    }
                    _ => {
                        let state = canvas.read();
                        let count = state.len();
                        let selected = state.selected().map_or("none".to_string(), |id| id.to_string());
                        rsx! {
                            div {
                                class: "control-group",
                                div { "Charts: {count}" }
                                div { "Selected: {selected}" }
                                div {
                                    class: "zoom-controls",
                                    button { class: "icon-btn", onclick: move |_| zoom.set(zoom().step(1.0 / ZOOM_STEP)), "−" }
                                    button { class: "icon-btn", onclick: move |_| zoom.set(Zoom::ONE), "100%" }
                                    button { class: "icon-btn", onclick: move |_| zoom.set(zoom().step(ZOOM_STEP)), "+" }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::{Layout, Position, Size};

    #[test]
    fn exported_layout_round_trips() {
        let mut canvas = CanvasState::default();
        canvas.append(default_palette()[0].option.clone(), Position::new(10.0, 20.0, 0), Size::new(300.0, 300.0));

        let json = layout_json(&canvas).unwrap();
        let layout = Layout::from_json(&json).unwrap();
        assert_eq!(layout.width, CANVAS_WIDTH);
        assert_eq!(layout.charts.len(), 1);
        assert_eq!(layout.charts[0].title(), Some("Bar chart"));
    }
}
