use dioxus::prelude::*;
use std::rc::Rc;
use studio_core::{
    CanvasAction, CanvasState, Chart, ChartId, Coordinate, DropEvent, HandleType, Outcome, TransformTool as ToolBox, Zoom,
};
use studio_dioxus::chart_frame_style;
use tracing::{debug, warn};

use crate::palette::DraggedItem;

fn client_point(evt: &MouseEvent) -> Coordinate {
    let p = evt.client_coordinates();
    Coordinate::new(p.x, p.y)
}

/// The editable chart surface. `state` is created by the host so it can read
/// layouts back; every mutation goes through this component.
#[component]
pub fn Canvas(
    mut state: Signal<CanvasState>,
    width: u32,
    height: u32,
    canvas_scale: Zoom,
    is_show_transform_tool: bool,
    mut drag_item: Signal<Option<DraggedItem>>,
    on_wheel: EventHandler<WheelEvent>,
    on_chart_click: EventHandler<ChartId>,
    hide_transform_tool: EventHandler<()>,
) -> Element {
    let mut canvas_node = use_signal(|| None::<Rc<MountedData>>);
    // The click that follows a drag release must not clear the selection.
    let mut just_dragged = use_signal(|| false);

    let cursor = state.read().active_handle().map_or("default", HandleType::cursor);
    let container_style = format!(
        "width: {}px; height: {}px; transform: scale({}); cursor: {};",
        width, height, canvas_scale.get(), cursor
    );

    rsx! {
        div {
            class: "canvas-container",
            style: "{container_style}",
            onmousedown: move |_| just_dragged.set(false),
            onmousemove: move |evt| {
                if state.peek().active_handle().is_none() {
                    return;
                }
                state.write().dispatch(CanvasAction::PointerMove {
                    pointer: client_point(&evt),
                    zoom: canvas_scale,
                });
            },
            onmouseup: move |_| {
                if state.peek().active_handle().is_some() {
                    state.write().dispatch(CanvasAction::PointerUp);
                    just_dragged.set(true);
                }
            },
            onmouseleave: move |_| {
                if state.peek().active_handle().is_some() {
                    state.write().dispatch(CanvasAction::PointerUp);
                }
            },
            onwheel: move |evt| on_wheel.call(evt),
            onclick: move |_| {
                if just_dragged() {
                    just_dragged.set(false);
                    return;
                }
                state.write().dispatch(CanvasAction::Deselect);
                hide_transform_tool.call(());
            },
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| async move {
                evt.prevent_default();
                let Some(dragged) = drag_item.write().take() else {
                    return;
                };
                let client = evt.client_coordinates();
                let Some(node) = canvas_node.peek().clone() else {
                    warn!("drop before canvas was mounted");
                    return;
                };
                let origin = match node.get_client_rect().await {
                    Ok(rect) => Coordinate::new(rect.origin.x, rect.origin.y),
                    Err(err) => {
                        warn!(?err, "could not measure canvas");
                        return;
                    }
                };
                let event = DropEvent {
                    item_type: dragged.item_type.to_string(),
                    item: dragged.item,
                    client: Coordinate::new(client.x, client.y),
                };
                if let Outcome::Created(id) = state.write().dispatch(CanvasAction::Drop {
                    event,
                    origin,
                    zoom: canvas_scale,
                }) {
                    debug!(%id, "chart created from palette drop");
                }
            },

            div {
                class: "canvas",
                onmounted: move |evt| canvas_node.set(Some(evt.data())),

                for chart in state.read().paint_order().into_iter().cloned() {
                    ChartView {
                        key: "{chart.id}",
                        chart,
                        on_chart_click: move |id: ChartId| {
                            state.write().dispatch(CanvasAction::Select(id));
                            on_chart_click.call(id);
                        },
                    }
                }

                if is_show_transform_tool {
                    if let Some(tool) = state.read().transform_tool().copied() {
                        TransformTool {
                            tool,
                            on_handle_down: move |(handle, evt): (HandleType, MouseEvent)| {
                                evt.stop_propagation();
                                evt.prevent_default();
                                state.write().dispatch(CanvasAction::PointerDown {
                                    handle,
                                    pointer: client_point(&evt),
                                });
                            },
                            on_copy_click: move |_: ()| {
                                state.write().dispatch(CanvasAction::DuplicateSelected);
                            },
                            on_trashcan_click: move |_: ()| {
                                if let Outcome::Removed(_) = state.write().dispatch(CanvasAction::DeleteSelected) {
                                    hide_transform_tool.call(());
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder for the chart renderer: draws the frame, title and series
/// kinds of the option payload.
#[component]
pub fn ChartView(chart: Chart, on_chart_click: EventHandler<ChartId>) -> Element {
    let style = chart_frame_style(&chart);
    let title = chart.title().unwrap_or("Untitled chart").to_string();
    let kinds: Vec<String> = chart
        .option
        .get("series")
        .and_then(|s| s.as_array())
        .map(|series| {
            series
                .iter()
                .filter_map(|s| s.get("type").and_then(|t| t.as_str()).map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let id = chart.id;

    rsx! {
        div {
            class: "chart-frame",
            style: "{style} transform-origin: 50% 50%;",
            onmousedown: move |evt| evt.prevent_default(),
            onclick: move |evt| {
                evt.stop_propagation();
                on_chart_click.call(id);
            },
            div { class: "chart-title", "{title}" }
            div {
                class: "chart-body",
                for kind in kinds {
                    span { class: "chart-kind", "{kind}" }
                }
            }
        }
    }
}

/// Overlay drawn around the selected chart. Mirrors the raw drag rectangle,
/// which may differ from the chart's scaled geometry mid-drag.
#[component]
pub fn TransformTool(
    tool: ToolBox,
    on_handle_down: EventHandler<(HandleType, MouseEvent)>,
    on_copy_click: EventHandler<()>,
    on_trashcan_click: EventHandler<()>,
) -> Element {
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        tool.position.left, tool.position.top, tool.size.width, tool.size.height
    );

    rsx! {
        div {
            class: "transform-tool",
            style: "{style}",
            onmousedown: move |evt| on_handle_down.call((HandleType::Move, evt)),
            onclick: move |evt| evt.stop_propagation(),

            for handle in HandleType::RESIZE {
                div {
                    key: "{handle.class_name()}",
                    class: "resize-handle {handle.class_name()}",
                    style: "cursor: {handle.cursor()};",
                    onmousedown: move |evt| on_handle_down.call((handle, evt)),
                    onclick: move |evt| evt.stop_propagation(),
                }
            }

            div {
                class: "transform-actions",
                button {
                    class: "icon-btn",
                    title: "Duplicate",
                    onmousedown: move |evt| evt.stop_propagation(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_copy_click.call(());
                    },
                    "⧉"
                }
                button {
                    class: "icon-btn",
                    title: "Delete",
                    onmousedown: move |evt| evt.stop_propagation(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_trashcan_click.call(());
                    },
                    "🗑"
                }
            }
        }
    }
}
