use dioxus::prelude::*;
use studio_core::{OpenState, SidebarMode, SidebarPanel, SidebarState};

/// Icon bar plus one visible panel. Panels are rendered lazily through
/// `render_panel`, indexed like `panels`.
#[component]
pub fn Sidebar(
    panels: Vec<SidebarPanel>,
    render_panel: Callback<usize, Element>,
    #[props(default)] mode: SidebarMode,
    #[props(default = "100%".to_string())] width: String,
    #[props(default = "100%".to_string())] height: String,
    #[props(default = "48px".to_string())] bar_width: String,
    #[props(default)] class: String,
    on_open_change: Option<EventHandler<OpenState>>,
) -> Element {
    let mut sidebar = use_signal(SidebarState::new);

    let state = sidebar.read().clone();
    let current_width = state.width(&bar_width, &width).to_string();
    let mode_class = if mode == SidebarMode::Right { " sidebar_container_right" } else { "" };
    let panels_class = if state.is_collapsed() { "sidebar_panels collapse" } else { "sidebar_panels" };

    rsx! {
        div {
            class: "sidebar_container {class}{mode_class}",
            style: "width: {current_width}; min-width: {current_width}; height: {height};",

            div {
                class: "sidebar_bar",
                style: "width: {bar_width};",
                ul {
                    for (idx, panel) in panels.iter().enumerate() {
                        li {
                            key: "{idx}",
                            class: if state.is_icon_bright(idx) { "bright" } else { "" },
                            title: "{panel.title}",
                            onclick: move |_| {
                                let change = sidebar.write().click_icon(idx);
                                if let (Some(change), Some(handler)) = (change, on_open_change) {
                                    handler.call(change);
                                }
                            },
                            span {
                                class: panel.icon.clone().unwrap_or_default(),
                                if let Some(label) = panel.label() {
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "{panels_class}",
                for (idx, panel) in panels.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "sidebar_panel",
                        hidden: !state.is_panel_shown(idx),
                        div {
                            class: "sidebar_panel_header",
                            span { "{panel.title}" }
                            button {
                                class: "icon-btn",
                                title: "Collapse",
                                onclick: move |_| {
                                    let change = sidebar.write().collapse();
                                    if let Some(handler) = on_open_change {
                                        handler.call(change);
                                    }
                                },
                                if mode == SidebarMode::Right { "»" } else { "«" }
                            }
                        }
                        if state.is_panel_shown(idx) {
                            {render_panel.call(idx)}
                        }
                    }
                }
            }
        }
    }
}
