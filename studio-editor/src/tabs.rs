use dioxus::prelude::*;
use studio_core::{TabPanel, TabsState};

#[component]
pub fn Tabs(
    panels: Vec<TabPanel>,
    render_panel: Callback<String, Element>,
    on_tab_click: Option<EventHandler<(String, String)>>,
) -> Element {
    let initial = panels.clone();
    let mut tabs = use_signal(move || TabsState::new(&initial));
    let active = tabs.read().active().map(str::to_string);

    rsx! {
        div {
            class: "tabs",
            div {
                class: "tab-strip",
                for panel in panels.iter() {
                    {
                        let id = panel.id.clone();
                        let tab = panel.tab.clone();
                        let is_active = active.as_deref() == Some(id.as_str());
                        rsx! {
                            div {
                                key: "{panel.id}",
                                class: if is_active { "tab active" } else { "tab" },
                                onclick: move |_| {
                                    tabs.write().click(&id);
                                    if let Some(handler) = on_tab_click {
                                        handler.call((id.clone(), tab.clone()));
                                    }
                                },
                                "{panel.tab}"
                            }
                        }
                    }
                }
            }
            div {
                class: "tab-panel",
                if let Some(id) = active.clone() {
                    {render_panel.call(id)}
                }
            }
        }
    }
}
