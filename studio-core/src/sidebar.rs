/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    Open,
    Close,
}

/// Icon and title shown in the sidebar's icon bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarPanel {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl SidebarPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Text for the icon slot: nothing when an icon class is set, the title
    /// otherwise.
    pub fn label(&self) -> Option<&str> {
        match self.icon {
            Some(_) => None,
            None => Some(&self.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    select_key: usize,
    collapsed: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            select_key: 0,
            collapsed: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.select_key
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Selects panel `idx` and expands the panel area. Reports `Open` when the
    /// click reopened a collapsed sidebar.
    pub fn click_icon(&mut self, idx: usize) -> Option<OpenState> {
        let reopened = self.collapsed;
        self.select_key = idx;
        self.collapsed = false;
        reopened.then_some(OpenState::Open)
    }

    pub fn collapse(&mut self) -> OpenState {
        self.collapsed = true;
        OpenState::Close
    }

    pub fn is_icon_bright(&self, idx: usize) -> bool {
        !self.collapsed && self.select_key == idx
    }

    pub fn is_panel_shown(&self, idx: usize) -> bool {
        idx == self.select_key
    }

    /// CSS width of the whole sidebar: just the icon bar when collapsed.
    pub fn width<'a>(&self, bar_width: &'a str, full_width: &'a str) -> &'a str {
        if self.collapsed { bar_width } else { full_width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_on_first_panel() {
        let sidebar = SidebarState::default();
        assert_eq!(sidebar.selected(), 0);
        assert!(sidebar.is_icon_bright(0));
        assert!(!sidebar.is_icon_bright(1));
        assert_eq!(sidebar.width("48px", "320px"), "320px");
    }

    #[test]
    fn collapse_then_click_reopens() {
        let mut sidebar = SidebarState::default();
        assert_eq!(sidebar.collapse(), OpenState::Close);
        assert!(!sidebar.is_icon_bright(0));
        assert!(sidebar.is_panel_shown(0));
        assert_eq!(sidebar.width("48px", "320px"), "48px");

        assert_eq!(sidebar.click_icon(2), Some(OpenState::Open));
        assert_eq!(sidebar.selected(), 2);
        assert!(sidebar.is_icon_bright(2));
        assert_eq!(sidebar.click_icon(1), None);
    }

    #[test]
    fn label_falls_back_to_title() {
        assert_eq!(SidebarPanel::new("Charts").label(), Some("Charts"));
        assert_eq!(SidebarPanel::new("Charts").with_icon("icon-chart").label(), None);
    }
}
