/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabPanel {
    pub id: String,
    pub tab: String,
}

impl TabPanel {
    pub fn new(id: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tab: tab.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabsState {
    active: Option<String>,
}

impl TabsState {
    /// Activates the first panel, if any.
    pub fn new(panels: &[TabPanel]) -> Self {
        Self {
            active: panels.first().map(|p| p.id.clone()),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Returns false when `id` was already active.
    pub fn click(&mut self, id: &str) -> bool {
        if self.is_active(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }
}
