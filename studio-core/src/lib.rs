/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! UI-framework-free state of the chart studio: the chart registry and its
//! drag/resize state machine, the palette drop adapter, and the sidebar and
//! tab widgets' selection state.

pub mod canvas;
pub mod chart;
pub mod config;
pub mod dnd;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod sidebar;
pub mod tabs;

pub use canvas::{CanvasAction, CanvasState, DragSession, HandleType, Outcome, TransformTool};
pub use chart::{Chart, ChartId};
pub use config::CanvasConfig;
pub use dnd::{DropEvent, PreviewItem, PREVIEW_CHART};
pub use error::StudioError;
pub use geometry::{Coordinate, Offset, Position, Scale, Size, Zoom};
pub use layout::Layout;
pub use sidebar::{OpenState, SidebarMode, SidebarPanel, SidebarState};
pub use tabs::{TabPanel, TabsState};
