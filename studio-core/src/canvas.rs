/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::chart::{Chart, ChartId};
use crate::config::CanvasConfig;
use crate::dnd::DropEvent;
use crate::geometry::{Coordinate, Offset, Position, Scale, Size, Zoom};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleType {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Move,
}

impl HandleType {
    /// The eight resize handles drawn around the transform tool.
    pub const RESIZE: [HandleType; 8] = [
        HandleType::TopLeft,
        HandleType::TopRight,
        HandleType::BottomLeft,
        HandleType::BottomRight,
        HandleType::Top,
        HandleType::Bottom,
        HandleType::Left,
        HandleType::Right,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            HandleType::TopLeft => "tl",
            HandleType::TopRight => "tr",
            HandleType::BottomLeft => "bl",
            HandleType::BottomRight => "br",
            HandleType::Top => "t",
            HandleType::Bottom => "b",
            HandleType::Left => "l",
            HandleType::Right => "r",
            HandleType::Move => "move",
        }
    }

    pub fn cursor(self) -> &'static str {
        match self {
            HandleType::TopLeft | HandleType::BottomRight => "nwse-resize",
            HandleType::TopRight | HandleType::BottomLeft => "nesw-resize",
            HandleType::Top | HandleType::Bottom => "ns-resize",
            HandleType::Left | HandleType::Right => "ew-resize",
            HandleType::Move => "move",
        }
    }

    /// Applies a canvas-local pointer delta to the geometry captured at
    /// pointer-down. Edges opposite to the dragged one stay anchored.
    pub fn apply(self, size: Size, position: Offset, delta: Coordinate) -> (Size, Offset) {
        let mut size = size;
        let mut position = position;

        let grow_right = |s: &mut Size| s.width += delta.x;
        let grow_bottom = |s: &mut Size| s.height += delta.y;
        let pull_left = |s: &mut Size, p: &mut Offset| {
            s.width -= delta.x;
            p.left += delta.x;
        };
        let pull_top = |s: &mut Size, p: &mut Offset| {
            s.height -= delta.y;
            p.top += delta.y;
        };

        match self {
            HandleType::Right => grow_right(&mut size),
            HandleType::Bottom => grow_bottom(&mut size),
            HandleType::Left => pull_left(&mut size, &mut position),
            HandleType::Top => pull_top(&mut size, &mut position),
            HandleType::TopRight => {
                grow_right(&mut size);
                pull_top(&mut size, &mut position);
            }
            HandleType::TopLeft => {
                pull_left(&mut size, &mut position);
                pull_top(&mut size, &mut position);
            }
            HandleType::BottomLeft => {
                pull_left(&mut size, &mut position);
                grow_bottom(&mut size);
            }
            HandleType::BottomRight => {
                grow_right(&mut size);
                grow_bottom(&mut size);
            }
            HandleType::Move => {
                position.left += delta.x;
                position.top += delta.y;
            }
        }

        (size, position)
    }
}

/// Geometry captured when a handle is pressed. Lives until pointer-up.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub chart: ChartId,
    pub handle: HandleType,
    pub origin: Coordinate,
    pub original_size: Size,
    pub original_position: Position,
}

/// Bounding box of the floating overlay around the selected chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformTool {
    pub position: Offset,
    pub size: Size,
}

#[derive(Clone, Debug)]
pub enum CanvasAction {
    Append {
        option: Value,
        position: Position,
        size: Size,
    },
    Select(ChartId),
    Deselect,
    Delete(ChartId),
    DeleteSelected,
    Duplicate(ChartId),
    DuplicateSelected,
    PointerDown {
        handle: HandleType,
        pointer: Coordinate,
    },
    PointerMove {
        pointer: Coordinate,
        zoom: Zoom,
    },
    PointerUp,
    Drop {
        event: DropEvent,
        origin: Coordinate,
        zoom: Zoom,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Unchanged,
    Updated,
    Created(ChartId),
    Removed(Chart),
}

/// Chart registry, selection and drag session of one canvas.
#[derive(Clone, Debug, Default)]
pub struct CanvasState {
    charts: BTreeMap<ChartId, Chart>,
    transform_tool: Option<TransformTool>,
    snapshot: Option<Chart>,
    session: Option<DragSession>,
    next_id: u64,
    config: CanvasConfig,
}

impl CanvasState {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub(crate) fn from_parts(charts: Vec<Chart>, config: CanvasConfig) -> Self {
        let next_id = charts.iter().filter_map(|c| c.id.0.checked_add(1)).max().unwrap_or(0);
        Self {
            charts: charts.into_iter().map(|c| (c.id, c)).collect(),
            next_id,
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(&id)
    }

    /// Charts in identifier order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.charts.values()
    }

    /// Charts in paint order: stacking order first, identifier second.
    pub fn paint_order(&self) -> Vec<&Chart> {
        let mut charts: Vec<&Chart> = self.charts.values().collect();
        charts.sort_by_key(|c| (c.position.z_index, c.id));
        charts
    }

    pub fn transform_tool(&self) -> Option<&TransformTool> {
        self.transform_tool.as_ref()
    }

    pub fn selected(&self) -> Option<ChartId> {
        self.snapshot.as_ref().map(|c| c.id)
    }

    /// Record captured at the last selection or commit.
    pub fn snapshot(&self) -> Option<&Chart> {
        self.snapshot.as_ref()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// `None` while idle.
    pub fn active_handle(&self) -> Option<HandleType> {
        self.session.as_ref().map(|s| s.handle)
    }

    pub fn dispatch(&mut self, action: CanvasAction) -> Outcome {
        match action {
            CanvasAction::Append { option, position, size } => {
                Outcome::Created(self.append(option, position, size))
            }
            CanvasAction::Select(id) => changed(self.select(id)),
            CanvasAction::Deselect => changed(self.deselect()),
            CanvasAction::Delete(id) => removed(self.delete(id)),
            CanvasAction::DeleteSelected => removed(self.delete_selected()),
            CanvasAction::Duplicate(id) => created(self.duplicate(id)),
            CanvasAction::DuplicateSelected => created(self.duplicate_selected()),
            CanvasAction::PointerDown { handle, pointer } => changed(self.pointer_down(handle, pointer)),
            CanvasAction::PointerMove { pointer, zoom } => changed(self.pointer_move(pointer, zoom)),
            CanvasAction::PointerUp => changed(self.pointer_up()),
            CanvasAction::Drop { event, origin, zoom } => created(self.handle_drop(&event, origin, zoom)),
        }
    }

    pub fn append(&mut self, option: Value, position: Position, size: Size) -> ChartId {
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.charts.insert(id, Chart::new(id, option, position, size));
        debug!(%id, left = position.left, top = position.top, z = position.z_index, "chart appended");
        id
    }

    pub fn select(&mut self, id: ChartId) -> bool {
        let Some(chart) = self.charts.get(&id) else {
            return false;
        };
        self.transform_tool = Some(TransformTool {
            position: chart.position.point(),
            size: chart.size,
        });
        self.snapshot = Some(chart.clone());
        trace!(%id, "chart selected");
        true
    }

    pub fn deselect(&mut self) -> bool {
        let had = self.snapshot.is_some() || self.transform_tool.is_some();
        self.snapshot = None;
        self.transform_tool = None;
        had
    }

    pub fn delete(&mut self, id: ChartId) -> Option<Chart> {
        let chart = self.charts.remove(&id)?;
        if self.selected() == Some(id) {
            self.snapshot = None;
            self.transform_tool = None;
        }
        if self.session.as_ref().is_some_and(|s| s.chart == id) {
            self.session = None;
        }
        debug!(%id, remaining = self.charts.len(), "chart deleted");
        Some(chart)
    }

    pub fn delete_selected(&mut self) -> Option<Chart> {
        let id = self.selected()?;
        self.delete(id)
    }

    /// Copies `id` next to itself on top of the stack and selects the copy.
    pub fn duplicate(&mut self, id: ChartId) -> Option<ChartId> {
        let source = self.charts.get(&id)?;
        let option = source.option.clone();
        let size = source.size;
        let position = Position {
            z_index: self.charts.len(),
            ..source.position.offset(self.config.duplicate_offset)
        };

        let copy = self.append(option, position, size);
        self.select(copy);
        debug!(source = %id, %copy, "chart duplicated");
        Some(copy)
    }

    pub fn duplicate_selected(&mut self) -> Option<ChartId> {
        let id = self.selected()?;
        self.duplicate(id)
    }

    /// Starts a drag session on the selected chart. Ignored while another
    /// session is running or when nothing is selected.
    pub fn pointer_down(&mut self, handle: HandleType, pointer: Coordinate) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(id) = self.selected() else {
            return false;
        };
        let Some(chart) = self.charts.get(&id) else {
            return false;
        };

        self.session = Some(DragSession {
            chart: id,
            handle,
            origin: pointer,
            original_size: chart.size,
            original_position: chart.position,
        });
        debug!(%id, ?handle, x = pointer.x, y = pointer.y, "drag session started");
        true
    }

    /// Applies one pointer-move frame. Returns false when idle or when the
    /// frame would shrink the chart below the configured floor.
    pub fn pointer_move(&mut self, pointer: Coordinate, zoom: Zoom) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !self.charts.contains_key(&session.chart) {
            return false;
        }

        let delta = Coordinate {
            x: (pointer.x - session.origin.x) / zoom.get(),
            y: (pointer.y - session.origin.y) / zoom.get(),
        };
        let original = session.original_size;
        let (size, position) = session
            .handle
            .apply(original, session.original_position.point(), delta);

        if size.below(self.config.min_size) {
            trace!(width = size.width, height = size.height, "frame below minimum size dropped");
            return false;
        }

        let scale = Scale {
            x: size.width / original.width,
            y: size.height / original.height,
        };
        let displayed = Offset {
            left: position.left + original.width * (scale.x - 1.0) / 2.0,
            top: position.top + original.height * (scale.y - 1.0) / 2.0,
        };
        let id = session.chart;

        self.transform_tool = Some(TransformTool { position, size });
        if let Some(chart) = self.charts.get_mut(&id) {
            chart.position.left = displayed.left;
            chart.position.top = displayed.top;
            chart.scale = scale;
        }
        trace!(%id, sx = scale.x, sy = scale.y, "frame applied");
        true
    }

    /// Ends the session: bakes the scale into the size, takes the overlay's
    /// position and resets the scale.
    pub fn pointer_up(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        let id = session.chart;
        let tool = self.transform_tool;
        let Some(chart) = self.charts.get_mut(&id) else {
            return false;
        };

        chart.size = chart.displayed_size();
        if let Some(tool) = tool {
            chart.position.left = tool.position.left;
            chart.position.top = tool.position.top;
        }
        chart.scale = Scale::IDENTITY;
        self.snapshot = Some(chart.clone());

        debug!(%id, width = chart.size.width, height = chart.size.height, "drag session committed");
        true
    }
}

fn changed(updated: bool) -> Outcome {
    if updated { Outcome::Updated } else { Outcome::Unchanged }
}

fn created(id: Option<ChartId>) -> Outcome {
    id.map_or(Outcome::Unchanged, Outcome::Created)
}

fn removed(chart: Option<Chart>) -> Outcome {
    chart.map_or(Outcome::Unchanged, Outcome::Removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    fn canvas_with_chart(left: f64, top: f64, width: f64, height: f64) -> (CanvasState, ChartId) {
        let mut canvas = CanvasState::default();
        let id = canvas.append(json!({ "title": "A" }), Position::new(left, top, 0), Size::new(width, height));
        (canvas, id)
    }

    fn drag(canvas: &mut CanvasState, handle: HandleType, dx: f64, dy: f64, zoom: f64) {
        let start = Coordinate::new(500.0, 500.0);
        assert!(canvas.pointer_down(handle, start));
        canvas.pointer_move(Coordinate::new(start.x + dx, start.y + dy), Zoom::new(zoom).unwrap());
        canvas.pointer_up();
    }

    #[test]
    fn append_assigns_increasing_ids() {
        let mut canvas = CanvasState::default();
        let a = canvas.append(Value::Null, Position::default(), Size::new(100.0, 100.0));
        let b = canvas.append(Value::Null, Position::default(), Size::new(100.0, 100.0));
        canvas.delete(b);
        let c = canvas.append(Value::Null, Position::default(), Size::new(100.0, 100.0));
        assert!(a < b && b < c);
        assert_eq!(canvas.chart(c).unwrap().scale, Scale::IDENTITY);
    }

    #[test]
    fn select_mirrors_chart_into_transform_tool() {
        let (mut canvas, id) = canvas_with_chart(12.0, 34.0, 100.0, 80.0);
        assert!(canvas.transform_tool().is_none());
        assert!(canvas.select(id));
        let tool = canvas.transform_tool().unwrap();
        assert_eq!(tool.position, Offset::new(12.0, 34.0));
        assert_eq!(tool.size, Size::new(100.0, 80.0));
        assert_eq!(canvas.selected(), Some(id));
        assert!(!canvas.select(ChartId(99)));
    }

    #[test]
    fn right_handle_scenario() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        drag(&mut canvas, HandleType::Right, 20.0, 0.0, 1.0);

        let chart = canvas.chart(id).unwrap();
        assert_close(chart.size.width, 120.0);
        assert_close(chart.size.height, 100.0);
        assert_eq!(chart.position, Position::new(0.0, 0.0, 0));
        assert_eq!(chart.scale, Scale::IDENTITY);
        assert_eq!(canvas.active_handle(), None);
    }

    #[test]
    fn live_frame_scales_and_centers_chart_but_not_overlay() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        canvas.pointer_down(HandleType::Right, Coordinate::new(0.0, 0.0));
        assert!(canvas.pointer_move(Coordinate::new(20.0, 0.0), Zoom::ONE));

        let chart = canvas.chart(id).unwrap();
        assert_close(chart.scale.x, 1.2);
        assert_close(chart.scale.y, 1.0);
        assert_close(chart.position.left, 10.0);
        assert_close(chart.position.top, 0.0);

        let tool = canvas.transform_tool().unwrap();
        assert_eq!(tool.position, Offset::new(0.0, 0.0));
        assert_eq!(tool.size, Size::new(120.0, 100.0));
    }

    #[test]
    fn top_left_handle_anchors_bottom_right_corner() {
        let (mut canvas, id) = canvas_with_chart(100.0, 100.0, 200.0, 150.0);
        canvas.select(id);
        drag(&mut canvas, HandleType::TopLeft, 30.0, -20.0, 1.0);

        let chart = canvas.chart(id).unwrap();
        assert_close(chart.size.width, 170.0);
        assert_close(chart.size.height, 170.0);
        assert_close(chart.position.left, 130.0);
        assert_close(chart.position.top, 80.0);
    }

    #[test]
    fn every_handle_commits_its_edge_rules() {
        // chart at (100, 100) sized 200x150, pointer delta (30, -20)
        let cases = [
            (HandleType::TopLeft, (170.0, 170.0), (130.0, 80.0)),
            (HandleType::TopRight, (230.0, 170.0), (100.0, 80.0)),
            (HandleType::BottomLeft, (170.0, 130.0), (130.0, 100.0)),
            (HandleType::BottomRight, (230.0, 130.0), (100.0, 100.0)),
            (HandleType::Top, (200.0, 170.0), (100.0, 80.0)),
            (HandleType::Bottom, (200.0, 130.0), (100.0, 100.0)),
            (HandleType::Left, (170.0, 150.0), (130.0, 100.0)),
            (HandleType::Right, (230.0, 150.0), (100.0, 100.0)),
            (HandleType::Move, (200.0, 150.0), (130.0, 80.0)),
        ];

        for (handle, (width, height), (left, top)) in cases {
            let (mut canvas, id) = canvas_with_chart(100.0, 100.0, 200.0, 150.0);
            canvas.select(id);
            drag(&mut canvas, handle, 30.0, -20.0, 1.0);

            let chart = canvas.chart(id).unwrap();
            assert!((chart.size.width - width).abs() < 1e-9, "{handle:?} width {}", chart.size.width);
            assert!((chart.size.height - height).abs() < 1e-9, "{handle:?} height {}", chart.size.height);
            assert!((chart.position.left - left).abs() < 1e-9, "{handle:?} left {}", chart.position.left);
            assert!((chart.position.top - top).abs() < 1e-9, "{handle:?} top {}", chart.position.top);
            assert_eq!(chart.scale, Scale::IDENTITY, "{handle:?}");
        }
    }

    #[test]
    fn delta_is_divided_by_zoom() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        drag(&mut canvas, HandleType::Bottom, 0.0, 40.0, 2.0);
        assert_close(canvas.chart(id).unwrap().size.height, 120.0);
    }

    #[test]
    fn below_floor_frame_is_dropped() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        canvas.pointer_down(HandleType::Left, Coordinate::new(0.0, 0.0));
        assert!(canvas.pointer_move(Coordinate::new(30.0, 0.0), Zoom::ONE));
        let tool_before = *canvas.transform_tool().unwrap();
        let chart_before = canvas.chart(id).unwrap().clone();

        assert!(!canvas.pointer_move(Coordinate::new(60.0, 0.0), Zoom::ONE));
        assert_eq!(*canvas.transform_tool().unwrap(), tool_before);
        assert_eq!(*canvas.chart(id).unwrap(), chart_before);

        canvas.pointer_up();
        let chart = canvas.chart(id).unwrap();
        assert_close(chart.size.width, 70.0);
        assert_close(chart.position.left, 30.0);
    }

    #[test]
    fn move_handle_translates_without_resizing() {
        let (mut canvas, id) = canvas_with_chart(5.0, 5.0, 100.0, 60.0);
        canvas.select(id);
        drag(&mut canvas, HandleType::Move, -15.0, 25.0, 1.0);
        let chart = canvas.chart(id).unwrap();
        assert_eq!(chart.position, Position::new(-10.0, 30.0, 0));
        assert_eq!(chart.size, Size::new(100.0, 60.0));
        assert_eq!(canvas.snapshot().unwrap(), chart);
    }

    #[test]
    fn second_session_cannot_start_before_release() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        assert!(canvas.pointer_down(HandleType::Right, Coordinate::new(0.0, 0.0)));
        assert!(!canvas.pointer_down(HandleType::Move, Coordinate::new(0.0, 0.0)));
        assert_eq!(canvas.active_handle(), Some(HandleType::Right));
    }

    #[test]
    fn pointer_events_without_selection_are_no_ops() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        assert!(!canvas.pointer_down(HandleType::Right, Coordinate::new(0.0, 0.0)));
        assert!(!canvas.pointer_move(Coordinate::new(50.0, 0.0), Zoom::ONE));
        assert!(!canvas.pointer_up());
        assert_eq!(canvas.chart(id).unwrap().size, Size::new(100.0, 100.0));
    }

    #[test]
    fn deselect_hides_overlay_and_blocks_sessions() {
        let (mut canvas, id) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        canvas.select(id);
        assert!(canvas.deselect());
        assert!(canvas.transform_tool().is_none());
        assert!(!canvas.pointer_down(HandleType::Move, Coordinate::default()));
        assert!(!canvas.deselect());
    }

    #[test]
    fn duplicate_offsets_copy_and_selects_it() {
        let (mut canvas, id) = canvas_with_chart(40.0, 60.0, 120.0, 90.0);
        canvas.append(Value::Null, Position::new(0.0, 0.0, 1), Size::new(50.0, 50.0));
        canvas.select(id);

        let copy = canvas.duplicate_selected().unwrap();
        let chart = canvas.chart(copy).unwrap();
        assert_eq!(chart.position, Position::new(50.0, 70.0, 2));
        assert_eq!(chart.size, Size::new(120.0, 90.0));
        assert_eq!(chart.option, canvas.chart(id).unwrap().option);
        assert_eq!(canvas.selected(), Some(copy));
        assert_eq!(canvas.transform_tool().unwrap().position, Offset::new(50.0, 70.0));
    }

    #[test]
    fn delete_selected_clears_overlay_only_for_that_chart() {
        let (mut canvas, a) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        let b = canvas.append(Value::Null, Position::new(200.0, 0.0, 1), Size::new(80.0, 80.0));
        let b_before = canvas.chart(b).unwrap().clone();
        canvas.select(a);

        let removed = canvas.delete_selected().unwrap();
        assert_eq!(removed.id, a);
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.chart(b), Some(&b_before));
        assert!(canvas.transform_tool().is_none());
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn duplicate_and_delete_without_selection_do_nothing() {
        let (mut canvas, _) = canvas_with_chart(0.0, 0.0, 100.0, 100.0);
        assert_eq!(canvas.dispatch(CanvasAction::DuplicateSelected), Outcome::Unchanged);
        assert_eq!(canvas.dispatch(CanvasAction::DeleteSelected), Outcome::Unchanged);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn paint_order_follows_stacking_order() {
        let mut canvas = CanvasState::default();
        let top = canvas.append(Value::Null, Position::new(0.0, 0.0, 5), Size::new(60.0, 60.0));
        let bottom = canvas.append(Value::Null, Position::new(0.0, 0.0, 0), Size::new(60.0, 60.0));
        let ids: Vec<ChartId> = canvas.paint_order().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![bottom, top]);
    }

    #[test]
    fn dispatch_reports_outcomes() {
        let mut canvas = CanvasState::default();
        let Outcome::Created(id) = canvas.dispatch(CanvasAction::Append {
            option: Value::Null,
            position: Position::default(),
            size: Size::new(100.0, 100.0),
        }) else {
            panic!("append must create a chart");
        };
        assert_eq!(canvas.dispatch(CanvasAction::Select(id)), Outcome::Updated);
        assert_eq!(
            canvas.dispatch(CanvasAction::PointerDown { handle: HandleType::Bottom, pointer: Coordinate::default() }),
            Outcome::Updated
        );
        assert_eq!(
            canvas.dispatch(CanvasAction::PointerMove { pointer: Coordinate::new(0.0, -80.0), zoom: Zoom::ONE }),
            Outcome::Unchanged
        );
        assert_eq!(canvas.dispatch(CanvasAction::PointerUp), Outcome::Updated);
        assert!(matches!(canvas.dispatch(CanvasAction::Delete(id)), Outcome::Removed(_)));
    }
}
