/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use studio_core::{Chart, Layout};
use thiserror::Error;
use tiny_skia::*;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create pixmap: {0}")]
    PixmapCreationError(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

const DEFAULT_FRAME_FILL: &str = "#e8eef7";
const FRAME_STROKE: &str = "#4a6fa5";

/// Rasterizes a layout into a thumbnail: background plus one outlined box per
/// chart, in paint order.
pub struct Thumbnailer {
    pixmap_buffer: Option<Pixmap>,
    stroke_width: f32,
}

impl Default for Thumbnailer {
    fn default() -> Self {
        Self::new()
    }
}

impl Thumbnailer {
    pub fn new() -> Self {
        Self {
            pixmap_buffer: None,
            stroke_width: 1.0,
        }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Renders into the internal buffer and returns premultiplied RGBA8 pixels.
    /// The buffer is reused while the output size stays the same.
    pub fn render_raw(&mut self, layout: &Layout, scale: f32) -> Result<&[u8], RenderError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidDimensions(format!("scale must be > 0, got {}", scale)));
        }
        let width = (layout.width as f32 * scale).round() as u32;
        let height = (layout.height as f32 * scale).round() as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions(format!("{}x{} thumbnail", width, height)));
        }

        if self.pixmap_buffer.as_ref().map_or(true, |p| p.width() != width || p.height() != height) {
            self.pixmap_buffer = Pixmap::new(width, height);
        }

        let pixmap = self.pixmap_buffer.as_mut()
            .ok_or_else(|| RenderError::PixmapCreationError("Invalid canvas dimensions".into()))?;

        match parse_color(&layout.background) {
            Some(color) => pixmap.fill(color),
            None => {
                warn!(background = %layout.background, "unsupported background, using white");
                pixmap.fill(Color::WHITE);
            }
        }

        let transform = Transform::from_scale(scale, scale);
        let stroke_color = parse_color(FRAME_STROKE)
            .ok_or_else(|| RenderError::InvalidColorFormat(FRAME_STROKE.into()))?;
        let stroke = Stroke {
            width: self.stroke_width,
            ..Stroke::default()
        };

        for chart in layout.paint_order() {
            let rect = frame_rect(chart)?;

            let fill_hex = chart.option.get("color").and_then(|c| c.as_str()).unwrap_or(DEFAULT_FRAME_FILL);
            let fill_color = parse_color(fill_hex)
                .ok_or_else(|| RenderError::InvalidColorFormat(fill_hex.to_string()))?;

            let mut paint = Paint::default();
            paint.set_color(fill_color);
            paint.anti_alias = true;
            pixmap.fill_rect(rect, &paint, transform, None);

            let mut outline = Paint::default();
            outline.set_color(stroke_color);
            outline.anti_alias = true;
            let path = PathBuilder::from_rect(rect);
            pixmap.stroke_path(&path, &outline, &stroke, transform, None);
        }

        debug!(width, height, charts = layout.charts.len(), "thumbnail rendered");

        self.pixmap_buffer
            .as_ref()
            .map(|p| p.data())
            .ok_or_else(|| RenderError::PixmapCreationError("Pixmap buffer missing".into()))
    }

    /// Renders and encodes the thumbnail as PNG.
    pub fn render(&mut self, layout: &Layout, scale: f32) -> Result<Vec<u8>, RenderError> {
        self.render_raw(layout, scale)?;

        self.pixmap_buffer.as_ref()
            .ok_or_else(|| RenderError::PixmapCreationError("Pixmap buffer missing".into()))?
            .encode_png()
            .map_err(|e| RenderError::EncodingError(e.to_string()))
    }
}

fn frame_rect(chart: &Chart) -> Result<Rect, RenderError> {
    let size = chart.displayed_size();
    Rect::from_xywh(
        chart.position.left as f32,
        chart.position.top as f32,
        size.width as f32,
        size.height as f32,
    )
    .ok_or_else(|| {
        RenderError::InvalidDimensions(format!("chart {} width/height must be > 0", chart.id))
    })
}

fn parse_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() != 7 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(hex.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(5..7)?, 16).ok()?;

    Some(Color::from_rgba8(r, g, b, 255))
}
