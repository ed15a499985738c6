// File: crates/scaling-chart/src/style.rs
// Summary: Per-series stroke and marker styling.

use skia_safe as skia;

/// Glyph drawn at every sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Triangle,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Stroke and marker color; `None` uses the theme's `line_stroke`.
    pub color: Option<skia::Color>,
    pub line_width: f32,
    pub marker: Marker,
    /// Marker diameter in pixels.
    pub marker_size: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { color: None, line_width: 1.5, marker: Marker::Circle, marker_size: 7.0 }
    }
}

impl SeriesStyle {
    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_marker(mut self, marker: Marker, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size.max(0.0);
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.0);
        self
    }
}
