// File: crates/scaling-chart/src/lib.rs
// Summary: Library entry point; exports the public API for building, rendering and saving charts.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod renderer;
pub mod sample;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions, Rgba8};
pub use error::{ChartError, Column, Result, ValidationError};
pub use renderer::{render, ChartRenderer, RenderRequest, SkiaChartRenderer};
pub use sample::{Sample, Samples};
pub use series::Series;
pub use style::{Marker, SeriesStyle};
pub use text::TextShaper;
pub use theme::Theme;
