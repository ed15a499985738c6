// File: crates/scaling-chart/src/renderer.rs
// Summary: The ChartRenderer seam: validate two columns, build a line-and-marker chart, save it.

use std::path::Path;

use tracing::debug;

use crate::chart::{raster_format_for, Chart, RenderOptions};
use crate::error::Result;
use crate::sample::Samples;
use crate::series::Series;
use crate::style::SeriesStyle;

/// Everything one render call needs, borrowed from the caller.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    pub x_values: &'a [f64],
    pub y_values: &'a [f64],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub title: &'a str,
    pub output_path: &'a Path,
}

impl<'a> RenderRequest<'a> {
    pub fn new(x_values: &'a [f64], y_values: &'a [f64], output_path: &'a Path) -> Self {
        Self { x_values, y_values, x_label: "", y_label: "", title: "", output_path }
    }

    pub fn labels(mut self, x_label: &'a str, y_label: &'a str) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Build the chart this request describes, with axes fitted to the data.
    pub fn to_chart(&self, style: SeriesStyle) -> Result<Chart> {
        let samples = Samples::from_columns(self.x_values, self.y_values)?;
        let mut chart = Chart::new().with_title(self.title);
        chart.x_axis.label = self.x_label.to_owned();
        chart.y_axis.label = self.y_label.to_owned();
        chart.add_series(Series::new(samples).with_style(style));
        chart.autoscale();
        Ok(chart)
    }
}

/// Turns a [`RenderRequest`] into an image file.
///
/// Implementations must validate before touching the filesystem: a failed
/// call leaves `output_path` as it was.
pub trait ChartRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<()>;
}

/// Default renderer: Skia CPU raster surface, encoded by file extension.
#[derive(Clone, Debug, Default)]
pub struct SkiaChartRenderer {
    pub options: RenderOptions,
    pub style: SeriesStyle,
}

impl SkiaChartRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, style: SeriesStyle::default() }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

impl ChartRenderer for SkiaChartRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<()> {
        raster_format_for(request.output_path)?;
        let chart = request.to_chart(self.style)?;
        debug!(
            points = request.x_values.len(),
            path = %request.output_path.display(),
            "rendering line chart"
        );
        chart.render_to_file(&self.options, request.output_path)
    }
}

/// Render `x_values`/`y_values` as a line-and-marker chart with the default renderer.
pub fn render(
    x_values: &[f64],
    y_values: &[f64],
    x_label: &str,
    y_label: &str,
    title: &str,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let request = RenderRequest::new(x_values, y_values, output_path.as_ref())
        .labels(x_label, y_label)
        .title(title);
    SkiaChartRenderer::default().render(&request)
}
