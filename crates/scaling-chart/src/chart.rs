// File: crates/scaling-chart/src/chart.rs
// Summary: Chart struct and headless raster rendering pipeline (Skia CPU surface, image encoding).

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::{ChartError, Result, ValidationError};
use crate::geometry::RectI32;
use crate::grid;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::style::Marker;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, AUTOSCALE_MARGIN, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// An RGBA8 pixel buffer read back from the raster surface.
pub struct Rgba8 {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: String,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data of every series, padding by `margin` of each span.
    /// Axes are left untouched when the chart has no series.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            let (x0, x1) = s.samples.x_extent();
            let (y0, y1) = s.samples.y_extent();
            x = (x.0.min(x0), x.1.max(x1));
            y = (y.0.min(y0), y.1.max(y1));
        }
        if !x.0.is_finite() || !y.0.is_finite() {
            return;
        }
        self.x_axis.fit(x, margin);
        self.y_axis.fit(y, margin);
        debug!(
            x_min = self.x_axis.min, x_max = self.x_axis.max,
            y_min = self.y_axis.min, y_max = self.y_axis.max,
            "autoscaled axes"
        );
    }

    /// Autoscale with the default margin.
    pub fn autoscale(&mut self) {
        self.autoscale_axes(AUTOSCALE_MARGIN);
    }

    /// Render into an RGBA8 (unpremultiplied) buffer using a CPU raster surface.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8> {
        let (w, h) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;

        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(Rgba8 { pixels, width: w as u32, height: h as u32, stride })
    }

    /// Render and encode in memory.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
        let frame = self.render_to_rgba8(opts)?;
        encode(frame, format)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_bytes(opts, ImageFormat::Png)
    }

    /// Render to `path`, choosing the format from its extension and replacing any existing file.
    /// Nothing is written unless rendering and encoding both succeed.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = raster_format_for(path)?;
        let bytes = self.render_to_bytes(opts, format)?;
        std::fs::write(path, &bytes)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        info!(
            path = %path.display(),
            bytes = bytes.len(),
            width = opts.width,
            height = opts.height,
            "wrote chart"
        );
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::new(
            (self.x_axis.min, self.x_axis.max),
            (plot.left as f32, plot.right as f32),
        );
        let sy = LinearScale::new(
            (self.y_axis.min, self.y_axis.max),
            (plot.bottom as f32, plot.top as f32),
        );

        // Background
        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(to_rect(&plot), &fill);

        let x_ticks = max_ticks(plot.width(), 80.0);
        let y_ticks = max_ticks(plot.height(), 50.0);
        let xs = self.x_axis.ticks(x_ticks);
        let ys = self.y_axis.ticks(y_ticks);

        draw_grid(canvas, theme, &plot, &sx, &sy, &xs, &ys);
        draw_axes(canvas, theme, &plot, &sx, &sy, &xs, &ys);

        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, theme, &sx, &sy, s);
        }
        canvas.restore();

        if opts.draw_labels {
            let shaper = TextShaper::new();
            let x_step = self.x_axis.tick_step(x_ticks);
            let y_step = self.y_axis.tick_step(y_ticks);
            draw_tick_labels(canvas, &shaper, theme, &plot, &sx, &sy, (&xs, x_step), (&ys, y_step));
            draw_titles(canvas, &shaper, theme, &plot, opts, self);
        }
    }
}

/// Map a file extension onto a raster format this crate can encode.
pub fn raster_format_for(path: &Path) -> Result<ImageFormat, ValidationError> {
    let unsupported = || ValidationError::UnsupportedFormat { path: path.to_path_buf() };
    match ImageFormat::from_path(path) {
        Ok(f @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Tiff)) => {
            Ok(f)
        }
        _ => Err(unsupported()),
    }
}

fn encode(frame: Rgba8, format: ImageFormat) -> Result<Vec<u8>> {
    let Rgba8 { pixels, width, height, .. } = frame;
    let len = pixels.len();
    let rgba = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or(ChartError::BufferShape { width, height, len })?;
    // JPEG has no alpha channel; the background is always opaque.
    let rgb = image::DynamicImage::ImageRgba8(rgba).into_rgb8();
    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, format)?;
    Ok(out.into_inner())
}

// ---- helpers ----------------------------------------------------------------

fn max_ticks(extent_px: i32, px_per_tick: f32) -> usize {
    ((extent_px as f32 / px_per_tick) as usize).clamp(2, 10)
}

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    xs: &[f64],
    ys: &[f64],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for &x in xs {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in ys {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    xs: &[f64],
    ys: &[f64],
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    // Frame
    canvas.draw_rect(to_rect(plot), &axis_paint);

    // Tick marks, pointing outward
    let mut tick_paint = axis_paint.clone();
    tick_paint.set_color(theme.tick);
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in xs {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick_paint);
    }
    for &y in ys {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
) {
    let style = &series.style;
    let color = style.color.unwrap_or(theme.line_stroke);
    let points: Vec<skia::Point> = series
        .samples
        .iter()
        .map(|p| skia::Point::new(sx.to_px(p.x), sy.to_px(p.y)))
        .collect();

    if points.len() >= 2 && style.line_width > 0.0 {
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    let r = style.marker_size * 0.5;
    if style.marker == Marker::None || r <= 0.0 {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for &p in &points {
        draw_marker(canvas, style.marker, p, r, &fill);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, p: skia::Point, r: f32, paint: &skia::Paint) {
    match marker {
        Marker::Circle => {
            canvas.draw_circle(p, r, paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(p.x - r, p.y - r, p.x + r, p.y + r), paint);
        }
        Marker::Triangle => {
            let mut tri = skia::Path::new();
            tri.move_to((p.x, p.y - r));
            tri.line_to((p.x + r, p.y + r));
            tri.line_to((p.x - r, p.y + r));
            tri.close();
            canvas.draw_path(&tri, paint);
        }
        Marker::None => {}
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    (xs, x_step): (&[f64], f64),
    (ys, y_step): (&[f64], f64),
) {
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in xs {
        let label = grid::format_tick(x, x_step);
        let y = b + TICK_LEN + 4.0 + TICK_LABEL_SIZE;
        let x = sx.to_px(x);
        shaper.draw(canvas, &label, x, y, Anchor::Center, TICK_LABEL_SIZE, theme.tick, true);
    }
    for &y in ys {
        let label = grid::format_tick(y, y_step);
        let (x, y) = (l - TICK_LEN - 4.0, sy.to_px(y) + TICK_LABEL_SIZE * 0.4);
        shaper.draw(canvas, &label, x, y, Anchor::Right, TICK_LABEL_SIZE, theme.tick, true);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &RectI32,
    opts: &RenderOptions,
    chart: &Chart,
) {
    let cx = plot.center_x();

    // Title centred in the top inset
    let title_y = (plot.top as f32 * 0.5 + TITLE_SIZE * 0.4).max(TITLE_SIZE);
    shaper.draw(canvas, &chart.title, cx, title_y, Anchor::Center, TITLE_SIZE, theme.title, false);

    // X label along the bottom edge of the figure
    let x_label_y = opts.height as f32 - 10.0;
    let (x_label, color) = (&chart.x_axis.label, theme.axis_label);
    shaper.draw(canvas, x_label, cx, x_label_y, Anchor::Center, LABEL_SIZE, color, false);

    // Y label rotated along the left edge
    let (y_label, cy) = (&chart.y_axis.label, plot.center_y());
    shaper.draw_vertical(canvas, y_label, LABEL_SIZE, cy, LABEL_SIZE, color);
}
