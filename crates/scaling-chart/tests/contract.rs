// File: crates/scaling-chart/tests/contract.rs
// Purpose: Failure modes and file side effects of the render call.

use std::path::Path;

use scaling_chart::{
    render, ChartError, ChartRenderer, RenderRequest, SkiaChartRenderer, ValidationError,
};

fn render_to(path: &Path, xs: &[f64], ys: &[f64]) -> Result<(), ChartError> {
    render(xs, ys, "Number of Threads", "Total Time (s)", "Thread Count vs. Completion Time", path)
}

#[test]
fn mismatched_lengths_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("performance.png");

    let err = render_to(&out, &[1.0, 2.0, 4.0], &[20.768, 11.943]).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, ChartError::Validation(ValidationError::LengthMismatch { x: 3, y: 2 })));
    assert!(!out.exists(), "no file on validation failure");
}

#[test]
fn empty_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.png");

    let err = render_to(&out, &[], &[]).unwrap_err();
    assert!(matches!(err, ChartError::Validation(ValidationError::Empty)));
    assert!(!out.exists());
}

#[test]
fn non_finite_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nan.png");

    let err = render_to(&out, &[1.0, 2.0], &[1.0, f64::NAN]).unwrap_err();
    assert!(err.is_validation());
    assert!(!out.exists());
}

#[test]
fn failed_validation_leaves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("performance.png");
    std::fs::write(&out, b"previous").unwrap();

    render_to(&out, &[1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
}

#[test]
fn missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("performance.png");

    let err = render_to(&out, &[1.0, 2.0], &[2.0, 1.0]).unwrap_err();
    match &err {
        ChartError::Io { path, .. } => assert_eq!(path, &out),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("performance.svg");

    let err = render_to(&out, &[1.0, 2.0], &[2.0, 1.0]).unwrap_err();
    assert!(matches!(err, ChartError::Validation(ValidationError::UnsupportedFormat { .. })));
    assert!(!out.exists());
}

#[test]
fn rerender_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("performance.png");
    std::fs::write(&out, b"stale").unwrap();

    let xs = [1.0, 2.0, 4.0, 8.0];
    let ys = [20.768, 11.943, 5.139, 4.377];
    render_to(&out, &xs, &ys).unwrap();
    let first = std::fs::read(&out).unwrap();
    render_to(&out, &xs, &ys).unwrap();
    let second = std::fs::read(&out).unwrap();

    assert_ne!(first, b"stale");
    assert_eq!(first, second);
}

#[test]
fn format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = SkiaChartRenderer::default();

    for (name, want) in [
        ("chart.png", image::ImageFormat::Png),
        ("chart.jpg", image::ImageFormat::Jpeg),
        ("chart.bmp", image::ImageFormat::Bmp),
    ] {
        let out = dir.path().join(name);
        let req = RenderRequest::new(&[1.0, 2.0], &[3.0, 1.0], &out).title(name);
        renderer.render(&req).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), want, "{name}");
    }
}
