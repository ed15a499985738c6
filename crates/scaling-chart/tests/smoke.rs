// File: crates/scaling-chart/tests/smoke.rs
// Purpose: End-to-end render of the thread scaling scenario to a PNG on disk.

use scaling_chart::{render, Chart, RenderOptions, Series};

const THREADS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];
const TIMES: [f64; 4] = [20.768, 11.943, 5.139, 4.377];

#[test]
fn render_scenario_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("performance.png");

    let title = "Thread Count vs. Completion Time";
    render(&THREADS, &TIMES, "Number of Threads", "Total Time (s)", title, &out)
        .expect("render should succeed");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let img = image::open(&out).expect("decodable image");
    let opts = RenderOptions::default();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
    assert_eq!((img.width(), img.height()), (640, 480));
}

#[test]
fn in_memory_png() {
    let mut chart = Chart::new().with_title("bytes");
    chart.add_series(Series::from_columns(&THREADS, &TIMES).unwrap());
    chart.autoscale();

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn single_sample_renders() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("single.png");
    render(&[1.0], &[1.0], "x", "y", "one point", &out).expect("single sample renders");
    assert!(image::open(&out).is_ok());
}
