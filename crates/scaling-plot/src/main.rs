// File: crates/scaling-plot/src/main.rs
// Summary: Renders measured thread count vs total completion time to performance.png.

use std::path::Path;

use anyhow::{Context, Result};
use scaling_chart::{ChartRenderer, RenderRequest, SkiaChartRenderer};
use tracing_subscriber::EnvFilter;

/// Worker threads used for each measured run.
const THREADS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];
/// Wall-clock seconds for each run, same order as `THREADS`.
const TIMES: [f64; 4] = [20.768, 11.943, 5.139, 4.377];

const X_LABEL: &str = "Number of Threads";
const Y_LABEL: &str = "Total Time (s)";
const TITLE: &str = "Thread Count vs. Completion Time";
const OUTPUT: &str = "performance.png";

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    init_logging();
    let out = Path::new(OUTPUT);
    plot_performance(&SkiaChartRenderer::default(), out)?;
    tracing::info!("Wrote {}", out.display());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn plot_performance(renderer: &dyn ChartRenderer, out: &Path) -> Result<()> {
    let request = RenderRequest::new(&THREADS, &TIMES, out)
        .labels(X_LABEL, Y_LABEL)
        .title(TITLE);
    renderer
        .render(&request)
        .with_context(|| format!("failed to render '{}'", out.display()))
}
