// File: crates/scaling-chart/src/grid.rs
// Summary: Tick layout helpers: "nice" 1-2-5 tick steps, positions and labels.

/// Smallest step from {1, 2, 5} x 10^n that splits `span` into at most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / max_ticks.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions on multiples of a nice step, inside `[min, max]`.
/// Empty when the range is too narrow for its magnitude to index ticks.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, max_ticks);
    let (first, last) = ((lo / step).ceil(), (hi / step + 1e-9).floor());
    // i64::MAX is not exactly representable; stay well inside it
    const LIMIT: f64 = (1u64 << 62) as f64;
    if !step.is_finite() || !(first.abs() < LIMIT && last.abs() < LIMIT) {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}

/// Number of decimals needed to tell ticks `step` apart.
pub fn decimals_for(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

pub fn format_tick(value: f64, step: f64) -> String {
    format!("{:.*}", decimals_for(step), value)
}
