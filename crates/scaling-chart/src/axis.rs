// File: crates/scaling-chart/src/axis.rs
// Summary: Axis model with label and data range, plus autoscale from sample extents.

use crate::grid;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fit the range to `(lo, hi)` and pad both ends by `margin` of the span.
    /// A zero-width extent (one sample) is widened around it by half a unit, or by
    /// a millionth of its magnitude when that is larger, so the span stays
    /// representable at any scale.
    pub fn fit(&mut self, (lo, hi): (f64, f64), margin: f64) {
        let (mut lo, mut hi) = (lo, hi);
        if (hi - lo).abs() < 1e-9 {
            let pad = 0.5f64.max(lo.abs() * 1e-6);
            lo -= pad;
            hi += pad;
        }
        if !(hi > lo) {
            hi = lo + lo.abs().max(1.0);
        }
        let pad = (hi - lo) * margin.max(0.0);
        self.min = lo - pad;
        self.max = hi + pad;
    }

    /// Tick positions for at most `max_ticks` intervals.
    pub fn ticks(&self, max_ticks: usize) -> Vec<f64> {
        grid::nice_ticks(self.min, self.max, max_ticks)
    }

    pub fn tick_step(&self, max_ticks: usize) -> f64 {
        grid::nice_step(self.span(), max_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_by_margin() {
        let mut a = Axis::default_x();
        a.fit((1.0, 8.0), 0.05);
        assert!((a.min - 0.65).abs() < 1e-12);
        assert!((a.max - 8.35).abs() < 1e-12);
    }

    #[test]
    fn fit_single_value() {
        let mut a = Axis::default_y();
        a.fit((1.0, 1.0), 0.0);
        assert_eq!((a.min, a.max), (0.5, 1.5));
        assert!(a.span() > 0.0);
    }

    #[test]
    fn fit_single_large_value() {
        for v in [1e16, -1e17, 3.5e200] {
            let mut a = Axis::default_x();
            a.fit((v, v), 0.05);
            assert!(a.min < v && v < a.max, "{v}: {a:?}");
            assert!(a.span() > 0.0 && a.span().is_finite());
            assert!(!a.ticks(6).is_empty(), "{v}");
        }
    }

    #[test]
    fn fit_keeps_label() {
        let mut a = Axis::new("Total Time (s)", 0.0, 1.0);
        a.fit((4.377, 20.768), 0.05);
        assert_eq!(a.label, "Total Time (s)");
        assert!(a.min < 4.377 && a.max > 20.768);
    }
}
