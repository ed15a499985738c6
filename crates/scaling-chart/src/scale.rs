// File: crates/scaling-chart/src/scale.rs
// Summary: Linear data-to-pixel transform used for both axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// reversed (bottom > top) to flip the Y axis.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    p0: f32,
    p1: f32,
}

impl LinearScale {
    /// A domain too narrow for its magnitude is widened symmetrically, so its
    /// one value lands in the middle of the pixel range.
    pub fn new((d0, d1): (f64, f64), (p0, p1): (f32, f32)) -> Self {
        let scale = d0.abs().max(1.0);
        if (d1 - d0).abs() > scale * 1e-12 {
            return Self { d0, d1, p0, p1 };
        }
        let half = scale * 1e-6;
        Self { d0: d0 - half, d1: d0 + half, p0, p1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }
}
