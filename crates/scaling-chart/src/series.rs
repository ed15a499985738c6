// File: crates/scaling-chart/src/series.rs
// Summary: A styled line-and-marker series over validated samples.

use crate::error::ValidationError;
use crate::sample::Samples;
use crate::style::SeriesStyle;

#[derive(Clone, Debug)]
pub struct Series {
    pub samples: Samples,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(samples: Samples) -> Self {
        Self { samples, style: SeriesStyle::default() }
    }

    /// Pair `xs` and `ys` by index; see [`Samples::from_columns`].
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Result<Self, ValidationError> {
        Samples::from_columns(xs, ys).map(Self::new)
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Segments are only drawn between consecutive samples.
    pub fn segment_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }
}
