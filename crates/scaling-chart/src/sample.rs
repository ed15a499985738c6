// File: crates/scaling-chart/src/sample.rs
// Summary: Sample pairs and the validated, ordered sample sequence built from two parallel columns.

use crate::error::{Column, ValidationError};

/// One (x, y) observation, e.g. (thread count, elapsed seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Non-empty, finite samples in drawing order.
///
/// Contract: `len() >= 1` and every coordinate is finite. Order is the order
/// the columns were given in; it is never sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    points: Vec<Sample>,
}

impl Samples {
    /// Pair two parallel columns by index.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Result<Self, ValidationError> {
        if xs.len() != ys.len() {
            return Err(ValidationError::LengthMismatch { x: xs.len(), y: ys.len() });
        }
        if xs.is_empty() {
            return Err(ValidationError::Empty);
        }
        check_finite(xs, Column::X)?;
        check_finite(ys, Column::Y)?;
        let points = xs.iter().zip(ys).map(|(&x, &y)| Sample::new(x, y)).collect();
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.points.iter()
    }

    /// Inclusive (min, max) of the x column.
    pub fn x_extent(&self) -> (f64, f64) {
        extent(self.points.iter().map(|p| p.x))
    }

    /// Inclusive (min, max) of the y column.
    pub fn y_extent(&self) -> (f64, f64) {
        extent(self.points.iter().map(|p| p.y))
    }
}

fn check_finite(values: &[f64], axis: Column) -> Result<(), ValidationError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ValidationError::NonFinite { axis, index }),
        None => Ok(()),
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
