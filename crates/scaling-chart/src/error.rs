// File: crates/scaling-chart/src/error.rs
// Summary: Error taxonomy for validation, filesystem and rendering failures.

use std::path::PathBuf;

use thiserror::Error;

/// Which column of the input a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::X => f.write_str("x"),
            Column::Y => f.write_str("y"),
        }
    }
}

/// Input rejected before anything is drawn or written.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("x and y sequences differ in length ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("at least one sample is required")]
    Empty,

    #[error("{axis} value at index {index} is not finite")]
    NonFinite { axis: Column, index: usize },

    #[error("cannot infer a raster image format from '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("pixel buffer of {len} bytes does not hold a {width}x{height} RGBA8 image")]
    BufferShape { width: u32, height: u32, len: usize },

    #[error("image encoding failed")]
    Encode(#[from] image::ImageError),
}

impl ChartError {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, ChartError::Validation(_))
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
