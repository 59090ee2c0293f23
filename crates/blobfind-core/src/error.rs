//! Error types for blobfind-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// blobfind-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the image bounds
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    CoordOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Linear pixel id outside the image bounds
    #[error("pixel id out of bounds: {id} >= {len}")]
    IdOutOfBounds { id: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
