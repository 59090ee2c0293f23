//! Error types for blobfind-region

use thiserror::Error;

/// Errors that can occur during labeling and ranking operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobfind_core::Error),

    /// Pixel id outside the disjoint-set range
    #[error("pixel id out of range: {id} >= {len}")]
    IdOutOfRange { id: usize, len: usize },

    /// Union argument is not a live root
    #[error("not a root: {0}")]
    NotARoot(usize),

    /// Union of a root with itself
    #[error("cannot union a root with itself: {0}")]
    SelfUnion(usize),

    /// Chain node handle outside the arena
    #[error("chain node out of range: {node} >= {len}")]
    NodeOutOfRange { node: u32, len: usize },

    /// Disjoint sets constructed from no seed pixels
    #[error("empty seed data")]
    EmptySeeds,

    /// Requested blob count below 1
    #[error("k must be at least 1, got {0}")]
    InvalidK(usize),

    /// Rendering requested before labeling has run
    #[error("labeling has not been run")]
    NotLabeled,

    /// Component has no member pixels
    #[error("component {0} has no member pixels")]
    EmptyComponent(usize),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
