//! blobfind - Color blob detection library
//!
//! blobfind finds regions ("blobs") of a target color inside a raster
//! image, ranks them by pixel area, recolors the top-k and draws a bounding
//! box around the largest.
//!
//! # Overview
//!
//! The pipeline has three strictly sequential stages:
//!
//! 1. **Threshold** - every pixel is classified against the target color
//!    and rewritten as pure black (match) or pure white (background)
//! 2. **Label** - a raster-order pass merges adjacent same-class pixels
//!    through a union-find over pixel ids, yielding connected components
//! 3. **Rank and render** - non-background components are sorted by size;
//!    the top-k are recolored in shades of the target color and the
//!    largest gets a bounding box on a pristine copy of the source
//!
//! # Example
//!
//! ```
//! use blobfind::{Color, Raster, Detector};
//!
//! let mut image = Raster::filled(8, 8, Color::WHITE).unwrap();
//! for x in 2..5 {
//!     image.set_color(x, 3, Color::RED).unwrap();
//! }
//!
//! let mut detector = Detector::new(image, Color::RED, 0);
//! detector.detect().unwrap();
//! let output = detector.render(1).unwrap();
//! assert_eq!(output.report.blob_sizes, vec![3]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobfind_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use blobfind_io as io;
pub use blobfind_region as region;

// The main pipeline surface
pub use blobfind_region::{BlobReport, Detector, RenderOutput};

use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Error for the one-shot pipeline entry
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Detection or ranking failed
    #[error("region error: {0}")]
    Region(#[from] blobfind_region::RegionError),

    /// The source image could not be loaded
    #[error("I/O error: {0}")]
    Io(#[from] blobfind_io::IoError),
}

/// Result alias for the one-shot pipeline entry
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Load an image, detect blobs of `target`, and persist both result images.
///
/// Failing to load the source ends the run: there is nothing to process.
/// Failures while persisting the outputs or writing the report are
/// contained locally - each is logged and skipped, the in-memory results
/// are unaffected, and the report is still returned.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] if the source cannot be read and
/// [`PipelineError::Region`] on contract violations (`k < 1`).
pub fn run_detection<W: Write>(
    input: &Path,
    target: Color,
    max_distance: u32,
    k: usize,
    recolored_path: &Path,
    boxed_path: &Path,
    report_out: &mut W,
) -> PipelineResult<BlobReport> {
    let source = io::read_image(input)?;

    let mut detector = Detector::new(source, target, max_distance);
    detector.detect()?;
    let output = detector.render(k)?;

    if let Err(e) = io::write_image(&output.recolored, recolored_path) {
        tracing::warn!(
            path = %recolored_path.display(),
            error = %e,
            "failed to save recolored image"
        );
    }
    if let Err(e) = io::write_image(&output.boxed, boxed_path) {
        tracing::warn!(
            path = %boxed_path.display(),
            error = %e,
            "failed to save bounding box image"
        );
    }
    if let Err(e) = output.report.write_text(report_out) {
        tracing::warn!(error = %e, "failed to write report");
    }

    Ok(output.report)
}
