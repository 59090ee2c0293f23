//! Binary thresholding against a target color
//!
//! Classifies every pixel of an image as foreground (within `max_distance`
//! of the target color) or background, rewriting foreground pixels as pure
//! black and background pixels as pure white.

use crate::error::RegionResult;
use blobfind_core::{Color, Raster};

/// Threshold an image in place against a target color.
///
/// The comparison boundary is inclusive: a pixel whose distance to the
/// target equals `max_distance` counts as foreground. Distances range over
/// `[0, 100]`, so any `max_distance >= 100` matches every pixel.
///
/// This step is destructive; callers that later need the original colors
/// must keep a pristine copy.
pub fn threshold_in_place(
    image: &mut Raster,
    target: Color,
    max_distance: u32,
) -> RegionResult<()> {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if let Some(color) = image.get_color(x, y) {
                let class = if target.distance(color) <= max_distance {
                    Color::BLACK
                } else {
                    Color::WHITE
                };
                image.set_color(x, y, class)?;
            }
        }
    }
    Ok(())
}
