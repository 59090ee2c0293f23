//! Connected component labeling over a thresholded image
//!
//! A single raster-order pass merges each pixel with its causal neighbors
//! (the pixel above and the pixel to the left) whenever their stored colors
//! are within the classification threshold. After the pass, the disjoint
//! sets' roots enumerate all 4-connected components; every pixel belongs to
//! exactly one of them.

use crate::error::RegionResult;
use crate::union_find::DisjointSets;
use blobfind_core::{Raster, pixel_id};

/// The result of a labeling pass: disjoint sets plus the image geometry
/// and threshold they were built under.
#[derive(Debug)]
pub struct Labeling {
    sets: DisjointSets,
    width: u32,
    height: u32,
    max_distance: u32,
}

impl Labeling {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color distance threshold the components were merged under
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// The underlying disjoint sets
    pub fn sets(&self) -> &DisjointSets {
        &self.sets
    }

    /// Mutable access, needed for `find` (path compression)
    pub fn sets_mut(&mut self) -> &mut DisjointSets {
        &mut self.sets
    }
}

/// Roots of the causal neighbors (above, left) of a pixel id.
///
/// A neighbor beyond the image edge is `None`; there is no wrap-around.
pub fn neighbor_roots(
    image: &Raster,
    sets: &mut DisjointSets,
    x: u32,
    y: u32,
) -> RegionResult<(Option<usize>, Option<usize>)> {
    let width = image.width();
    let above = if y > 0 {
        Some(sets.find(pixel_id(width, x, y - 1))?)
    } else {
        None
    };
    let left = if x > 0 {
        Some(sets.find(pixel_id(width, x - 1, y))?)
    } else {
        None
    };
    Ok((above, left))
}

/// Label the connected components of a thresholded image.
///
/// Scans in raster order (increasing y, then increasing x). For each pixel,
/// both causal neighbors are checked independently: if the neighbor's
/// stored color is within `max_distance` of the current pixel's stored
/// color and their roots differ, the groups are unioned. The second check
/// re-resolves the current pixel's root, so it sees the result of the
/// first union.
///
/// Component membership is independent of processing order; which id
/// survives as a root is not, and callers must not rely on it.
pub fn label_components(image: &Raster, max_distance: u32) -> RegionResult<Labeling> {
    let width = image.width();
    let height = image.height();
    let mut sets = DisjointSets::for_image(width, height)?;

    for y in 0..height {
        for x in 0..width {
            let id = pixel_id(width, x, y);
            let Some(color) = image.get_color(x, y) else {
                continue;
            };
            let (above, left) = neighbor_roots(image, &mut sets, x, y)?;

            if let Some(above_root) = above
                && let Some(above_color) = image.get_color(x, y - 1)
                && color.distance(above_color) <= max_distance
            {
                let root = sets.find(id)?;
                if root != above_root {
                    sets.union(root, above_root)?;
                }
            }

            if let Some(left_root) = left
                && let Some(left_color) = image.get_color(x - 1, y)
                && color.distance(left_color) <= max_distance
            {
                let root = sets.find(id)?;
                if root != left_root {
                    sets.union(root, left_root)?;
                }
            }
        }
    }

    Ok(Labeling {
        sets,
        width,
        height,
        max_distance,
    })
}
