//! Blob ranking, recoloring and bounding boxes
//!
//! Turns the disjoint sets left by a labeling pass into ranked blobs:
//! collects the distinct roots, drops the background components, sorts the
//! rest by pixel count and derives the per-rank recoloring shade from the
//! target color.

use std::collections::BTreeSet;

use crate::error::{RegionError, RegionResult};
use crate::label::Labeling;
use blobfind_core::{Box, Color, Raster};

/// One non-background component, identified by its surviving root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedBlob {
    /// Root id of the component's group
    pub root: usize,
    /// Number of member pixels
    pub pixel_count: u32,
}

/// Collect the distinct live roots by resolving every pixel id.
///
/// The ascending id order of the returned set is what makes rank order
/// deterministic for equally-sized blobs.
pub fn collect_roots(labeling: &mut Labeling) -> RegionResult<BTreeSet<usize>> {
    let sets = labeling.sets_mut();
    let mut roots = BTreeSet::new();
    for id in 0..sets.len() {
        roots.insert(sets.find(id)?);
    }
    Ok(roots)
}

/// Rank the non-background components by descending pixel count.
///
/// `image` must be the thresholded image the labeling was built from. A
/// component is background iff its representative pixel is pure white;
/// one sample suffices because classification is uniform within a
/// component. Ties keep ascending root order.
pub fn rank_components(image: &Raster, labeling: &mut Labeling) -> RegionResult<Vec<RankedBlob>> {
    let roots = collect_roots(labeling)?;
    let sets = labeling.sets();

    let mut blobs = Vec::new();
    for root in roots {
        let chain = sets.get(root)?;
        let Some((x, y)) = chain.first(sets.arena()) else {
            continue;
        };
        let Some(color) = image.get_color(x, y) else {
            continue;
        };
        if color.distance(Color::WHITE) == 0 {
            continue;
        }
        blobs.push(RankedBlob {
            root,
            pixel_count: chain.len(),
        });
    }

    // Stable sort: equal sizes keep the root-enumeration order
    blobs.sort_by(|a, b| b.pixel_count.cmp(&a.pixel_count));
    Ok(blobs)
}

/// Shade for rank `rank` of `k`, derived from the target color.
///
/// `channel = round((k - rank + 1) / (k + 1) * target_channel)`, darkest at
/// the last rank. A shade that collapses to pure black is lifted to
/// (10, 10, 10) so recolored blobs stay distinguishable from the
/// foreground mask; pure white is lowered to (245, 245, 245) likewise.
pub fn shade_for_rank(rank: usize, k: usize, target: Color) -> Color {
    let i = if k == 0 { 0 } else { rank.min(k - 1) };
    let factor = (k - i + 1) as f64 / (k + 1) as f64;
    let r = (factor * target.r as f64).round() as u8;
    let g = (factor * target.g as f64).round() as u8;
    let b = (factor * target.b as f64).round() as u8;

    if r == 0 && g == 0 && b == 0 {
        Color::new(10, 10, 10)
    } else if r == 255 && g == 255 && b == 255 {
        Color::new(245, 245, 245)
    } else {
        Color::new(r, g, b)
    }
}

/// Recolor the top `k` ranked blobs on the working image.
pub fn recolor_top_k(
    image: &mut Raster,
    labeling: &Labeling,
    blobs: &[RankedBlob],
    k: usize,
    target: Color,
) -> RegionResult<()> {
    let sets = labeling.sets();
    for (rank, blob) in blobs.iter().take(k).enumerate() {
        let shade = shade_for_rank(rank, k, target);
        let chain = sets.get(blob.root)?;
        for (x, y) in chain.iter(sets.arena()) {
            image.set_color(x, y, shade)?;
        }
    }
    Ok(())
}

/// Axis-aligned bounding box of a component, inset by one pixel on each
/// side: origin `(min_x - 1, min_y - 1)`, width `(max_x - min_x) + 3`,
/// height `(max_y - min_y) + 3`.
///
/// # Errors
///
/// Returns [`RegionError::EmptyComponent`] if the root's chain is empty.
pub fn bounding_box(labeling: &Labeling, root: usize) -> RegionResult<Box> {
    let sets = labeling.sets();
    let chain = sets.get(root)?;

    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y) in chain.iter(sets.arena()) {
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(x),
                min_y.min(y),
                max_x.max(x),
                max_y.max(y),
            ),
        });
    }
    let Some((min_x, min_y, max_x, max_y)) = bounds else {
        return Err(RegionError::EmptyComponent(root));
    };

    Ok(Box::new(
        min_x as i32 - 1,
        min_y as i32 - 1,
        (max_x - min_x) as i32 + 3,
        (max_y - min_y) as i32 + 3,
    )?)
}
