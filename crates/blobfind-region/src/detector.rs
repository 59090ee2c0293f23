//! The blob detector pipeline
//!
//! A [`Detector`] owns a pristine copy of the source image plus the working
//! copy the pipeline destroys: [`Detector::detect`] thresholds the working
//! copy and labels its connected components, [`Detector::render`] ranks the
//! blobs, recolors the top k and draws the bounding box of the largest blob
//! on a fresh clone of the pristine source.
//!
//! `render` does not consume the labeling, so repeated calls with the same
//! `k` produce identical output.

use std::io::Write;

use crate::error::{RegionError, RegionResult};
use crate::label::{Labeling, label_components};
use crate::rank::{bounding_box, rank_components, recolor_top_k};
use crate::threshold::threshold_in_place;
use blobfind_core::{Color, Raster};

/// Stroke width of the bounding box outline
const BOX_STROKE: u32 = 2;

/// Component counts delivered to the report sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobReport {
    /// Number of non-background components found
    pub total_components: usize,
    /// Number of blobs actually ranked and recolored (clamped)
    pub k: usize,
    /// Pixel count per ranked blob, largest first
    pub blob_sizes: Vec<u32>,
}

impl BlobReport {
    /// Write the report in its plain text shape:
    ///
    /// ```text
    /// 2/5
    /// Blob 1: 120 pixels
    /// Blob 2: 48 pixels
    /// ```
    pub fn write_text<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{}/{}", self.k, self.total_components)?;
        for (rank, size) in self.blob_sizes.iter().enumerate() {
            writeln!(w, "Blob {}: {} pixels", rank + 1, size)?;
        }
        Ok(())
    }
}

/// Everything one render pass produces
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Working image with the top-k blobs recolored
    pub recolored: Raster,
    /// Pristine source with the largest blob's bounding box drawn
    pub boxed: Raster,
    /// Component counts and ranked sizes
    pub report: BlobReport,
}

/// Color blob detector over one source image
#[derive(Debug)]
pub struct Detector {
    source: Raster,
    work: Raster,
    target: Color,
    max_distance: u32,
    labeling: Option<Labeling>,
}

impl Detector {
    /// Create a detector for a source image, target color and threshold.
    pub fn new(source: Raster, target: Color, max_distance: u32) -> Self {
        let work = source.clone();
        Self {
            source,
            work,
            target,
            max_distance,
            labeling: None,
        }
    }

    /// The pristine source image
    pub fn source(&self) -> &Raster {
        &self.source
    }

    /// The working image: thresholded once [`detect`](Self::detect) has run
    pub fn working(&self) -> &Raster {
        &self.work
    }

    /// The target color being detected
    pub fn target(&self) -> Color {
        self.target
    }

    /// The color distance threshold
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// The labeling state, once [`detect`](Self::detect) has run
    pub fn labeling(&self) -> Option<&Labeling> {
        self.labeling.as_ref()
    }

    /// Threshold the working image and label its connected components.
    ///
    /// Restores the working image from the pristine source first, so
    /// calling this twice is idempotent.
    pub fn detect(&mut self) -> RegionResult<()> {
        self.work = self.source.clone();
        threshold_in_place(&mut self.work, self.target, self.max_distance)?;
        self.labeling = Some(label_components(&self.work, self.max_distance)?);
        Ok(())
    }

    /// Rank the blobs and produce the recolored image, the bounding box
    /// image and the report.
    ///
    /// `k` is clamped to the number of non-background components; with no
    /// such components the outputs are the unrecolored working image, the
    /// untouched source, and a `0/0` report.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidK`] if `k < 1` and
    /// [`RegionError::NotLabeled`] if [`detect`](Self::detect) has not run.
    pub fn render(&mut self, k: usize) -> RegionResult<RenderOutput> {
        if k < 1 {
            return Err(RegionError::InvalidK(k));
        }
        let labeling = self.labeling.as_mut().ok_or(RegionError::NotLabeled)?;

        let blobs = rank_components(&self.work, labeling)?;
        let total = blobs.len();
        let k = k.min(total);

        let mut recolored = self.work.clone();
        recolor_top_k(&mut recolored, labeling, &blobs, k, self.target)?;

        let mut boxed = self.source.clone();
        if let Some(largest) = blobs.first() {
            let b = bounding_box(labeling, largest.root)?;
            boxed.draw_box_outline(&b, BOX_STROKE, Color::BLACK)?;
        }

        let report = BlobReport {
            total_components: total,
            k,
            blob_sizes: blobs[..k].iter().map(|b| b.pixel_count).collect(),
        };

        Ok(RenderOutput {
            recolored,
            boxed,
            report,
        })
    }
}
