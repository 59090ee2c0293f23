//! blobfind-region - Connected component labeling and blob ranking
//!
//! This crate is the core of the blobfind pipeline:
//!
//! - **Thresholding** - binary classification of every pixel against a
//!   target color ([`threshold_in_place`])
//! - **Labeling** - a raster-order pass merging adjacent same-class pixels
//!   through a union-find over pixel ids ([`label_components`])
//! - **Ranking** - background exclusion, size ordering, recolor shades and
//!   bounding boxes ([`rank`])
//! - **Detector** - the detect/render orchestration over one image
//!
//! # Example
//!
//! ```
//! use blobfind_core::{Color, Raster};
//! use blobfind_region::Detector;
//!
//! let mut image = Raster::filled(4, 4, Color::WHITE).unwrap();
//! image.set_color(1, 1, Color::BLUE).unwrap();
//! image.set_color(2, 1, Color::BLUE).unwrap();
//!
//! let mut detector = Detector::new(image, Color::BLUE, 0);
//! detector.detect().unwrap();
//! let output = detector.render(1).unwrap();
//! assert_eq!(output.report.total_components, 1);
//! assert_eq!(output.report.blob_sizes, vec![2]);
//! ```

pub mod chain;
pub mod detector;
pub mod error;
pub mod label;
pub mod rank;
pub mod threshold;
pub mod union_find;

pub use chain::{ChainArena, ChainIter, PixelChain};
pub use detector::{BlobReport, Detector, RenderOutput};
pub use error::{RegionError, RegionResult};
pub use label::{Labeling, label_components, neighbor_roots};
pub use rank::{RankedBlob, bounding_box, collect_roots, rank_components, shade_for_rank};
pub use threshold::threshold_in_place;
pub use union_find::DisjointSets;
