//! Detection pipeline regression test
//!
//! End-to-end scenarios over small synthetic rasters:
//! threshold -> label -> rank -> render.
//!
//! Run with:
//! ```
//! cargo test -p blobfind-region --test detect_reg
//! ```

use blobfind_core::{Color, Raster};
use blobfind_region::{Detector, label_components, threshold_in_place};
use blobfind_test::{raster_from_grid, solid_raster};

/// Scenario A: a 2x2 image fully matching the target color.
#[test]
fn detect_reg_full_image_blob() {
    let image = solid_raster(2, 2, Color::BLUE);
    let mut detector = Detector::new(image, Color::BLUE, 0);
    detector.detect().unwrap();
    let output = detector.render(1).unwrap();

    assert_eq!(output.report.total_components, 1);
    assert_eq!(output.report.k, 1);
    assert_eq!(output.report.blob_sizes, vec![4]);

    // Rank 0 of k=1 gets the full target color
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(output.recolored.get_color(x, y), Some(Color::BLUE));
        }
    }

    // The box hangs one pixel past every border; its visible inner ring
    // covers the whole 2x2 area
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(output.boxed.get_color(x, y), Some(Color::BLACK));
        }
    }
}

/// Scenario B: two disjoint blobs of sizes 10 and 3 plus background.
#[test]
fn detect_reg_two_blobs_rank_and_clamp() {
    let image = raster_from_grid(&[
        "BBBBB..",
        "BBBBB..",
        ".......",
        "..BBB..",
    ]);
    let mut detector = Detector::new(image, Color::BLUE, 0);
    detector.detect().unwrap();

    let output = detector.render(2).unwrap();
    assert_eq!(output.report.total_components, 2);
    assert_eq!(output.report.k, 2);
    assert_eq!(output.report.blob_sizes, vec![10, 3]);

    // Requesting more blobs than exist clamps
    let clamped = detector.render(5).unwrap();
    assert_eq!(clamped.report.k, 2);
    assert_eq!(clamped.report.blob_sizes, vec![10, 3]);

    // Bounding box surrounds the 10-pixel blob: corners (0,0)-(4,1),
    // inset box (-1,-1) 7x5, inner ring fully visible
    assert_eq!(clamped.boxed.get_color(0, 0), Some(Color::BLACK));
    assert_eq!(clamped.boxed.get_color(5, 0), Some(Color::BLACK));
    assert_eq!(clamped.boxed.get_color(5, 2), Some(Color::BLACK));
    // Well outside the box the source shows through
    assert_eq!(clamped.boxed.get_color(6, 3), Some(Color::WHITE));
}

/// Scenario C: a fully background image.
#[test]
fn detect_reg_no_blobs_clamps_to_zero() {
    let image = solid_raster(3, 3, Color::RED);
    let mut detector = Detector::new(image.clone(), Color::BLUE, 0);
    detector.detect().unwrap();
    let output = detector.render(1).unwrap();

    assert_eq!(output.report.total_components, 0);
    assert_eq!(output.report.k, 0);
    assert!(output.report.blob_sizes.is_empty());

    // Nothing recolored (all pixels thresholded to white), no box drawn
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(output.recolored.get_color(x, y), Some(Color::WHITE));
        }
    }
    assert_eq!(output.boxed, image);

    let mut out = Vec::new();
    output.report.write_text(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0/0\n");
}

/// Scenario D: adjacency at exactly the threshold distance must union.
#[test]
fn detect_reg_boundary_distance_unions() {
    // distance(black, (45,0,0)) == 1 exactly
    let mut image = Raster::filled(2, 1, Color::BLACK).unwrap();
    image.set_color(1, 0, Color::new(45, 0, 0)).unwrap();

    let mut labeling = label_components(&image, 1).unwrap();
    let sets = labeling.sets_mut();
    assert_eq!(sets.find(0).unwrap(), sets.find(1).unwrap());

    // One unit under the distance keeps them apart
    let mut labeling = label_components(&image, 0).unwrap();
    let sets = labeling.sets_mut();
    assert_ne!(sets.find(0).unwrap(), sets.find(1).unwrap());
}

/// Every pixel ends up in exactly one component.
#[test]
fn detect_reg_pixel_conservation() {
    let mut image = raster_from_grid(&[
        "BB..RG",
        ".B.RRG",
        "B...G.",
    ]);
    threshold_in_place(&mut image, Color::BLUE, 0).unwrap();
    let mut labeling = label_components(&image, 0).unwrap();
    let sets = labeling.sets_mut();

    let total: u32 = (0..sets.len())
        .map(|id| sets.get(id).unwrap().len())
        .sum();
    assert_eq!(total, 18);

    // Each id resolves to a root whose chain contains it
    let width = 6;
    for id in 0..sets.len() {
        let root = sets.find(id).unwrap();
        let (x, y) = blobfind_core::pixel_coord(width, 3, id).unwrap();
        let found = {
            let chain = sets.get(root).unwrap();
            chain.iter(sets.arena()).any(|c| c == (x, y))
        };
        assert!(found, "pixel {} missing from its root's chain", id);
    }
}

/// Identical inputs produce identical render output.
#[test]
fn detect_reg_render_is_deterministic() {
    let image = raster_from_grid(&[
        "RR.B",
        "RR.B",
        "....",
        "GG.R",
    ]);
    let mut a = Detector::new(image.clone(), Color::RED, 10);
    a.detect().unwrap();
    let first = a.render(3).unwrap();
    let second = a.render(3).unwrap();
    assert_eq!(first.recolored, second.recolored);
    assert_eq!(first.boxed, second.boxed);
    assert_eq!(first.report, second.report);

    let mut b = Detector::new(image, Color::RED, 10);
    b.detect().unwrap();
    let other = b.render(3).unwrap();
    assert_eq!(first.report, other.report);
    assert_eq!(first.recolored, other.recolored);
}

/// Raster order decides which ids survive as roots, but not membership.
#[test]
fn detect_reg_membership_is_what_matters() {
    let image = raster_from_grid(&[
        ".BBB.",
        ".B.B.",
        ".BBB.",
    ]);
    let mut detector = Detector::new(image, Color::BLUE, 0);
    detector.detect().unwrap();
    let output = detector.render(1).unwrap();

    // The ring is one component of 8; the hole and outside are background
    assert_eq!(output.report.total_components, 1);
    assert_eq!(output.report.blob_sizes, vec![8]);
}
