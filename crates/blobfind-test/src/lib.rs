//! blobfind-test - Shared test fixtures for the blobfind workspace
//!
//! Small rasters for labeling and ranking tests are easiest to read as
//! character grids. [`raster_from_grid`] turns a slice of equal-length rows
//! into a [`Raster`] using a fixed legend:
//!
//! | char | color |
//! |------|-------|
//! | `B`  | blue  |
//! | `R`  | red   |
//! | `G`  | green |
//! | `K`  | black |
//! | `.` / `W` | white |
//!
//! ```
//! use blobfind_test::raster_from_grid;
//!
//! let image = raster_from_grid(&["BB.", ".RR"]);
//! assert_eq!(image.width(), 3);
//! assert_eq!(image.height(), 2);
//! ```

use blobfind_core::{Color, Raster};

/// Map a legend character to its color.
///
/// # Panics
///
/// Panics on a character outside the legend; tests should fail loudly on a
/// malformed fixture.
pub fn legend_color(c: char) -> Color {
    match c {
        'B' => Color::BLUE,
        'R' => Color::RED,
        'G' => Color::GREEN,
        'K' => Color::BLACK,
        '.' | 'W' => Color::WHITE,
        other => panic!("unknown grid character: {:?}", other),
    }
}

/// Build a raster from rows of legend characters.
///
/// # Panics
///
/// Panics if the grid is empty, rows have unequal lengths, or a character
/// is outside the legend.
pub fn raster_from_grid(rows: &[&str]) -> Raster {
    assert!(!rows.is_empty(), "grid needs at least one row");
    let width = rows[0].chars().count() as u32;
    let height = rows.len() as u32;
    let mut raster = Raster::new(width, height).expect("grid dimensions");

    for (y, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        assert_eq!(
            cells.len() as u32,
            width,
            "row {} length differs from row 0",
            y
        );
        for (x, &c) in cells.iter().enumerate() {
            raster
                .set_color(x as u32, y as u32, legend_color(c))
                .expect("in bounds");
        }
    }
    raster
}

/// Build a raster filled with a single color.
pub fn solid_raster(width: u32, height: u32, color: Color) -> Raster {
    Raster::filled(width, height, color).expect("non-zero dimensions")
}
