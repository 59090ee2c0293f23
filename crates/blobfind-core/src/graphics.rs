//! Graphics rendering functions
//!
//! Rectangle outline drawing on a [`Raster`]. Only axis-aligned rectangles
//! are needed for blob bounding boxes, so edges are rendered as horizontal
//! and vertical pixel runs rather than through a general line rasterizer.

use crate::box_::Box;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::raster::Raster;

impl Raster {
    /// Draw a rectangle outline with the given stroke width.
    ///
    /// The outermost ring of the stroke follows the box edges; additional
    /// rings grow inward, so a 2-pixel stroke covers the edge and the pixel
    /// just inside it. Pixels that fall outside the image are clipped, so a
    /// box hanging over the border is drawn partially.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `line_width` is zero.
    pub fn draw_box_outline(&mut self, b: &Box, line_width: u32, color: Color) -> Result<()> {
        if line_width == 0 {
            return Err(Error::InvalidParameter(
                "line width must be at least 1".to_string(),
            ));
        }

        for ring in 0..line_width as i32 {
            let left = b.x + ring;
            let top = b.y + ring;
            let right = b.right() - 1 - ring;
            let bottom = b.bottom() - 1 - ring;
            if left > right || top > bottom {
                break;
            }

            for x in left..=right {
                self.set_clipped(x, top, color);
                self.set_clipped(x, bottom, color);
            }
            // Corners are covered by the horizontal runs
            for y in (top + 1)..bottom {
                self.set_clipped(left, y, color);
                self.set_clipped(right, y, color);
            }
        }
        Ok(())
    }

    fn set_clipped(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.width() && y < self.height() {
            // In bounds by the checks above
            let _ = self.set_color(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_sets_edges_not_interior() {
        let mut r = Raster::filled(10, 10, Color::WHITE).unwrap();
        let b = Box::from_corners(2, 2, 6, 6);
        r.draw_box_outline(&b, 1, Color::BLACK).unwrap();

        assert_eq!(r.get_color(2, 2), Some(Color::BLACK));
        assert_eq!(r.get_color(6, 2), Some(Color::BLACK));
        assert_eq!(r.get_color(2, 6), Some(Color::BLACK));
        assert_eq!(r.get_color(6, 6), Some(Color::BLACK));
        assert_eq!(r.get_color(4, 2), Some(Color::BLACK));
        assert_eq!(r.get_color(2, 4), Some(Color::BLACK));
        // Interior untouched
        assert_eq!(r.get_color(4, 4), Some(Color::WHITE));
        // Outside untouched
        assert_eq!(r.get_color(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_outline_width_two_grows_inward() {
        let mut r = Raster::filled(10, 10, Color::WHITE).unwrap();
        let b = Box::from_corners(2, 2, 7, 7);
        r.draw_box_outline(&b, 2, Color::BLACK).unwrap();

        assert_eq!(r.get_color(2, 2), Some(Color::BLACK));
        assert_eq!(r.get_color(3, 3), Some(Color::BLACK));
        assert_eq!(r.get_color(3, 5), Some(Color::BLACK));
        assert_eq!(r.get_color(1, 1), Some(Color::WHITE));
        assert_eq!(r.get_color(4, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_outline_clips_at_border() {
        let mut r = Raster::filled(4, 4, Color::WHITE).unwrap();
        // Box hanging past every border, as produced for a full-image blob
        let b = Box::new(-1, -1, 6, 6).unwrap();
        r.draw_box_outline(&b, 2, Color::BLACK).unwrap();

        // The inner ring is fully visible
        assert_eq!(r.get_color(0, 0), Some(Color::BLACK));
        assert_eq!(r.get_color(3, 0), Some(Color::BLACK));
        assert_eq!(r.get_color(0, 3), Some(Color::BLACK));
        // Center survives
        assert_eq!(r.get_color(2, 2), Some(Color::WHITE));
        assert_eq!(r.get_color(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_outline_degenerate_box_stops_early() {
        let mut r = Raster::filled(6, 6, Color::WHITE).unwrap();
        // 2x2 box cannot hold a 3-pixel stroke; extra rings are dropped
        let b = Box::from_corners(1, 1, 2, 2);
        r.draw_box_outline(&b, 3, Color::BLACK).unwrap();
        for y in 1..=2 {
            for x in 1..=2 {
                assert_eq!(r.get_color(x, y), Some(Color::BLACK));
            }
        }
        assert_eq!(r.get_color(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_outline_rejects_zero_width() {
        let mut r = Raster::filled(4, 4, Color::WHITE).unwrap();
        let b = Box::from_corners(0, 0, 2, 2);
        assert!(r.draw_box_outline(&b, 0, Color::BLACK).is_err());
    }
}
