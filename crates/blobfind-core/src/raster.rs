//! Raster - The owned RGB image buffer
//!
//! A [`Raster`] stores one packed 32-bit word per pixel in row-major order.
//! Unlike refcounted image containers, it is a plain owned value: the
//! detection pipeline has exclusive ownership of its buffers and mutates
//! them in place.
//!
//! # Pixel addressing
//!
//! Every pixel has a linear id `id = y * width + x`. The id range
//! `[0, width * height)` maps bijectively onto in-bounds coordinates;
//! [`pixel_id`] and [`pixel_coord`] are the two directions of that mapping.

use crate::color::{Color, compose_rgb};
use crate::error::{Error, Result};

/// Convert a coordinate to its row-major linear pixel id.
///
/// Pure arithmetic; the caller is responsible for `x < width` and for the
/// coordinate being inside the image this id will address.
#[inline]
pub fn pixel_id(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Convert a linear pixel id back to its `(x, y)` coordinate.
///
/// # Errors
///
/// Returns [`Error::IdOutOfBounds`] if `id >= width * height`.
#[inline]
pub fn pixel_coord(width: u32, height: u32, id: usize) -> Result<(u32, u32)> {
    let len = width as usize * height as usize;
    if id >= len {
        return Err(Error::IdOutOfBounds { id, len });
    }
    let y = id / width as usize;
    let x = id - y * width as usize;
    Ok((x as u32, y as u32))
}

/// An owned RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Create a new raster filled with black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a new raster filled with the given color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![color.to_pixel32(); len],
        })
    }

    /// Build a raster from raw RGB bytes in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] on zero dimensions and
    /// [`Error::InvalidParameter`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        if rgb.len() != len * 3 {
            return Err(Error::InvalidParameter(format!(
                "expected {} RGB bytes, got {}",
                len * 3,
                rgb.len()
            )));
        }
        let data = rgb
            .chunks_exact(3)
            .map(|px| compose_rgb(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_pixel32(self.data[pixel_id(self.width, x, y)]))
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordOutOfBounds`] if the coordinate is out of bounds.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[pixel_id(self.width, x, y)] = color.to_pixel32();
        Ok(())
    }

    /// Copy the pixel data out as packed RGB bytes in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for &word in &self.data {
            let c = Color::from_pixel32(word);
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }
}
