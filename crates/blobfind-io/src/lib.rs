//! blobfind-io - Image I/O for blobfind
//!
//! Reads and writes the rasters the detection pipeline consumes and
//! produces. PNG is the only supported on-disk format; decoding normalizes
//! grayscale, indexed, RGB and RGBA layouts to an RGB [`Raster`], encoding
//! always emits 8-bit RGB.

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use blobfind_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Check that the path carries an extension we can handle.
fn require_png(path: &Path) -> IoResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(()),
        _ => Err(IoError::UnsupportedFormat(format!(
            "{}: only PNG is supported",
            path.display()
        ))),
    }
}

/// Read an image from a file path.
///
/// # Errors
///
/// Fails with [`IoError::UnsupportedFormat`] for non-PNG extensions,
/// [`IoError::Io`] if the file cannot be opened, and
/// [`IoError::DecodeError`] if it is not a valid raster.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    require_png(path)?;
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write an image to a file path.
///
/// # Errors
///
/// Fails with [`IoError::UnsupportedFormat`] for non-PNG extensions,
/// [`IoError::Io`] if the file cannot be created, and
/// [`IoError::EncodeError`] on encoder failure.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    require_png(path)?;
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
