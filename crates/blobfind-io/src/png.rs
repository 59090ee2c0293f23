//! PNG image format support
//!
//! Decoding normalizes every supported PNG layout to an RGB [`Raster`];
//! encoding always produces 8-bit RGB. Alpha channels are dropped, low-depth
//! grayscale and indexed images are expanded through their palette or
//! sample scaling, and 16-bit samples keep their high byte.

use crate::error::{IoError, IoResult};
use blobfind_core::Raster;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGB raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let supported = matches!(
        (color_type, bit_depth),
        (ColorType::Grayscale, BitDepth::Eight)
            | (ColorType::GrayscaleAlpha, BitDepth::Eight)
            | (ColorType::Rgb, BitDepth::Eight | BitDepth::Sixteen)
            | (ColorType::Rgba, BitDepth::Eight | BitDepth::Sixteen)
            | (ColorType::Indexed, _)
    );
    if !supported {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    // Palette for indexed images, as flat RGB triples
    let palette: Option<Vec<u8>> = reader
        .info()
        .palette
        .as_ref()
        .map(|p| p.as_ref().to_vec());

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let len = width as usize * height as usize;
    let mut rgb = Vec::with_capacity(len * 3);

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    rgb.extend_from_slice(&[g, g, g]);
                }
            }
        }
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize * 2];
                    rgb.extend_from_slice(&[g, g, g]);
                }
            }
        }
        (ColorType::Rgb, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 6 } else { 3 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    let (r, g, b) = if bit_depth == BitDepth::Sixteen {
                        (data[idx], data[idx + 2], data[idx + 4])
                    } else {
                        (data[idx], data[idx + 1], data[idx + 2])
                    };
                    rgb.extend_from_slice(&[r, g, b]);
                }
            }
        }
        (ColorType::Rgba, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 8 } else { 4 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    let (r, g, b) = if bit_depth == BitDepth::Sixteen {
                        (data[idx], data[idx + 2], data[idx + 4])
                    } else {
                        (data[idx], data[idx + 1], data[idx + 2])
                    };
                    rgb.extend_from_slice(&[r, g, b]);
                }
            }
        }
        (ColorType::Indexed, _) => {
            let palette = palette.ok_or_else(|| {
                IoError::DecodeError("indexed PNG without palette".to_string())
            })?;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let index: u8 = match bit_depth {
                        BitDepth::One => {
                            let byte = data[row_start + (x / 8) as usize];
                            (byte >> (7 - (x % 8))) & 1
                        }
                        BitDepth::Two => {
                            let byte = data[row_start + (x / 4) as usize];
                            (byte >> (6 - (x % 4) * 2)) & 3
                        }
                        BitDepth::Four => {
                            let byte = data[row_start + (x / 2) as usize];
                            if x % 2 == 0 { (byte >> 4) & 0xF } else { byte & 0xF }
                        }
                        _ => data[row_start + x as usize],
                    };
                    let entry = index as usize * 3;
                    if entry + 2 >= palette.len() {
                        return Err(IoError::DecodeError(format!(
                            "palette index {} out of range",
                            index
                        )));
                    }
                    rgb.extend_from_slice(&palette[entry..entry + 3]);
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(Raster::from_rgb_bytes(width, height, &rgb)?)
}

/// Write a raster as an 8-bit RGB PNG.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = raster.to_rgb_bytes();
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}
