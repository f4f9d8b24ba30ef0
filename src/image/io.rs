//! Raster and JSON I/O.
//!
//! - `load_pgm` / `save_pgm`: netpbm graymap codec. Reads `P5` (raw bytes)
//!   and `P2` (decimal text) bodies, always writes `P5`.
//! - `load_raster` / `save_raster`: pick the PGM codec for `.pgm` paths and
//!   fall back to the `image` crate (PNG, JPEG) for anything else.
//! - `save_grayscale_f32`: dump a float intermediate as an 8-bit PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::u8::DEFAULT_MAX_VALUE;
use super::{GrayImage, ImageF32, ImageView};
use crate::error::CodecError;
use image::{ImageBuffer, Luma};
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Sample encoding selected by the two-byte magic marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PgmFormat {
    /// `P2`: whitespace-separated decimal samples
    Ascii,
    /// `P5`: one raw byte per sample
    Binary,
}

impl PgmFormat {
    fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P2" => Some(Self::Ascii),
            b"P5" => Some(Self::Binary),
            _ => None,
        }
    }
}

/// Byte cursor over a PGM file with netpbm header tokenisation.
struct PgmReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PgmReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and `#` comments running to the end of the line.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b'#') => {
                    while !matches!(self.peek(), None | Some(b'\n') | Some(b'\r')) {
                        self.pos += 1;
                    }
                }
                Some(c) if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn read_magic(&mut self) -> Option<PgmFormat> {
        self.skip_whitespace();
        let bytes = self.bytes;
        let magic = bytes.get(self.pos..self.pos + 2)?;
        self.pos += 2;
        // "P25" is not a valid marker
        if matches!(self.peek(), Some(c) if !c.is_ascii_whitespace() && c != b'#') {
            return None;
        }
        PgmFormat::from_magic(magic)
    }

    /// Optionally signed decimal integer after leading whitespace.
    fn read_int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let start = self.pos;
        if matches!(self.peek(), Some(b'-') | Some(b'+')) {
            self.pos += 1;
        }
        let digits = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits {
            self.pos = start;
            return None;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    fn read_header_field(&mut self) -> Option<usize> {
        self.skip_whitespace_and_comments();
        self.read_int()
            .filter(|&v| v > 0)
            .and_then(|v| usize::try_from(v).ok())
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

/// Decode a PGM file held in memory.
pub fn decode_pgm(bytes: &[u8]) -> Result<GrayImage, CodecError> {
    let mut reader = PgmReader::new(bytes);
    let format = reader.read_magic().ok_or(CodecError::BadMagic)?;

    let width = reader
        .read_header_field()
        .ok_or(CodecError::BadDimensions)?;
    let height = reader
        .read_header_field()
        .ok_or(CodecError::BadDimensions)?;
    let max_value = reader
        .read_header_field()
        .and_then(|v| u16::try_from(v).ok())
        // samples are stored as single bytes
        .filter(|&v| v <= DEFAULT_MAX_VALUE)
        .ok_or(CodecError::BadMaxVal)?;
    let expected = width
        .checked_mul(height)
        .ok_or(CodecError::BadDimensions)?;

    // exactly one whitespace byte separates the header from the samples
    reader.pos += 1;

    let data = match format {
        PgmFormat::Binary => {
            let body = reader.remaining();
            if body.len() < expected {
                return Err(CodecError::TruncatedData {
                    expected,
                    read: body.len(),
                });
            }
            body[..expected].to_vec()
        }
        PgmFormat::Ascii => {
            let mut data = Vec::with_capacity(expected.min(bytes.len()));
            while data.len() < expected {
                match reader.read_int() {
                    // P2 samples wider than a byte are truncated
                    Some(v) => data.push(v as u8),
                    None => {
                        return Err(CodecError::TruncatedData {
                            expected,
                            read: data.len(),
                        })
                    }
                }
            }
            data
        }
    };

    let image = GrayImage::from_raw(width, height, data)
        .ok_or(CodecError::BadDimensions)?
        .with_max_value(max_value);
    Ok(image)
}

/// Serialize an image as a binary (`P5`) graymap.
pub fn encode_pgm(image: &GrayImage) -> Vec<u8> {
    let header = format!("P5\n{} {}\n{}\n", image.w, image.h, image.max_value);
    let mut out = Vec::with_capacity(header.len() + image.w * image.h);
    out.extend_from_slice(header.as_bytes());
    for row in image.rows() {
        out.extend_from_slice(row);
    }
    out
}

/// Load a `P2` or `P5` graymap from disk.
pub fn load_pgm(path: &Path) -> Result<GrayImage, CodecError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CodecError::NotFound(path.to_path_buf()),
        _ => CodecError::Io(e),
    })?;
    let image = decode_pgm(&bytes)?;
    debug!(
        "loaded {} ({}x{}, max {})",
        path.display(),
        image.w,
        image.h,
        image.max_value
    );
    Ok(image)
}

/// Write a binary (`P5`) graymap, creating parent directories.
pub fn save_pgm(image: &GrayImage, path: &Path) -> Result<(), CodecError> {
    let write_failed = |source| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(write_failed)?;
    fs::write(path, encode_pgm(image)).map_err(write_failed)?;
    debug!("saved {} ({}x{})", path.display(), image.w, image.h);
    Ok(())
}

fn is_pgm_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"))
}

/// Load any supported raster. Non-PGM files are converted to 8-bit luma.
pub fn load_raster(path: &Path) -> Result<GrayImage, CodecError> {
    if is_pgm_path(path) {
        return load_pgm(path);
    }
    if !path.exists() {
        return Err(CodecError::NotFound(path.to_path_buf()));
    }
    let luma = image::open(path)?.into_luma8();
    let (w, h) = (luma.width() as usize, luma.height() as usize);
    GrayImage::from_raw(w, h, luma.into_raw()).ok_or(CodecError::BadDimensions)
}

/// Save to the format implied by the extension (`.pgm` → `P5`, else `image`).
pub fn save_raster(image: &GrayImage, path: &Path) -> Result<(), CodecError> {
    if is_pgm_path(path) {
        return save_pgm(image, path);
    }
    ensure_parent_dir(path).map_err(|source| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, image.data.clone())
            .ok_or(CodecError::BadDimensions)?;
    buffer.save(path)?;
    Ok(())
}

/// Save a float image as grayscale, scaling its maximum to 255.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), CodecError> {
    ensure_parent_dir(path).map_err(|source| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let peak = image.max_value();
    let scale = if peak > 0.0 { 255.0 / peak } else { 0.0 };
    let mut out = ImageBuffer::<Luma<u8>, Vec<u8>>::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * scale).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), CodecError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    let write_failed = |source| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(write_failed)?;
    fs::write(path, json).map_err(write_failed)
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
