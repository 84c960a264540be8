//! I/O helpers at the file boundary.
//!
//! - `Codec`: decode a file into a `PixelBuffer`, encode one back out.
//! - `ImageCodec`: `Codec` backed by the `image` crate (JPEG, PNG, BMP).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelBuffer;
use crate::error::{CanvasError, Result};
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output container formats the encoder accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeFormat {
    Jpeg,
    Png,
    Bmp,
}

impl EncodeFormat {
    /// Infer the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            _ => Err(CanvasError::UnsupportedFormat { extension: ext }),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
        }
    }
}

/// File-format boundary. Failures are always reported, never fatal.
pub trait Codec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;
    fn encode(&self, buffer: &PixelBuffer, path: &Path, format: EncodeFormat) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let img = image::open(path)
            .map_err(|source| CanvasError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgb8();
        let width = img.width() as usize;
        let height = img.height() as usize;
        log::debug!("decoded {} ({}x{})", path.display(), width, height);
        PixelBuffer::from_rgb8(width, height, img.as_raw())
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path, format: EncodeFormat) -> Result<()> {
        ensure_parent_dir(path)?;
        let mut out = RgbImage::new(buffer.width() as u32, buffer.height() as u32);
        for (y, row) in buffer.rows().enumerate() {
            for (x, px) in row.iter().enumerate() {
                out.put_pixel(x as u32, y as u32, image::Rgb([px.r, px.g, px.b]));
            }
        }
        out.save_with_format(path, format.image_format())
            .map_err(|source| CanvasError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("encoded {} as {:?}", path.display(), format);
        Ok(())
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| CanvasError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| CanvasError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CanvasError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
