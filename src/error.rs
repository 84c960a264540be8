//! Error taxonomy shared by the buffer, pen, transforms and I/O boundary.
//!
//! `OutOfBounds` and `InvalidChannelValue` abort the call that raised them.
//! Transforms treat either as fatal for the whole output. `Decode`/`Encode`
//! are boundary failures the caller is expected to report and recover from.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CanvasError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("channel value {value} is outside [0, 255]")]
    InvalidChannelValue { value: i64 },
    #[error("buffer dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("stroke width must be positive, got {width}")]
    InvalidStrokeWidth { width: i64 },
    #[error("scale factor must be finite, got {factor}")]
    InvalidScaleFactor { factor: f64 },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format '{extension}' (expected jpg, png or bmp)")]
    UnsupportedFormat { extension: String },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CanvasError {
    pub(crate) fn out_of_bounds(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// True for the two per-pixel failures raised by `PixelBuffer` itself.
    pub fn is_pixel_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::InvalidChannelValue { .. }
        )
    }
}
