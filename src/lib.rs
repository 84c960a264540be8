#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod image;
pub mod pen;
pub mod transform;

// Collaborator seams and tooling.
pub mod config;
pub mod dialog;
pub mod display;
pub mod script;

// Helpers shared by the pen internals.
pub mod angle;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{CanvasError, Result};
pub use crate::image::{Channel, Codec, EncodeFormat, ImageCodec, PixelBuffer, Rgb};
pub use crate::pen::{DrawingPen, PenState};
pub use crate::transform::{composite, crop, greyscale, scale};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use raster_canvas::prelude::*;
///
/// # fn main() -> raster_canvas::Result<()> {
/// let mut canvas = PixelBuffer::new(64, 48)?;
/// let mut pen = DrawingPen::new(&mut canvas);
/// pen.set_position(10, 24);
/// pen.set_color(0, 0, 255)?;
/// for _ in 0..4 {
///     pen.forward(20);
///     pen.set_direction(pen.direction() + 90.0);
/// }
/// let thumb = scale(&canvas, -2.0)?;
/// let grey = greyscale(&thumb);
/// assert_eq!((grey.width(), grey.height()), (32, 24));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Channel, PixelBuffer, Rgb};
    pub use crate::pen::DrawingPen;
    pub use crate::transform::{composite, crop, greyscale, scale};
}
