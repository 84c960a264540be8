//! Nearest-neighbour resampling.
//!
//! The factor's sign selects the direction:
//! - `factor > 0`: upsample, output `⌊W·k⌋ × ⌊H·k⌋`, sample `(⌊x/k⌋, ⌊y/k⌋)`;
//! - `factor < 0`: downsample by `f = -factor`, output `⌊W/f⌋ × ⌊H/f⌋`,
//!   sample `(⌊x·f⌋, ⌊y·f⌋)`;
//! - `factor == 0`: identity, the source is returned borrowed.
use super::try_for_each_row;
use crate::error::{CanvasError, Result};
use crate::image::{PixelBuffer, Rgb};
use log::debug;
use std::borrow::Cow;

/// Output dimensions for `factor`, before the positivity check.
pub fn scaled_dimensions(width: usize, height: usize, factor: f64) -> (usize, usize) {
    let apply = |n: usize| -> usize {
        let n = n as f64;
        let v = if factor > 0.0 {
            n * factor
        } else if factor < 0.0 {
            n / -factor
        } else {
            n
        };
        v.floor() as usize
    };
    (apply(width), apply(height))
}

pub fn scale(src: &PixelBuffer, factor: f64) -> Result<Cow<'_, PixelBuffer>> {
    if !factor.is_finite() {
        return Err(CanvasError::InvalidScaleFactor { factor });
    }
    if factor == 0.0 {
        return Ok(Cow::Borrowed(src));
    }
    let (w, h) = scaled_dimensions(src.width(), src.height(), factor);
    let mut out = PixelBuffer::filled(w, h, Rgb::BLACK)?;

    let source_coord = |o: usize| -> i64 {
        let o = o as f64;
        let s = if factor > 0.0 { o / factor } else { o * -factor };
        s.floor() as i64
    };
    try_for_each_row(&mut out, |y, row| {
        let sy = source_coord(y);
        for (x, px) in row.iter_mut().enumerate() {
            *px = src.get(source_coord(x), sy)?;
        }
        Ok(())
    })?;
    debug!(
        "scale {}x{} by {} -> {}x{}",
        src.width(),
        src.height(),
        factor,
        w,
        h
    );
    Ok(Cow::Owned(out))
}
