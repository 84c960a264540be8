//! Rectangular region copies: crop and composite.
use super::try_for_each_row;
use crate::error::{CanvasError, Result};
use crate::image::{PixelBuffer, Rgb};
use log::{debug, warn};

/// Copy the half-open region `[x_start, x_end) × [y_start, y_end)` into a new buffer.
///
/// Requires `0 ≤ x_start < x_end ≤ width` and likewise for `y`. A start corner
/// outside the source fails `OutOfBounds` at that corner; an end past the
/// source or an empty or inverted range fails `OutOfBounds` at `(x_end, y_end)`.
pub fn crop(
    src: &PixelBuffer,
    x_start: i32,
    y_start: i32,
    x_end: i32,
    y_end: i32,
) -> Result<PixelBuffer> {
    let (x0, y0, x1, y1) = (
        i64::from(x_start),
        i64::from(y_start),
        i64::from(x_end),
        i64::from(y_end),
    );
    src.index(x0, y0)?;
    let (w, h) = (src.width() as i64, src.height() as i64);
    if x1 <= x0 || y1 <= y0 || x1 > w || y1 > h {
        return Err(CanvasError::out_of_bounds(x1, y1, src.width(), src.height()));
    }

    let mut out = PixelBuffer::filled((x1 - x0) as usize, (y1 - y0) as usize, Rgb::BLACK)?;
    try_for_each_row(&mut out, |y, row| {
        let sy = y0 + y as i64;
        for (x, px) in row.iter_mut().enumerate() {
            *px = src.get(x0 + x as i64, sy)?;
        }
        Ok(())
    })?;
    debug!(
        "crop [{},{})x[{},{}) of {}x{}",
        x0,
        x1,
        y0,
        y1,
        src.width(),
        src.height()
    );
    Ok(out)
}

/// Overlay `overlay` onto a copy of `base` with its origin at `(x_offset, y_offset)`.
///
/// The output has `base`'s dimensions. The overlay must fit entirely inside
/// the base; any overhang fails `OutOfBounds` instead of being clipped.
pub fn composite(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    x_offset: i32,
    y_offset: i32,
) -> Result<PixelBuffer> {
    let (ox, oy) = (i64::from(x_offset), i64::from(y_offset));
    let (ow, oh) = (overlay.width() as i64, overlay.height() as i64);
    for (cx, cy) in [(ox, oy), (ox + ow - 1, oy + oh - 1)] {
        if let Err(err) = base.index(cx, cy) {
            warn!(
                "composite rejected: {}x{} overlay at ({}, {}) overhangs {}x{} base",
                ow,
                oh,
                ox,
                oy,
                base.width(),
                base.height()
            );
            return Err(err);
        }
    }

    // Base pixels are in place before any row task runs, so overlay writes
    // always land after the base copy of the same coordinate.
    let mut out = base.clone();
    let (x0, width) = (ox as usize, overlay.width());
    let rows = oy as usize..oy as usize + overlay.height();
    try_for_each_row(&mut out, |y, row| {
        if rows.contains(&y) {
            row[x0..x0 + width].copy_from_slice(overlay.row(y - rows.start));
        }
        Ok(())
    })?;
    debug!(
        "composite {}x{} onto {}x{} at ({}, {})",
        ow,
        oh,
        base.width(),
        base.height(),
        ox,
        oy
    );
    Ok(out)
}
