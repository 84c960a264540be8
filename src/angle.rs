//! Heading utilities for the pen.
//!
//! Headings are in degrees, 0° along +x, positive counter-clockwise as seen
//! on screen. Screen y grows downward, so the y component of a heading's
//! unit vector is `-sin`.
use nalgebra::Vector2;

/// Normalizes a heading into the range [0, 360).
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let norm = degrees.rem_euclid(360.0);
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Screen-space unit vector for a heading in degrees: `(cos d, -sin d)`.
#[inline]
pub fn screen_unit(degrees: f64) -> Vector2<f64> {
    let rad = degrees.to_radians();
    Vector2::new(rad.cos(), -rad.sin())
}

/// Screen-space offset of `length` along `degrees`, each component rounded
/// half-to-even to the nearest pixel.
///
/// Offsets are `i64` so that adding one to any `i32` position cannot overflow.
#[inline]
pub fn pixel_offset(degrees: f64, length: f64) -> Vector2<i64> {
    let v = screen_unit(degrees) * length;
    Vector2::new(v.x.round_ties_even() as i64, v.y.round_ties_even() as i64)
}
