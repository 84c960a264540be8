//! Geometry of the turtle `forward` stroke.
//!
//! The stroke is the parallelogram `[A, B, C, D]`:
//! - `A = p0 + w·u(d+90°)`, `D = p0 + w·u(d+270°)` (near edge, across the heading)
//! - `B = A + dist·u(d)`,   `C = D + dist·u(d)`    (far edge)
//!
//! where `u(θ) = (cos θ, -sin θ)` in screen space and every offset is rounded
//! half-to-even to whole pixels before it is added. The pen then moves to the
//! midpoint of `B` and `C`, truncating toward zero.
//!
//! Corners are kept in `i64`: a stroke may reach past `i32` even though the
//! pen position itself is an `i32`, so the end point saturates into range.
use crate::angle::pixel_offset;
use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardStroke {
    /// Corners in drawing order `A, B, C, D`.
    pub corners: [[i64; 2]; 4],
    /// Pen position after the move.
    pub end: [i32; 2],
}

impl ForwardStroke {
    pub fn vertices(&self) -> [Vector2<f64>; 4] {
        self.corners.map(|[x, y]| Vector2::new(x as f64, y as f64))
    }
}

pub fn forward_stroke(
    origin: [i32; 2],
    heading: f64,
    stroke_width: u32,
    distance: i32,
) -> ForwardStroke {
    let p0 = Vector2::new(i64::from(origin[0]), i64::from(origin[1]));
    let width = f64::from(stroke_width);
    let advance = pixel_offset(heading, f64::from(distance));

    let a = p0 + pixel_offset(heading + 90.0, width);
    let b = a + advance;
    let d = p0 + pixel_offset(heading + 270.0, width);
    let c = d + advance;

    // integer division truncates toward zero
    let end = [saturate((b.x + c.x) / 2), saturate((b.y + c.y) / 2)];
    ForwardStroke {
        corners: [[a.x, a.y], [b.x, b.y], [c.x, c.y], [d.x, d.y]],
        end,
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
