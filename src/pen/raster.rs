//! Aliased scanline rasterization of the pen primitives.
//!
//! Two sampling conventions, both without anti-aliasing:
//! - Fills (polygons, filled ellipses, filled rectangles) cover pixel `(px, py)`
//!   when its centre `(px + 0.5, py + 0.5)` lies inside the shape.
//! - Strokes (lines, outlines) treat integer coordinates as pixel centres and
//!   cover every pixel within half the stroke width of the path.
//!
//! Rasterizers call `plot` with candidate pixels. Loops are limited to the clip
//! extent where that is cheap; final clipping is left to the buffer.
use nalgebra::Vector2;

/// Extent of the target buffer, used to bound scanline loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clip {
    pub width: i64,
    pub height: i64,
}

impl Clip {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i64,
            height: height as i64,
        }
    }

    #[inline]
    fn rows(&self, y_min: f64, y_max: f64) -> std::ops::Range<i64> {
        let lo = (y_min.floor() as i64).max(0);
        let hi = (y_max.ceil() as i64 + 1).min(self.height);
        lo..hi.max(lo)
    }

    #[inline]
    fn cols(&self, x_min: i64, x_max_excl: i64) -> std::ops::Range<i64> {
        let lo = x_min.max(0);
        let hi = x_max_excl.min(self.width);
        lo..hi.max(lo)
    }
}

/// Fill a simple polygon with the even-odd rule.
pub fn fill_polygon(vertices: &[Vector2<f64>], clip: Clip, mut plot: impl FnMut(i64, i64)) {
    if vertices.len() < 3 {
        return;
    }
    let (y_min, y_max) = vertices
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));

    let n = vertices.len();
    let mut crossings = Vec::with_capacity(n);
    for py in clip.rows(y_min, y_max) {
        crossings.clear();
        let yc = py as f64 + 0.5;
        for i in 0..n {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            if (p.y <= yc && q.y > yc) || (q.y <= yc && p.y > yc) {
                crossings.push(p.x + (yc - p.y) / (q.y - p.y) * (q.x - p.x));
            }
        }
        crossings.sort_unstable_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil() as i64;
            let end = (span[1] - 0.5).ceil() as i64;
            for px in clip.cols(start, end) {
                plot(px, py);
            }
        }
    }
}

/// Fill the axis-aligned rectangle `[x, x + w) × [y, y + h)`.
pub fn fill_rect(x: i64, y: i64, w: i64, h: i64, clip: Clip, mut plot: impl FnMut(i64, i64)) {
    if w <= 0 || h <= 0 {
        return;
    }
    let rows = y.max(0)..(y + h).min(clip.height);
    for py in rows {
        for px in clip.cols(x, x + w) {
            plot(px, py);
        }
    }
}

/// Outline the rectangle with corners `(x, y)` and `(x + w, y + h)`.
pub fn stroke_rect(
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    width: u32,
    clip: Clip,
    mut plot: impl FnMut(i64, i64),
) {
    if w < 0 || h < 0 {
        return;
    }
    let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    for i in 0..4 {
        let (x0, y0) = corners[i];
        let (x1, y1) = corners[(i + 1) % 4];
        stroke_segment(x0, y0, x1, y1, width, clip, &mut plot);
    }
}

/// Stroke a segment with round caps.
///
/// Width 1 uses Bresenham so the result is a connected one-pixel path; wider
/// strokes cover every pixel centre within `width / 2` of the segment.
pub fn stroke_segment(
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    width: u32,
    clip: Clip,
    mut plot: impl FnMut(i64, i64),
) {
    if width <= 1 {
        bresenham(x0, y0, x1, y1, clip, plot);
        return;
    }
    let r = f64::from(width) / 2.0;
    let pad = r.ceil() as i64;
    let a = Vector2::new(x0 as f64, y0 as f64);
    let b = Vector2::new(x1 as f64, y1 as f64);
    let ab = b - a;
    let len2 = ab.norm_squared();

    let rows = clip.rows((y0.min(y1) - pad) as f64, (y0.max(y1) + pad) as f64);
    for py in rows {
        for px in clip.cols(x0.min(x1) - pad, x0.max(x1) + pad + 1) {
            let p = Vector2::new(px as f64, py as f64);
            let t = if len2 > 0.0 {
                ((p - a).dot(&ab) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            if (p - (a + ab * t)).norm() <= r + 1e-9 {
                plot(px, py);
            }
        }
    }
}

/// One-pixel line stepping along its major axis.
///
/// Only the steps whose major coordinate lands inside the clip are visited,
/// so cost is bounded by the buffer size rather than the segment length.
fn bresenham(x0: i64, y0: i64, x1: i64, y1: i64, clip: Clip, mut plot: impl FnMut(i64, i64)) {
    let (dx, dy) = (x1 - x0, y1 - y0);
    if dx.abs() >= dy.abs() {
        walk_major(x0, y0, dx, dy, (clip.width, clip.height), |m, n| plot(m, n));
    } else {
        walk_major(y0, x0, dy, dx, (clip.height, clip.width), |m, n| plot(n, m));
    }
}

/// Visit `(m0 + t·sign(dm), n0 + round(t·dn / |dm|))` for the steps `t` in
/// `0..=|dm|` whose coordinates lie in `[0, limit.0) × [0, limit.1)`.
fn walk_major(
    m0: i64,
    n0: i64,
    dm: i64,
    dn: i64,
    limit: (i64, i64),
    mut plot: impl FnMut(i64, i64),
) {
    let steps = dm.abs();
    let (t_lo, t_hi) = if dm >= 0 {
        ((-m0).max(0), (limit.0 - 1 - m0).min(steps))
    } else {
        ((m0 - limit.0 + 1).max(0), m0.min(steps))
    };
    let (adn, sn) = (i128::from(dn.abs()), dn.signum());
    for t in t_lo..=t_hi {
        let m = m0 + dm.signum() * t;
        let off = if steps == 0 {
            0
        } else {
            let s = i128::from(steps);
            ((2 * adn * i128::from(t) + s) / (2 * s)) as i64
        };
        let n = n0 + sn * off;
        if n >= 0 && n < limit.1 {
            plot(m, n);
        }
    }
}

/// Fill the ellipse inscribed in the box `(x, y, w, h)`.
pub fn fill_ellipse(x: i64, y: i64, w: i64, h: i64, clip: Clip, mut plot: impl FnMut(i64, i64)) {
    if w <= 0 || h <= 0 {
        return;
    }
    let (a, b) = (w as f64 / 2.0, h as f64 / 2.0);
    let (cx, cy) = (x as f64 + a, y as f64 + b);
    for py in clip.rows(y as f64, (y + h) as f64) {
        let dy = (py as f64 + 0.5 - cy) / b;
        let rem = 1.0 - dy * dy;
        if rem < 0.0 {
            continue;
        }
        let half = a * rem.sqrt();
        let start = (cx - half - 0.5).ceil() as i64;
        let end = (cx + half - 0.5).floor() as i64 + 1;
        for px in clip.cols(start, end) {
            plot(px, py);
        }
    }
}

/// Outline the ellipse inscribed in the box `(x, y, w, h)`.
///
/// Covers pixel centres inside the ellipse grown by half the stroke width and
/// not strictly inside the ellipse shrunk by the same amount.
pub fn stroke_ellipse(
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    width: u32,
    clip: Clip,
    mut plot: impl FnMut(i64, i64),
) {
    if w < 0 || h < 0 {
        return;
    }
    let half = (f64::from(width) / 2.0).max(0.5);
    let (a, b) = (w as f64 / 2.0, h as f64 / 2.0);
    let (cx, cy) = (x as f64 + a, y as f64 + b);
    let (oa, ob) = (a + half, b + half);
    let (ia, ib) = (a - half, b - half);

    let level = |dx: f64, dy: f64, ra: f64, rb: f64| {
        let (u, v) = (dx / ra, dy / rb);
        u * u + v * v
    };

    for py in clip.rows(cy - ob, cy + ob) {
        let dy = py as f64 - cy;
        let x_lo = (cx - oa).floor() as i64;
        let x_hi = (cx + oa).ceil() as i64 + 1;
        for px in clip.cols(x_lo, x_hi) {
            let dx = px as f64 - cx;
            if level(dx, dy, oa, ob) > 1.0 {
                continue;
            }
            if ia > 0.0 && ib > 0.0 && level(dx, dy, ia, ib) < 1.0 {
                continue;
            }
            plot(px, py);
        }
    }
}
