//! Turtle-graphics pen bound to a `PixelBuffer`.
//!
//! The pen carries a cursor (position, heading), an RGB colour, a visibility
//! flag and a stroke width. Every draw call writes through `PixelBuffer::plot`,
//! so pixels that fall outside the buffer are clipped silently; the pen never
//! pre-validates coordinates. Visibility is a flag orthogonal to the stored
//! colour: a hidden pen still moves but leaves no ink, and showing it again
//! draws with exactly the colour it had before.
//!
//! Position updates follow the cursor conventions of each primitive:
//! - lines end at their second point;
//! - `draw_circle_outline` parks the cursor on the bounding box's top-left
//!   corner `(x - r, y - r)`, unlike the filled variant which keeps `(x, y)`;
//! - ellipses and rectangles keep their anchor `(x, y)`;
//! - `forward` moves to the midpoint of the stroke's far edge.

pub mod raster;
pub mod stroke;

use crate::angle::normalize_degrees;
use crate::error::{CanvasError, Result};
use crate::image::{PixelBuffer, Rgb};
use log::{debug, trace};
use raster::Clip;
use serde::{Deserialize, Serialize};

pub use stroke::{forward_stroke, ForwardStroke};

/// Cursor state of a pen, independent of the buffer it draws on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenState {
    pub x: i32,
    pub y: i32,
    /// Heading in degrees, 0° along +x, positive counter-clockwise on screen.
    pub direction: f64,
    pub color: Rgb,
    pub visible: bool,
    pub stroke_width: u32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            direction: 0.0,
            color: Rgb::BLACK,
            visible: true,
            stroke_width: 1,
        }
    }
}

pub struct DrawingPen<'a> {
    buffer: &'a mut PixelBuffer,
    state: PenState,
}

impl<'a> DrawingPen<'a> {
    /// Bind a pen with default state to `buffer`.
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        Self::with_state(buffer, PenState::default())
    }

    /// Bind a pen carrying over `state`, e.g. after a transform replaced the buffer.
    pub fn with_state(buffer: &'a mut PixelBuffer, state: PenState) -> Self {
        Self { buffer, state }
    }

    pub fn state(&self) -> PenState {
        self.state
    }

    pub fn buffer(&self) -> &PixelBuffer {
        self.buffer
    }

    // --- state ---------------------------------------------------------------

    pub fn set_color(&mut self, r: i32, g: i32, b: i32) -> Result<()> {
        self.state.color = Rgb::try_from_ints(r.into(), g.into(), b.into())?;
        Ok(())
    }

    pub fn set_rgb(&mut self, color: Rgb) {
        self.state.color = color;
    }

    pub fn color(&self) -> Rgb {
        self.state.color
    }

    pub fn set_stroke_width(&mut self, width: i32) -> Result<()> {
        match u32::try_from(width) {
            Ok(w) if w > 0 => {
                self.state.stroke_width = w;
                Ok(())
            }
            _ => Err(CanvasError::InvalidStrokeWidth {
                width: width.into(),
            }),
        }
    }

    pub fn stroke_width(&self) -> u32 {
        self.state.stroke_width
    }

    pub fn set_direction(&mut self, degrees: f64) {
        self.state.direction = degrees;
    }

    pub fn direction(&self) -> f64 {
        self.state.direction
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.state.x = x;
        self.state.y = y;
    }

    pub fn set_x(&mut self, x: i32) {
        self.state.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.state.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.state.x, self.state.y)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    // --- primitives ----------------------------------------------------------

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let width = self.state.stroke_width;
        self.ink(|clip, plot| {
            raster::stroke_segment(x1.into(), y1.into(), x2.into(), y2.into(), width, clip, plot)
        });
        self.set_position(x2, y2);
    }

    /// Line from the current position to `(x, y)`.
    pub fn draw_line_to(&mut self, x: i32, y: i32) {
        let (x0, y0) = self.position();
        self.draw_line(x0, y0, x, y);
    }

    pub fn draw_circle_outline(&mut self, x: i32, y: i32, radius: i32) {
        let (left, top) = (x.saturating_sub(radius), y.saturating_sub(radius));
        let diameter = i64::from(radius) * 2;
        let width = self.state.stroke_width;
        self.ink(|clip, plot| {
            raster::stroke_ellipse(left.into(), top.into(), diameter, diameter, width, clip, plot)
        });
        self.set_position(left, top);
    }

    pub fn draw_circle_filled(&mut self, x: i32, y: i32, radius: i32) {
        let (left, top) = (i64::from(x) - i64::from(radius), i64::from(y) - i64::from(radius));
        let diameter = i64::from(radius) * 2;
        self.ink(|clip, plot| raster::fill_ellipse(left, top, diameter, diameter, clip, plot));
        self.set_position(x, y);
    }

    /// Ellipse inscribed in the box anchored at `(x, y)`, `minor_axis` wide and
    /// `major_axis` tall.
    pub fn draw_ellipse_outline(&mut self, x: i32, y: i32, minor_axis: i32, major_axis: i32) {
        let width = self.state.stroke_width;
        self.ink(|clip, plot| {
            raster::stroke_ellipse(
                x.into(),
                y.into(),
                minor_axis.into(),
                major_axis.into(),
                width,
                clip,
                plot,
            )
        });
        self.set_position(x, y);
    }

    pub fn draw_ellipse_filled(&mut self, x: i32, y: i32, minor_axis: i32, major_axis: i32) {
        self.ink(|clip, plot| {
            raster::fill_ellipse(
                x.into(),
                y.into(),
                minor_axis.into(),
                major_axis.into(),
                clip,
                plot,
            )
        });
        self.set_position(x, y);
    }

    pub fn draw_rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let width = self.state.stroke_width;
        self.ink(|clip, plot| {
            raster::stroke_rect(x.into(), y.into(), w.into(), h.into(), width, clip, plot)
        });
        self.set_position(x, y);
    }

    pub fn draw_rect_filled(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.ink(|clip, plot| raster::fill_rect(x.into(), y.into(), w.into(), h.into(), clip, plot));
        self.set_position(x, y);
    }

    /// Advance `distance` pixels along the heading, painting a parallelogram
    /// stroke, and return the stroke that was (or, if hidden, would have been) drawn.
    pub fn forward(&mut self, distance: i32) -> ForwardStroke {
        let s = &self.state;
        let stroke = forward_stroke([s.x, s.y], s.direction, s.stroke_width, distance);
        debug!(
            "forward dist={} heading={:.1} corners={:?} -> {:?}",
            distance,
            normalize_degrees(s.direction),
            stroke.corners,
            stroke.end
        );
        let vertices = stroke.vertices();
        self.ink(|clip, plot| raster::fill_polygon(&vertices, clip, plot));
        self.set_position(stroke.end[0], stroke.end[1]);
        stroke
    }

    /// Run a rasterizer against the bound buffer using the pen colour.
    /// Nothing is written while the pen is hidden.
    fn ink<F>(&mut self, rasterize: F)
    where
        F: FnOnce(Clip, &mut dyn FnMut(i64, i64)),
    {
        if !self.state.visible {
            return;
        }
        let color = self.state.color;
        let clip = Clip::new(self.buffer.width(), self.buffer.height());
        let buffer = &mut *self.buffer;
        let mut written = 0usize;
        rasterize(clip, &mut |x, y| {
            if buffer.plot(x, y, color) {
                written += 1;
            }
        });
        trace!("pen wrote {} pixels", written);
    }
}
