//! Batch runner: apply a list of pen and transform operations to a buffer.
//!
//! Pen state outlives individual buffers: a transform replaces the buffer and
//! the next pen operation rebinds a pen with the carried-over state. The
//! first failing operation aborts the run.
use crate::dialog::DialogConfig;
use crate::display::Display;
use crate::error::Result;
use crate::image::{Codec, PixelBuffer};
use crate::pen::{DrawingPen, PenState};
use crate::transform;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Scale {
        factor: f64,
    },
    Crop {
        x_start: i32,
        y_start: i32,
        x_end: i32,
        y_end: i32,
    },
    Greyscale,
    /// Overlay an image file, resolved against the working directory.
    Composite {
        overlay: PathBuf,
        x: i32,
        y: i32,
    },
    SetColor {
        r: i32,
        g: i32,
        b: i32,
    },
    SetStrokeWidth {
        width: i32,
    },
    SetDirection {
        degrees: f64,
    },
    SetPosition {
        x: i32,
        y: i32,
    },
    SetVisible {
        visible: bool,
    },
    Forward {
        distance: i32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    LineTo {
        x: i32,
        y: i32,
    },
    Circle {
        x: i32,
        y: i32,
        radius: i32,
        #[serde(default)]
        filled: bool,
    },
    Ellipse {
        x: i32,
        y: i32,
        minor: i32,
        major: i32,
        #[serde(default)]
        filled: bool,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        #[serde(default)]
        filled: bool,
    },
    /// Push the current buffer to the display, if one is attached.
    Render,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScriptSummary {
    pub width: usize,
    pub height: usize,
    pub ops_applied: usize,
    pub frames_rendered: usize,
    pub pen: PenState,
}

#[derive(Debug)]
pub struct ScriptOutcome {
    pub buffer: PixelBuffer,
    pub summary: ScriptSummary,
}

pub struct ScriptRunner<'a> {
    codec: &'a dyn Codec,
    dialog: DialogConfig,
    display: Option<&'a mut dyn Display>,
    frames: usize,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(codec: &'a dyn Codec, dialog: DialogConfig) -> Self {
        Self {
            codec,
            dialog,
            display: None,
            frames: 0,
        }
    }

    pub fn with_display(mut self, display: &'a mut dyn Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn run(&mut self, buffer: PixelBuffer, pen: PenState, ops: &[Op]) -> Result<ScriptOutcome> {
        let mut buffer = buffer;
        let mut pen = pen;
        for (i, op) in ops.iter().enumerate() {
            buffer = match self.apply(buffer, &mut pen, op) {
                Ok(next) => next,
                Err(err) => {
                    warn!("op #{} {:?} failed: {}", i, op, err);
                    return Err(err);
                }
            };
        }
        let summary = ScriptSummary {
            width: buffer.width(),
            height: buffer.height(),
            ops_applied: ops.len(),
            frames_rendered: self.frames,
            pen,
        };
        debug!("script finished: {:?}", summary);
        Ok(ScriptOutcome { buffer, summary })
    }

    fn apply(&mut self, buffer: PixelBuffer, pen: &mut PenState, op: &Op) -> Result<PixelBuffer> {
        match op {
            Op::Scale { factor } => {
                let scaled = match transform::scale(&buffer, *factor)? {
                    Cow::Owned(scaled) => Some(scaled),
                    Cow::Borrowed(_) => None,
                };
                Ok(scaled.unwrap_or(buffer))
            }
            Op::Crop {
                x_start,
                y_start,
                x_end,
                y_end,
            } => transform::crop(&buffer, *x_start, *y_start, *x_end, *y_end),
            Op::Greyscale => Ok(transform::greyscale(&buffer)),
            Op::Composite { overlay, x, y } => {
                let overlay = self.codec.decode(&self.dialog.resolve(overlay))?;
                transform::composite(&buffer, &overlay, *x, *y)
            }
            Op::Render => {
                if let Some(display) = self.display.as_mut() {
                    display.render(&buffer)?;
                    self.frames += 1;
                }
                Ok(buffer)
            }
            _ => {
                let mut buffer = buffer;
                draw(&mut buffer, pen, op)?;
                Ok(buffer)
            }
        }
    }
}

/// Apply a pen operation; other operations leave buffer and pen untouched.
fn draw(buffer: &mut PixelBuffer, pen: &mut PenState, op: &Op) -> Result<()> {
    let mut p = DrawingPen::with_state(buffer, *pen);
    match *op {
        Op::SetColor { r, g, b } => p.set_color(r, g, b)?,
        Op::SetStrokeWidth { width } => p.set_stroke_width(width)?,
        Op::SetDirection { degrees } => p.set_direction(degrees),
        Op::SetPosition { x, y } => p.set_position(x, y),
        Op::SetVisible { visible } => p.set_visible(visible),
        Op::Forward { distance } => {
            p.forward(distance);
        }
        Op::Line { x1, y1, x2, y2 } => p.draw_line(x1, y1, x2, y2),
        Op::LineTo { x, y } => p.draw_line_to(x, y),
        Op::Circle {
            x,
            y,
            radius,
            filled: true,
        } => p.draw_circle_filled(x, y, radius),
        Op::Circle { x, y, radius, .. } => p.draw_circle_outline(x, y, radius),
        Op::Ellipse {
            x,
            y,
            minor,
            major,
            filled: true,
        } => p.draw_ellipse_filled(x, y, minor, major),
        Op::Ellipse {
            x, y, minor, major, ..
        } => p.draw_ellipse_outline(x, y, minor, major),
        Op::Rect {
            x,
            y,
            width,
            height,
            filled: true,
        } => p.draw_rect_filled(x, y, width, height),
        Op::Rect {
            x,
            y,
            width,
            height,
            ..
        } => p.draw_rect_outline(x, y, width, height),
        _ => return Ok(()),
    }
    *pen = p.state();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{EncodeFormat, Rgb};
    use std::path::Path;

    struct NoFiles;

    impl Codec for NoFiles {
        fn decode(&self, path: &Path) -> Result<PixelBuffer> {
            Err(crate::error::CanvasError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }

        fn encode(&self, _: &PixelBuffer, _: &Path, _: EncodeFormat) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn pen_state_survives_transforms() {
        let ops = vec![
            Op::SetColor { r: 255, g: 0, b: 0 },
            Op::SetPosition { x: 1, y: 1 },
            Op::Scale { factor: 2.0 },
            Op::Rect {
                x: 0,
                y: 0,
                width: 2,
                height: 2,
                filled: true,
            },
            Op::Greyscale,
        ];
        let mut runner = ScriptRunner::new(&NoFiles, DialogConfig::default());
        let out = runner
            .run(PixelBuffer::new(4, 4).unwrap(), PenState::default(), &ops)
            .unwrap();
        assert_eq!((out.summary.width, out.summary.height), (8, 8));
        assert_eq!(out.summary.pen.color, Rgb::new(255, 0, 0));
        assert_eq!(out.buffer.pixel(1, 1).unwrap(), Rgb::new(85, 85, 85));
        assert_eq!(out.buffer.pixel(2, 2).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn first_error_aborts() {
        let ops = vec![
            Op::Crop {
                x_start: 0,
                y_start: 0,
                x_end: 10,
                y_end: 1,
            },
            Op::Greyscale,
        ];
        let mut runner = ScriptRunner::new(&NoFiles, DialogConfig::default());
        let err = runner
            .run(PixelBuffer::new(4, 4).unwrap(), PenState::default(), &ops)
            .unwrap_err();
        assert!(err.is_pixel_error());
    }

    #[test]
    fn render_without_display_is_a_no_op() {
        let mut runner = ScriptRunner::new(&NoFiles, DialogConfig::default());
        let out = runner
            .run(
                PixelBuffer::new(2, 2).unwrap(),
                PenState::default(),
                &[Op::Render, Op::Scale { factor: 0.0 }],
            )
            .unwrap();
        assert_eq!(out.summary.frames_rendered, 0);
        assert_eq!(out.summary.ops_applied, 2);
    }
}
