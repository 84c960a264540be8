//! Presentation sink for buffers.
//!
//! On-screen windows live outside this crate; anything that can show a
//! `PixelBuffer` implements `Display`. `SnapshotDisplay` stands in for a live
//! window by writing each rendered frame to a numbered PNG.
use crate::error::Result;
use crate::image::{Codec, EncodeFormat, PixelBuffer};
use std::path::{Path, PathBuf};

pub trait Display {
    fn render(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn render(&mut self, buffer: &PixelBuffer) -> Result<()> {
        (**self).render(buffer)
    }
}

pub struct SnapshotDisplay<C: Codec> {
    dir: PathBuf,
    codec: C,
    frame: usize,
}

impl<C: Codec> SnapshotDisplay<C> {
    pub fn new(dir: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            dir: dir.into(),
            codec,
            frame: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frame
    }

    fn frame_path(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("frame_{frame:04}.png"))
    }
}

impl<C: Codec> Display for SnapshotDisplay<C> {
    fn render(&mut self, buffer: &PixelBuffer) -> Result<()> {
        let path = self.frame_path(self.frame);
        self.codec.encode(buffer, &path, EncodeFormat::Png)?;
        log::debug!("rendered frame {} to {}", self.frame, path.display());
        self.frame += 1;
        Ok(())
    }
}
