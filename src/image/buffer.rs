//! Owned RGB pixel grid in row-major layout.
//!
//! Dimensions are fixed at construction and always positive. Channel values
//! are stored as `u8`, so the `[0, 255]` invariant holds by construction;
//! the integer-taking setters validate before touching storage so a rejected
//! write leaves the pixel exactly as it was.
use super::rgb::{checked_channel, Channel, Rgb};
use crate::error::{CanvasError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    w: usize,
    h: usize,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Blank buffer pre-filled with a white background.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, Rgb::WHITE)
    }

    /// Buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CanvasError::InvalidDimensions { width, height })?;
        data.resize(len, color);
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Wrap tightly packed `RGBRGB...` bytes, e.g. from a decoder.
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        if bytes.len() / 3 != len || bytes.len() % 3 != 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Tightly packed `RGBRGB...` bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.w as u64 && (y as u64) < self.h as u64
    }

    /// Linear index of `(x, y)`, or `OutOfBounds`.
    #[inline]
    pub(crate) fn index(&self, x: i64, y: i64) -> Result<usize> {
        if self.contains(x, y) {
            Ok(y as usize * self.w + x as usize)
        } else {
            Err(CanvasError::out_of_bounds(x, y, self.w, self.h))
        }
    }

    pub fn get_channel(&self, x: i32, y: i32, channel: Channel) -> Result<u8> {
        Ok(self.pixel(x, y)?.channel(channel))
    }

    /// Write a single channel. Values outside `[0, 255]` are rejected, not clamped.
    pub fn set_channel(&mut self, x: i32, y: i32, channel: Channel, value: i32) -> Result<()> {
        let i = self.index(x.into(), y.into())?;
        let value = checked_channel(value.into())?;
        self.data[i] = self.data[i].with_channel(channel, value);
        Ok(())
    }

    pub fn pixel(&self, x: i32, y: i32) -> Result<Rgb> {
        self.get(x.into(), y.into())
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<()> {
        let i = self.index(x.into(), y.into())?;
        self.data[i] = color;
        Ok(())
    }

    /// Bounds-checked read using wide coordinates.
    #[inline]
    pub(crate) fn get(&self, x: i64, y: i64) -> Result<Rgb> {
        Ok(self.data[self.index(x, y)?])
    }

    /// Write `color` if `(x, y)` lies inside the buffer; silently clip otherwise.
    ///
    /// Returns whether the pixel was written.
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        match self.index(x, y) {
            Ok(i) => {
                self.data[i] = color;
                true
            }
            Err(_) => false,
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.data.fill(color);
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Pixels of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// Rows top to bottom; this is how codecs and displays read a buffer.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgb> {
        self.data.chunks_exact(self.w)
    }
}

/// Pixel count for `width × height`, provided the backing storage fits in
/// `isize::MAX` bytes.
fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    let len = width.checked_mul(height).filter(|&n| n > 0);
    match len {
        Some(n)
            if n.checked_mul(std::mem::size_of::<Rgb>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize) =>
        {
            Ok(n)
        }
        _ => Err(CanvasError::InvalidDimensions { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_white() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert!(buf.pixels().iter().all(|&px| px == Rgb::WHITE));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 4),
            Err(CanvasError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(PixelBuffer::new(4, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert!(matches!(
            PixelBuffer::new(1 << 31, 1 << 31),
            Err(CanvasError::InvalidDimensions { .. })
        ));
        assert!(PixelBuffer::new(usize::MAX, 2).is_err());
        let bytes = [0u8; 6];
        assert!(PixelBuffer::from_rgb8(usize::MAX / 2, 3, &bytes).is_err());
    }

    #[test]
    fn set_channel_preserves_other_channels() {
        let mut buf = PixelBuffer::filled(2, 2, Rgb::new(10, 20, 30)).unwrap();
        buf.set_channel(1, 1, Channel::Blue, 99).unwrap();
        assert_eq!(buf.pixel(1, 1).unwrap(), Rgb::new(10, 20, 99));
        assert_eq!(buf.pixel(0, 0).unwrap(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn set_channel_rejects_out_of_range_without_writing() {
        let mut buf = PixelBuffer::filled(2, 2, Rgb::new(10, 20, 30)).unwrap();
        for bad in [256, -1] {
            let err = buf.set_channel(0, 0, Channel::Red, bad).unwrap_err();
            assert!(matches!(err, CanvasError::InvalidChannelValue { .. }));
        }
        assert_eq!(buf.get_channel(0, 0, Channel::Red).unwrap(), 10);
    }

    #[test]
    fn get_channel_at_width_is_out_of_bounds() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        let err = buf.get_channel(4, 0, Channel::Green).unwrap_err();
        assert!(matches!(
            err,
            CanvasError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            }
        ));
        assert!(buf.get_channel(-1, 0, Channel::Green).is_err());
        assert!(buf.get_channel(0, 3, Channel::Green).is_err());
    }

    #[test]
    fn plot_clips_silently() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        assert!(!buf.plot(-1, 0, Rgb::BLACK));
        assert!(!buf.plot(0, 2, Rgb::BLACK));
        assert!(buf.plot(1, 1, Rgb::BLACK));
        assert_eq!(buf.pixel(1, 1).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn rgb8_bytes_round_trip_layout() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let buf = PixelBuffer::from_rgb8(2, 1, &bytes).unwrap();
        assert_eq!(buf.pixel(1, 0).unwrap(), Rgb::new(4, 5, 6));
        assert_eq!(buf.to_rgb8(), bytes.to_vec());
        assert!(PixelBuffer::from_rgb8(2, 2, &bytes).is_err());
    }

    #[test]
    fn rows_follow_row_major_order() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        buf.set_pixel(1, 2, Rgb::BLACK).unwrap();
        let rows: Vec<&[Rgb]> = buf.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][1], Rgb::BLACK);
        assert_eq!(rows[0][1], Rgb::WHITE);
    }
}
