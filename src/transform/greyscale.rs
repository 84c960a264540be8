use super::for_each_row;
use crate::image::{PixelBuffer, Rgb};

/// Luminance averaging: every channel becomes `⌊(r + g + b) / 3⌋` of the source pixel.
pub fn greyscale(src: &PixelBuffer) -> PixelBuffer {
    let mut out = src.clone();
    for_each_row(&mut out, |_, row| {
        for px in row.iter_mut() {
            let m = px.mean();
            *px = Rgb::new(m, m, m);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_with_truncation() {
        let mut src = PixelBuffer::new(2, 1).unwrap();
        src.set_pixel(0, 0, Rgb::new(10, 20, 31)).unwrap();
        src.set_pixel(1, 0, Rgb::new(255, 0, 0)).unwrap();
        let out = greyscale(&src);
        assert_eq!(out.pixel(0, 0).unwrap(), Rgb::new(20, 20, 20));
        assert_eq!(out.pixel(1, 0).unwrap(), Rgb::new(85, 85, 85));
        // source untouched
        assert_eq!(src.pixel(1, 0).unwrap(), Rgb::new(255, 0, 0));
    }
}
