use raster_canvas::{PixelBuffer, Rgb};

/// Buffer with every pixel set to `color`.
pub fn solid(width: usize, height: usize, color: Rgb) -> PixelBuffer {
    PixelBuffer::filled(width, height, color).expect("valid dimensions")
}

/// Two-colour checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize, a: Rgb, b: Rgb) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut img = solid(width, height, a);
    for y in 0..height {
        for x in 0..width {
            if ((x / cell) + (y / cell)) & 1 == 1 {
                img.set_pixel(x as i32, y as i32, b).unwrap();
            }
        }
    }
    img
}

/// Every pixel carries a distinct-ish colour derived from its coordinates.
pub fn coordinate_pattern(width: usize, height: usize) -> PixelBuffer {
    let mut img = solid(width, height, Rgb::BLACK);
    for y in 0..height {
        for x in 0..width {
            let c = Rgb::new(
                (x * 37 % 256) as u8,
                (y * 53 % 256) as u8,
                ((x + y) * 11 % 256) as u8,
            );
            img.set_pixel(x as i32, y as i32, c).unwrap();
        }
    }
    img
}

pub fn count_color(img: &PixelBuffer, color: Rgb) -> usize {
    img.pixels().iter().filter(|&&px| px == color).count()
}
