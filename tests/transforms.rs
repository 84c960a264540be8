mod common;

use common::synthetic_image::{checkerboard, coordinate_pattern, count_color, solid};
use raster_canvas::{composite, crop, greyscale, scale, CanvasError, Channel, PixelBuffer, Rgb};

const RED: Rgb = Rgb::new(255, 0, 0);

#[test]
fn scale_round_trip_never_grows() {
    common::init_logging();
    for &(w, h) in &[(4usize, 4usize), (7, 5), (13, 9), (31, 17)] {
        let src = coordinate_pattern(w, h);
        for &k in &[1.0f64, 1.5, 2.0, 2.5, 3.0] {
            let up = scale(&src, k).unwrap();
            let back = scale(&up, -k).unwrap();

            let up_w = (w as f64 * k).floor();
            let up_h = (h as f64 * k).floor();
            let expected = ((up_w / k).floor() as usize, (up_h / k).floor() as usize);
            assert_eq!(
                (back.width(), back.height()),
                expected,
                "w={w} h={h} k={k}"
            );
            assert!(back.width() <= w && back.height() <= h);
        }
    }
}

#[test]
fn integer_scale_round_trip_restores_pixels() {
    let src = coordinate_pattern(9, 6);
    let up = scale(&src, 3.0).unwrap();
    let back = scale(&up, -3.0).unwrap();
    assert_eq!(*back, src);
}

#[test]
fn greyscale_is_idempotent() {
    let src = coordinate_pattern(17, 11);
    let once = greyscale(&src);
    let twice = greyscale(&once);
    assert_eq!(once, twice);
    assert!(once.pixels().iter().all(|px| px.r == px.g && px.g == px.b));
}

#[test]
fn composite_with_full_size_overlay_returns_overlay() {
    let base = checkerboard(10, 8, 2, Rgb::BLACK, Rgb::WHITE);
    let overlay = coordinate_pattern(10, 8);
    let out = composite(&base, &overlay, 0, 0).unwrap();
    assert_eq!(out, overlay);
}

#[test]
fn crop_then_composite_reconstructs_source() {
    let src = coordinate_pattern(12, 9);
    for &(x0, y0, x1, y1) in &[(2, 3, 7, 8), (0, 0, 12, 9), (11, 8, 12, 9), (0, 4, 5, 5)] {
        let piece = crop(&src, x0, y0, x1, y1).unwrap();
        let rebuilt = composite(&src, &piece, x0, y0).unwrap();
        assert_eq!(rebuilt, src, "region ({x0},{y0})-({x1},{y1})");
    }
}

#[test]
fn composite_overhang_is_rejected() {
    let base = solid(6, 6, Rgb::WHITE);
    let overlay = solid(3, 3, RED);
    let err = composite(&base, &overlay, 4, 4).unwrap_err();
    assert!(matches!(err, CanvasError::OutOfBounds { .. }));
    // base untouched
    assert_eq!(count_color(&base, Rgb::WHITE), 36);
}

#[test]
fn crop_past_source_is_out_of_bounds() {
    let src = solid(5, 5, RED);
    assert!(matches!(
        crop(&src, 3, 3, 6, 5),
        Err(CanvasError::OutOfBounds { x: 6, y: 5, .. })
    ));
    assert!(matches!(
        crop(&src, 5, 0, 2, 2),
        Err(CanvasError::OutOfBounds { x: 5, y: 0, .. })
    ));
    assert!(matches!(
        crop(&src, 4, 4, 4, 4),
        Err(CanvasError::OutOfBounds { .. })
    ));
}

#[test]
fn channel_writes_reject_out_of_range_values() {
    let mut buf = solid(3, 3, Rgb::new(7, 8, 9));
    assert!(matches!(
        buf.set_channel(1, 1, Channel::Red, 256),
        Err(CanvasError::InvalidChannelValue { value: 256 })
    ));
    assert!(matches!(
        buf.set_channel(1, 1, Channel::Red, -1),
        Err(CanvasError::InvalidChannelValue { value: -1 })
    ));
    assert_eq!(buf.pixel(1, 1).unwrap(), Rgb::new(7, 8, 9));
    assert!(matches!(
        buf.get_channel(3, 0, Channel::Red),
        Err(CanvasError::OutOfBounds { x: 3, y: 0, .. })
    ));
}

#[test]
fn red_square_scale_crop_greyscale() {
    let p = solid(4, 4, RED);

    let big = scale(&p, 2.0).unwrap();
    assert_eq!((big.width(), big.height()), (8, 8));
    assert_eq!(count_color(&big, RED), 64);

    let corner = crop(&big, 0, 0, 2, 2).unwrap();
    assert_eq!((corner.width(), corner.height()), (2, 2));
    assert_eq!(count_color(&corner, RED), 4);

    let grey = greyscale(&corner);
    assert_eq!(count_color(&grey, Rgb::new(85, 85, 85)), 4);
}

#[test]
fn scale_by_zero_is_identity() {
    let p: PixelBuffer = coordinate_pattern(5, 4);
    let same = scale(&p, 0.0).unwrap();
    assert_eq!(*same, p);
}
