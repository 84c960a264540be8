use raster_canvas::prelude::*;
use raster_canvas::Result;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Demo stub: draws a square spiral on a blank canvas and derives a thumbnail
    let mut canvas = PixelBuffer::new(200, 200)?;
    let mut pen = DrawingPen::new(&mut canvas);
    pen.set_position(100, 100);
    pen.set_color(20, 60, 200)?;
    for step in 1..=24 {
        pen.forward(step * 4);
        pen.set_direction(pen.direction() + 90.0);
    }
    let (x, y) = pen.position();

    let inked = canvas
        .pixels()
        .iter()
        .filter(|&&px| px != Rgb::WHITE)
        .count();
    let thumb = scale(&canvas, -4.0)?;
    let grey = greyscale(&thumb);
    println!(
        "canvas={}x{} inked={} pen_end=({}, {}) thumb={}x{} thumb_centre_grey={}",
        canvas.width(),
        canvas.height(),
        inked,
        x,
        y,
        grey.width(),
        grey.height(),
        grey.get_channel(25, 25, Channel::Red)?
    );
    Ok(())
}
