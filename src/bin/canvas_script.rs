use raster_canvas::config::script::{load_config, SourceConfig};
use raster_canvas::dialog::{DialogConfig, FileDialog, PresetDialog};
use raster_canvas::display::SnapshotDisplay;
use raster_canvas::image::io::write_json_file;
use raster_canvas::image::{Codec, EncodeFormat, ImageCodec, PixelBuffer};
use raster_canvas::script::ScriptRunner;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let codec = ImageCodec;

    let dialog_config =
        DialogConfig::new(&config.working_dir).with_overwrite(config.output.overwrite);
    let mut dialog = PresetDialog::new(dialog_config.clone()).with_new(&config.output.image);

    // Resolve the output first so a refused path fails before any work is done.
    let out_path = dialog.choose_new().ok_or_else(|| {
        format!(
            "Refusing to write {} (exists; set output.overwrite to replace it)",
            dialog_config.resolve(&config.output.image).display()
        )
    })?;
    let format = match config.output.format {
        Some(format) => format,
        None => EncodeFormat::from_path(&out_path).map_err(|e| e.to_string())?,
    };

    let buffer = match &config.source {
        SourceConfig::Blank {
            width,
            height,
            fill,
        } => PixelBuffer::filled(*width, *height, *fill).map_err(|e| e.to_string())?,
        SourceConfig::File(path) => {
            let mut dialog = dialog.with_existing(path);
            let input = dialog
                .choose_existing()
                .ok_or_else(|| format!("Input {} is not an existing file", path.display()))?;
            codec.decode(&input).map_err(|e| e.to_string())?
        }
    };

    let mut snapshots = config
        .snapshot_dir
        .as_ref()
        .map(|dir| SnapshotDisplay::new(dialog_config.resolve(dir), codec));
    let mut runner = ScriptRunner::new(&codec, dialog_config.clone());
    if let Some(display) = snapshots.as_mut() {
        runner = runner.with_display(display);
    }
    let outcome = runner
        .run(buffer, config.pen, &config.ops)
        .map_err(|e| e.to_string())?;

    codec
        .encode(&outcome.buffer, &out_path, format)
        .map_err(|e| e.to_string())?;
    println!(
        "Saved {}x{} image to {} ({} ops)",
        outcome.summary.width,
        outcome.summary.height,
        out_path.display(),
        outcome.summary.ops_applied
    );

    if let Some(summary_path) = &config.output.summary_json {
        let summary_path = dialog_config.resolve(summary_path);
        write_json_file(&summary_path, &outcome.summary).map_err(|e| e.to_string())?;
        println!("Saved summary to {}", summary_path.display());
    }
    if let Some(display) = &snapshots {
        println!(
            "Rendered {} frames to {}",
            display.frames(),
            display.dir().display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: canvas_script <config.json>".to_string()
}
