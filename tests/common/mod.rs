#![allow(dead_code)]

pub mod synthetic_image;

use std::path::PathBuf;

/// Fresh per-test scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "raster_canvas_{}_{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
