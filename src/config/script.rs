use crate::error::{CanvasError, Result};
use crate::image::{EncodeFormat, Rgb};
use crate::pen::PenState;
use crate::script::Op;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ScriptConfig {
    /// Directory relative paths (input, overlays, outputs) resolve against.
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
    pub source: SourceConfig,
    /// Initial pen state; omitted fields take the pen defaults.
    #[serde(default)]
    pub pen: PenState,
    #[serde(default)]
    pub ops: Vec<Op>,
    pub output: OutputConfig,
    /// When set, every `render` op writes a numbered PNG frame here.
    #[serde(default)]
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    Blank {
        width: usize,
        height: usize,
        #[serde(default = "default_fill")]
        fill: Rgb,
    },
    File(PathBuf),
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub image: PathBuf,
    /// Explicit output format; inferred from the extension of `image` when absent.
    #[serde(default)]
    pub format: Option<EncodeFormat>,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    #[serde(default)]
    pub overwrite: bool,
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_fill() -> Rgb {
    Rgb::WHITE
}

pub fn load_config(path: &Path) -> Result<ScriptConfig> {
    let data = fs::read_to_string(path).map_err(|source| CanvasError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|source| CanvasError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(json: &str) -> serde_json::Result<ScriptConfig> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "working_dir": "/data",
            "source": {"blank": {"width": 32, "height": 16}},
            "pen": {"stroke_width": 2, "color": {"r": 255, "g": 0, "b": 0}},
            "ops": [
                {"op": "forward", "distance": 10},
                {"op": "scale", "factor": -2.0},
                {"op": "greyscale"},
                {"op": "circle", "x": 4, "y": 4, "radius": 2, "filled": true}
            ],
            "output": {"image": "out.bmp", "summary_json": "summary.json"}
        }"#;
        let cfg = parse_config(json).unwrap();
        assert_eq!(cfg.working_dir, PathBuf::from("/data"));
        assert!(matches!(
            cfg.source,
            SourceConfig::Blank {
                width: 32,
                height: 16,
                fill: Rgb::WHITE
            }
        ));
        assert_eq!(cfg.pen.stroke_width, 2);
        assert_eq!(cfg.pen.color, Rgb::new(255, 0, 0));
        assert!(cfg.pen.visible);
        assert_eq!(cfg.ops.len(), 4);
        assert_eq!(cfg.ops[1], Op::Scale { factor: -2.0 });
        assert_eq!(cfg.output.format, None);
        assert!(!cfg.output.overwrite);
        assert!(cfg.snapshot_dir.is_none());
    }

    #[test]
    fn file_source_and_defaults() {
        let json = r#"{
            "source": {"file": "in.png"},
            "output": {"image": "out.png", "format": "jpeg", "overwrite": true}
        }"#;
        let cfg = parse_config(json).unwrap();
        assert_eq!(cfg.working_dir, PathBuf::from("."));
        assert!(matches!(cfg.source, SourceConfig::File(ref p) if p == Path::new("in.png")));
        assert_eq!(cfg.output.format, Some(EncodeFormat::Jpeg));
        assert!(cfg.ops.is_empty());
        assert_eq!(cfg.pen, PenState::default());
    }

    #[test]
    fn unknown_op_is_rejected() {
        let json = r#"{
            "source": {"file": "in.png"},
            "ops": [{"op": "sharpen"}],
            "output": {"image": "out.png"}
        }"#;
        assert!(parse_config(json).is_err());
    }
}
