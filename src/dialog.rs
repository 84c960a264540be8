//! Path selection.
//!
//! Interactive pickers are external; they implement `FileDialog`. The
//! directory a picker starts from is an explicit `DialogConfig` value rather
//! than process state. `PresetDialog` answers from configured paths and
//! enforces the same acceptance rules an interactive picker would:
//! - `choose_existing` only returns an existing regular file;
//! - `choose_new` only returns a path that does not exist yet (unless
//!   overwriting is allowed);
//! - `choose_directory` only returns an existing directory.
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub trait FileDialog {
    fn choose_existing(&mut self) -> Option<PathBuf>;
    fn choose_new(&mut self) -> Option<PathBuf>;
    fn choose_directory(&mut self) -> Option<PathBuf>;
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Directory relative selections are resolved against.
    pub working_dir: PathBuf,
    /// Accept `choose_new` selections that already exist.
    pub allow_overwrite: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            allow_overwrite: false,
        }
    }
}

impl DialogConfig {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = allow;
        self
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

/// Non-interactive `FileDialog` with one preset answer per kind of selection.
#[derive(Clone, Debug, Default)]
pub struct PresetDialog {
    config: DialogConfig,
    existing: Option<PathBuf>,
    new: Option<PathBuf>,
    directory: Option<PathBuf>,
}

impl PresetDialog {
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing = Some(path.into());
        self
    }

    pub fn with_new(mut self, path: impl Into<PathBuf>) -> Self {
        self.new = Some(path.into());
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }
}

impl FileDialog for PresetDialog {
    fn choose_existing(&mut self) -> Option<PathBuf> {
        let path = self.config.resolve(self.existing.as_deref()?);
        if path.is_file() {
            Some(path)
        } else {
            warn!("{} is not an existing file", path.display());
            None
        }
    }

    fn choose_new(&mut self) -> Option<PathBuf> {
        let path = self.config.resolve(self.new.as_deref()?);
        if path.exists() && !self.config.allow_overwrite {
            warn!("{} already exists", path.display());
            None
        } else {
            Some(path)
        }
    }

    fn choose_directory(&mut self) -> Option<PathBuf> {
        let path = self.config.resolve(self.directory.as_deref()?);
        if path.is_dir() {
            Some(path)
        } else {
            warn!("{} is not a directory", path.display());
            None
        }
    }
}
