//! Sheet settings, loaded from `settings.toml`.
//!
//! ```toml
//! width = 100
//! height = 1000
//! error_text = "error"
//! error_mode = "strict"   # or "lenient"
//! max_depth = 64
//! ```

use std::path::{Path, PathBuf};

use cellcalc_engine::engine::{DEFAULT_MAX_DEPTH, ErrorMode, EvalOptions};
use directories::ProjectDirs;
use log::warn;
use serde::Deserialize;

use crate::error::{CellcalcError, Result};

const MAX_SETTINGS_FILE_BYTES: u64 = 65_536;

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 1000;
pub const DEFAULT_ERROR_TEXT: &str = "error";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Displayed for formulas that reference their own cell.
    pub error_text: String,
    pub error_mode: ErrorMode,
    /// Parenthesis nesting limit.
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            error_mode: ErrorMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_SETTINGS_FILE_BYTES {
            return Err(CellcalcError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "settings file too large ({} bytes, max {})",
                    meta.len(),
                    MAX_SETTINGS_FILE_BYTES
                ),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|err| CellcalcError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Settings from the user config dir, or defaults if there is no usable file.
    pub fn load_default() -> Self {
        let Some(path) = user_settings_path() else {
            return Settings::default();
        };
        Self::load_or_default(&path)
    }

    /// Settings from `path`; defaults if the file is missing or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Settings::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("{err}; using default settings");
                Settings::default()
            }
        }
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            mode: self.error_mode,
            max_depth: self.max_depth,
        }
    }
}

fn user_settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "cellcalc", "cellcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("settings.toml");
    Some(path)
}
