//! CLI configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use staffroll_common::{EditorConfig, SwipePreset};
use std::path::{Path, PathBuf};

use crate::logging::LoggingConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from `path`, falling back to defaults when the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::parse(&contents).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.editor.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset: SwipePreset = name.parse()?;
        self.editor.swipe = preset.config();
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(PathBuf::from(home).join(".config/staffroll/config.toml"))
    }
}
