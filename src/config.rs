//! User configuration: display-label lookup tables and default source paths.
//!
//! Stored as TOML in the platform config directory
//! (`~/.config/qbank/config.toml` on Linux). All fields are optional; a
//! missing file behaves like an empty one.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Code-to-display-name lookup tables.
///
/// Topic and section codes in source data are short (`A`, `short`, ...);
/// these tables map them to human labels for display. Unmapped codes fall
/// back to the raw code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub topics: HashMap<String, String>,
    pub sections: HashMap<String, String>,
}

impl Labels {
    pub fn topic<'a>(&'a self, code: &'a str) -> &'a str {
        self.topics.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn section<'a>(&'a self, code: &'a str) -> &'a str {
        self.sections.get(code).map(String::as_str).unwrap_or(code)
    }
}

/// Default source locations, so `list`/`show` can run without flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    /// CSV table of text questions.
    pub table: Option<PathBuf>,
    /// Directory of filename-encoded question images.
    pub images: Option<PathBuf>,
    /// Companion solutions directory.
    pub solutions: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub labels: Labels,
    pub sources: Sources,
}

impl Config {
    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("qbank").join("config.toml"))
    }

    /// Loads the config file, or the default config when none exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Writes the config to its default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }
}
