//! Tool configuration
//!
//! One optional `config.toml` in the platform config directory holds the
//! workbook path; the `--file` flag overrides it. The effective config is
//! published once at startup and read through `global_config()`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_WORKBOOK: &str = "data/inventory.xlsx";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the source workbook the clean table is built from.
    pub workbook_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK),
        }
    }
}

impl Config {
    /// Load `config.toml` from the platform config dir, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Config> {
        let Some(path) = config_file_path() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("packlist").join("config.toml"))
}

static CONFIG: Lazy<ArcSwap<Config>> = Lazy::new(|| ArcSwap::from_pointee(Config::default()));

/// Publish the effective config for the rest of the process.
pub fn set_global_config(config: Config) {
    CONFIG.store(Arc::new(config));
}

/// The config published at startup.
pub fn global_config() -> Arc<Config> {
    CONFIG.load_full()
}
