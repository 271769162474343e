//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CREASE__SECTION__KEY` (e.g. `CREASE__DEFAULTS__OVERS=5`)
//! 3. Config file (`--config`, else the platform config dir, else `.crease.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crease_core::domain::{DEFAULT_BALLS_PER_OVER, DEFAULT_OVERS};

/// File name used in the current directory when no platform dir exists.
pub const LOCAL_CONFIG_FILE: &str = ".crease.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where the scoring document lives.
    pub storage: StorageConfig,
    /// Default values for new matches.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Display names for the match awards.
    pub awards: AwardTitles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub overs: u32,
    pub balls_per_over: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wickets: Option<u32>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            overs: DEFAULT_OVERS,
            balls_per_over: DEFAULT_BALLS_PER_OVER,
            max_wickets: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardTitles {
    pub mvp_title: String,
    pub most_expensive_title: String,
    pub duck_title: String,
}

impl Default for AwardTitles {
    fn default() -> Self {
        Self {
            mvp_title: "Most Valuable Player".into(),
            most_expensive_title: "Most Expensive Bowler".into(),
            duck_title: "Golden Duck".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then `CREASE__*` vars.
    ///
    /// A file passed explicitly with `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to seed default config")?,
            )
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("CREASE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crease.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crease", "crease")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Resolved data file: `--data`, then `storage.data_file`, then the
    /// platform data dir, then `crease.json` in the current directory.
    pub fn data_path(&self, cli_override: Option<&PathBuf>) -> PathBuf {
        cli_override
            .or(self.storage.data_file.as_ref())
            .cloned()
            .unwrap_or_else(|| {
                directories::ProjectDirs::from("com", "crease", "crease")
                    .map(|d| d.data_dir().join("crease.json"))
                    .unwrap_or_else(|| PathBuf::from("crease.json"))
            })
    }
}
