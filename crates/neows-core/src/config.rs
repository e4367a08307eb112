//! Configuration types for neows.
//!
//! [`Config::load`] reads `~/.config/neows/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//! `NEOWS_<SECTION>__<KEY>` environment variables (e.g. `NEOWS_QUERY__NUMBER`)
//! override both.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::OutputFormat;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "data/neo_data.csv"

[query]
number              = 10
return_object       = "NEO"
entity_filter_basis = "matched"

[output]
format   = "display"
csv_path = "neo_results.csv"

[log]
debug_file = "/tmp/neows-debug.log"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/neows/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[data]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("data/neo_data.csv") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[query]` section of `config.toml`; defaults for omitted CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_number")]
    pub number: i64,
    #[serde(default = "default_return_object")]
    pub return_object: String,
    #[serde(default = "default_entity_filter_basis")]
    pub entity_filter_basis: String,
}

fn default_number() -> i64 { 10 }
fn default_return_object() -> String { "NEO".to_string() }
fn default_entity_filter_basis() -> String { "matched".to_string() }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            number: default_number(),
            return_object: default_return_object(),
            entity_filter_basis: default_entity_filter_basis(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

fn default_csv_path() -> PathBuf { PathBuf::from("neo_results.csv") }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            csv_path: default_csv_path(),
        }
    }
}

/// `[log]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_debug_file")]
    pub debug_file: PathBuf,
}

fn default_debug_file() -> PathBuf { PathBuf::from("/tmp/neows-debug.log") }

impl Default for LogConfig {
    fn default() -> Self {
        Self { debug_file: default_debug_file() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/neows/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// A missing file is an error here.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("NEOWS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("neows")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
