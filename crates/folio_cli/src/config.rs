//! Configuration file support for folio.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `FOLIO_`, e.g., `FOLIO_LOG_FILTER`)
//! 3. Config file (~/.config/folio/config.toml or ./folio.toml)
//! 4. Built-in defaults
//!
//! The listed account is compiled in and cannot be configured.
//!
//! Example config file:
//! ```toml
//! [api]
//! url = "https://api.github.com"  # this is the default
//!
//! [output]
//! format = "table"  # or "json"
//!
//! [log]
//! filter = "folio=debug"  # RUST_LOG takes precedence
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::commands::OutputFormat;

/// Default tracing filter when neither `RUST_LOG` nor `log.filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "folio=info,folio_cli=info";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub API configuration.
    pub api: ApiConfig,
    /// Rendering defaults.
    pub output: OutputConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// GitHub API configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Alternate API root, e.g. a caching mirror.
    /// Can also be set via FOLIO_API_URL.
    pub url: Option<String>,
}

/// Rendering defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for listings.
    pub format: OutputFormat,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Tracing filter directive used when RUST_LOG is unset.
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/folio/config.toml)
    /// 3. Local config file (./folio.toml)
    /// 4. Environment variables with FOLIO_ prefix
    ///
    /// Runs before logging is initialized, so errors are returned rather
    /// than logged.
    pub fn try_load() -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(xdg_config) = Self::default_config_path()
            && xdg_config.exists()
        {
            builder = builder.add_source(
                File::from(xdg_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let local_config = PathBuf::from("folio.toml");
        if local_config.exists() {
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., FOLIO_API_URL -> api.url
        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Tracing filter directive: config value or the built-in default.
    pub fn log_filter(&self) -> &str {
        self.log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
