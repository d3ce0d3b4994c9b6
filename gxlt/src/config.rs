//! Configuration module for the gxlt CLI.
//!
//! This module handles loading `gxlt.toml`, which carries the
//! lexer settings and the default output options.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use gxl_lex::LexerConfig;
use serde::Deserialize;
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{GxltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gxlt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Settings handed to the lexer.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output defaults, overridable on the command line.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Drop comment tokens from the output.
    #[serde(default)]
    pub strip_comments: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/gxlt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GxltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| GxltError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("gxlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("gxlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
