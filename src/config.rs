//!
//! This module defines the configuration file structure and its loading logic.
//! A configuration selects the span style mode, the outer container style and the palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::style::{Category, Palette, StyleMode, Styler};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = ".lavendeux-syntax.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

/// Represents the complete configuration loaded from the config file
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Colour overrides keyed by category name
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// Global configuration options
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// How spans carry their category
    pub style: StyleMode,

    /// Style attribute of the outer `<pre>` in inline mode
    pub container_style: Option<String>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `.lavendeux-syntax.toml` from `dir` if there is one
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }

    /// Build the styler described by this configuration.
    /// Colours for unknown categories are ignored with a warning.
    pub fn styler(&self) -> Styler {
        let mut palette = Palette::default();
        for (key, color) in &self.colors {
            match key.parse::<Category>() {
                Ok(category) => palette.set(category, color.as_str()),
                Err(_) => log::warn!("Unknown category in [colors]: {key}"),
            }
        }

        let styler = Styler::new(self.global.style, palette);
        match &self.global.container_style {
            Some(style) => styler.with_container_style(style),
            None => styler,
        }
    }
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    let default_config = r##"# lavendeux-syntax configuration file

[global]
# How highlighted spans are styled: "inline" (style attributes) or "class" (class names)
style = "inline"

# Style of the outer <pre> element in inline mode
# container-style = "background-color: #1f2937; color: #e5e7eb;"

# Colour overrides per category (inline mode only)
[colors]
# comment = "#33cc33"
# string = "#b1cbff"
# data = "#6699ff"
# radix = "#cc00cc"
# decorator = "#cc3300"
# function = "#ff9900"
"##;

    fs::write(path, default_config).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })
}
