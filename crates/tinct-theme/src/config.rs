//! TOML theme configuration.
//!
//! ```toml
//! mode = "dark"
//!
//! [colors]
//! base = "#0b1120"
//! accent = "oklch(70% 0.15 250)"
//!
//! [numbers]
//! radius = 0.75
//! ```
//!
//! Every field is optional; anything missing takes the light default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{CoreColors, CoreNumbers, Mode};
use crate::preset::builtin_preset;
use crate::theme::{Theme, synthesize};

/// Errors loading a theme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Everything synthesis needs, as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub mode: Mode,
    pub colors: CoreColors,
    pub numbers: CoreNumbers,
}

impl ThemeConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    /// Color strings are not validated here; bad colors become black at
    /// synthesis time.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), mode = %config.mode, "loaded theme config");
        Ok(config)
    }

    /// The named builtin preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for an unrecognized name.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        builtin_preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_owned()))
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// Only fails if serialization itself fails, which the field types
    /// make unreachable in practice.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Synthesize the theme this config describes.
    #[must_use]
    pub fn synthesize(&self) -> Theme {
        synthesize(&self.colors, self.numbers, self.mode)
    }
}
