//! Configuration loading for pinstack.
//!
//! Defaults for the command line live in `~/.pinstack/config.toml` (or the
//! file named by `PINSTACK_CONFIG`):
//!
//! ```toml
//! [defaults]
//! type = "kwikset"
//! pins = 5
//! cuts = "1-7"
//! macs = 4
//! strict_parity = true
//! ```
//!
//! The raw structs below mirror the file. [`DefaultsConfig::resolve`] turns
//! them into typed [`Defaults`] at the parse boundary.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use pinstack_types::{CutRange, LockProfile, Macs, SpecError};

pub const CONFIG_ENV_VAR: &str = "PINSTACK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {error}", path.display())]
    Read { path: PathBuf, error: io::Error },
    #[error("failed to parse config at {}: {error}", path.display())]
    Parse {
        path: PathBuf,
        error: toml::de::Error,
    },
    #[error("invalid [defaults] type: {0}")]
    Profile(SpecError),
    #[error("invalid [defaults] cuts: {0}")]
    Cuts(SpecError),
    #[error("invalid [defaults] pins: must be at least 1")]
    Pins,
}

#[derive(Debug, Default, Deserialize)]
pub struct PinstackConfig {
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    #[serde(rename = "type")]
    pub lock_type: Option<String>,
    pub pins: Option<usize>,
    pub cuts: Option<String>,
    pub macs: Option<u8>,
    pub strict_parity: Option<bool>,
}

/// Validated defaults. Every field is optional; the caller falls back to
/// built-in values for anything unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Defaults {
    pub profile: Option<LockProfile>,
    pub pins: Option<usize>,
    pub range: Option<CutRange>,
    pub macs: Option<Macs>,
    pub strict_parity: Option<bool>,
}

impl DefaultsConfig {
    pub fn resolve(&self) -> Result<Defaults, ConfigError> {
        let profile = self
            .lock_type
            .as_deref()
            .map(str::parse::<LockProfile>)
            .transpose()
            .map_err(ConfigError::Profile)?;
        let range = self
            .cuts
            .as_deref()
            .map(str::parse::<CutRange>)
            .transpose()
            .map_err(ConfigError::Cuts)?;
        if self.pins == Some(0) {
            return Err(ConfigError::Pins);
        }

        Ok(Defaults {
            profile,
            pins: self.pins,
            range,
            macs: self.macs.map(Macs::new),
            strict_parity: self.strict_parity,
        })
    }
}

impl PinstackConfig {
    /// Load the config file if one exists.
    ///
    /// A missing file is not an error. An unreadable or malformed file is
    /// logged and ignored.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_path_buf(),
            error,
        })?;
        toml::from_str(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Resolved `[defaults]`, or empty defaults if the table is absent.
    pub fn defaults(&self) -> Result<Defaults, ConfigError> {
        self.defaults
            .as_ref()
            .map_or_else(|| Ok(Defaults::default()), DefaultsConfig::resolve)
    }
}

/// `$PINSTACK_CONFIG` if set, else `~/.pinstack/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV_VAR)
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".pinstack").join("config.toml"))
}
