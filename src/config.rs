//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before [`HostConfig::from_env`] runs. Leptos'
//! own options still come from `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

/// Must differ from the port of the client's default API URL.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected 1-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos site root when serving `/pkg`.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Optional:
    /// - `PORT`: default 3001
    /// - `INKPOST_SITE_ROOT`: directory holding the built `pkg/`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("INKPOST_SITE_ROOT").ok().as_deref())
    }

    pub fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(port)?,
            site_root: site_root.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from),
        })
    }
}

pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
