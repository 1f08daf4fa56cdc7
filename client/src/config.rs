//! Client build configuration.
//!
//! The backend base URL is baked in at compile time from `INKPOST_API_URL`,
//! since the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("INKPOST_API_URL"))
    }

    pub fn from_raw(raw: Option<&str>) -> Self {
        Self { api_url: normalize_base_url(raw.unwrap_or(DEFAULT_API_URL)) }
    }
}

/// Trim whitespace and trailing slashes; blank input falls back to
/// [`DEFAULT_API_URL`].
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL.to_owned() } else { trimmed.to_owned() }
}
