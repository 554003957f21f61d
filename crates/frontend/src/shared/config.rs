//! Client configuration read from the page query string.
//!
//! `?api_base=http://menu.local:8080&log_level=info` overrides the defaults;
//! anything absent keeps its default value.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid query string: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("page location is not available")]
    NoLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full API base URL; when absent it is derived from the page location
    pub api_base: Option<String>,
    pub api_port: u16,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            api_port: DEFAULT_API_PORT,
            log_level: "debug".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_qs::from_str(query)?)
    }

    /// Parse the query string of the current page
    pub fn from_location() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoLocation)?;
        let search = window
            .location()
            .search()
            .map_err(|_| ConfigError::NoLocation)?;
        Self::from_query(&search)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
