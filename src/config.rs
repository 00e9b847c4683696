//! App Configuration
//!
//! Optional JSON embedded in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "title": "TODO LIST", "log_level": "debug", "dark_mode": true }
//! </script>
//! ```
//!
//! Every field has a default; a missing element means all defaults.

use std::str::FromStr;

use leptos_modal_host::{HostError, HostId, DEFAULT_HOST_ID};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// DOM id of the embedded config element
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),
    #[error("invalid modal host id: {0}")]
    InvalidHostId(#[from] HostError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header text
    pub title: String,
    /// Id of the container the modal portal renders into
    pub modal_host_id: String,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
    /// Initial theme; `None` follows the system setting
    pub dark_mode: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "TODO LIST".to_string(),
            modal_host_id: DEFAULT_HOST_ID.to_string(),
            log_level: "info".to_string(),
            dark_mode: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.level_filter()?;
        config.host_id()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn host_id(&self) -> Result<HostId, ConfigError> {
        Ok(HostId::new(self.modal_host_id.clone())?)
    }
}

/// Read the embedded config, falling back to defaults on any problem
pub fn load() -> AppConfig {
    let Some(raw) = read_config_element() else {
        log::debug!("[CONFIG] No #{} element, using defaults", CONFIG_ELEMENT_ID);
        return AppConfig::default();
    };
    match AppConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("[CONFIG] Loaded config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            log::warn!("[CONFIG] {}, using defaults", err);
            AppConfig::default()
        }
    }
}

fn read_config_element() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
