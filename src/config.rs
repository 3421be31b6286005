// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Loaded from a YAML file next to the binary (or the path named by
//! `SWINGMARK_CONFIG`). A missing file is not an error; the defaults
//! point at a local academy backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "SWINGMARK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "swingmark.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the academy REST API, without a trailing slash.
    pub api_base_url: String,
    /// Bearer token sent with every request, if the backend requires one.
    pub api_token: Option<String>,
    /// Timeout applied to every request. Requests fail instead of
    /// hanging when the backend is unreachable.
    pub request_timeout_secs: u64,
    /// Video to open on startup.
    pub video_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000/api/v1".to_string(),
            api_token: None,
            request_timeout_secs: 10,
            video_id: None,
        }
    }
}

impl AppConfig {
    /// Load the configuration, falling back to defaults when no file
    /// exists. A file that exists but fails to parse is an error.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config_with_defaults() {
        let yaml = "api_base_url: https://academy.example.com/api/v1\nvideo_id: vid-42\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api_base_url, "https://academy.example.com/api/v1");
        assert_eq!(config.video_id.as_deref(), Some("vid-42"));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    }
}
