//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the lead API
    pub api_url: Option<String>,
    /// Source tag stamped on submissions
    pub source_tag: Option<String>,
    /// Skip the splash animation on startup
    pub skip_splash: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "quotedesk", "quotedesk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.source_tag.is_none());
        assert!(config.skip_splash.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_url: Some("https://api.example.com".to_string()),
            source_tag: Some("showroom-kiosk".to_string()),
            skip_splash: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_url, Some("https://api.example.com".to_string()));
        assert_eq!(parsed.source_tag, Some("showroom-kiosk".to_string()));
        assert_eq!(parsed.skip_splash, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.api_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_url": "https://api.example.com", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_url, Some("https://api.example.com".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
