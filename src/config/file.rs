//
//  app-directory
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Settings File
//!
//! The `ad` binary keeps optional defaults in a TOML file stored in the
//! platform-specific configuration directory:
//!
//! - **Linux**: `~/.config/app-directory/config.toml`
//! - **macOS**: `~/Library/Application Support/app-directory/config.toml`
//! - **Windows**: `%APPDATA%\app-directory\config\config.toml`
//!
//! ```toml
//! base_url = "https://apps.example.com"
//! api_key = "ad_..."
//! timeout_secs = 10
//! ```
//!
//! The library never reads this file on its own; it only feeds
//! [`ClientConfigBuilder`](super::ClientConfigBuilder) when the binary builds
//! a client.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable pointing at an alternative settings file.
pub const ENV_SETTINGS_PATH: &str = "AD_CONFIG";

/// Keys accepted by [`Settings::set`] and `ad config set`.
pub const SETTINGS_KEYS: &[&str] = &["base_url", "api_key", "edit_token", "timeout_secs"];

/// Contents of the settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Loads the settings file from the default location, or defaults if it
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Writes the file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Location of the settings file. `AD_CONFIG` overrides the platform
    /// default.
    pub fn path() -> Result<PathBuf> {
        if let Some(custom) = std::env::var_os(ENV_SETTINGS_PATH).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(custom));
        }
        let dirs = ProjectDirs::from("", "", "app-directory")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => self.base_url.clone(),
            "api_key" => self.api_key.clone(),
            "edit_token" => self.edit_token.clone(),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Sets one key. An empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
        match key {
            "base_url" => self.base_url = value,
            "api_key" => self.api_key = value,
            "edit_token" => self.edit_token = value,
            "timeout_secs" => {
                self.timeout_secs = match value {
                    Some(v) => match v.parse::<u64>() {
                        Ok(secs) if secs > 0 => Some(secs),
                        _ => bail!("timeout_secs must be a positive integer, got '{v}'"),
                    },
                    None => None,
                }
            }
            _ => bail!(
                "Unknown setting '{key}'. Valid keys: {}",
                SETTINGS_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.set("base_url", "https://apps.example.com").unwrap();
        settings.set("timeout_secs", "12").unwrap();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.base_url.as_deref(), Some("https://apps.example.com"));
        assert_eq!(loaded.timeout_secs, Some(12));
        assert_eq!(loaded.api_key, None);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("api_key"));
    }

    #[test]
    fn test_set_rejects_unknown_keys_and_bad_timeouts() {
        let mut settings = Settings::default();
        assert!(settings.set("colour", "blue").is_err());
        assert!(settings.set("timeout_secs", "0").is_err());
        assert!(settings.set("timeout_secs", "soon").is_err());
    }

    #[test]
    fn test_empty_value_clears() {
        let mut settings = Settings::default();
        settings.set("api_key", "ad_123").unwrap();
        assert_eq!(settings.get("api_key").as_deref(), Some("ad_123"));
        settings.set("api_key", "").unwrap();
        assert_eq!(settings.get("api_key"), None);
    }
}
