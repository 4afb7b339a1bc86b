//! # Client Configuration
//!
//! Configuration management for the API client and export paths.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ATLAS_API_URL=https://api.example.com                              │
//! │     ATLAS_EXPORT_DIR=/home/clerk/reports                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/atlas-retail/config.toml (Linux)                         │
//! │     ~/Library/Application Support/com.atlas.retail/config.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     base_url = http://localhost:5000, exports to the download folder   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [export]
//! output_dir = "/home/clerk/reports"
//! ```
//!
//! No timeout knob exists on purpose: requests ride the transport defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult};

// =============================================================================
// API Settings
// =============================================================================

/// Where the remote collaborator lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST API (scheme + host + optional port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
        }
    }
}

// =============================================================================
// Export Settings
// =============================================================================

/// Where generated report artifacts are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Output directory for sales_report.pdf / sales_report.xlsx.
    /// When unset, the platform download folder is used (falling back to
    /// the working directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ExportSettings {
    /// Resolves the directory artifacts should land in.
    pub fn resolve_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }

        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete client configuration.
///
/// ## Example Config File
/// ```toml
/// [api]
/// base_url = "http://localhost:5000"
///
/// [export]
/// output_dir = "/home/clerk/reports"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiSettings,

    /// Artifact output settings.
    #[serde(default)]
    pub export: ExportSettings,
}

impl AppConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = self.api.base_url.trim();

        if url.is_empty() {
            return Err(ClientError::InvalidConfig("api.base_url is empty".into()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "Base URL must start with http:// or https://, got: {}",
                url
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ATLAS_API_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Ok(dir) = std::env::var("ATLAS_EXPORT_DIR") {
            debug!(dir = %dir, "Overriding export directory from environment");
            self.export.output_dir = Some(PathBuf::from(dir));
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "atlas", "retail")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert!(config.export.output_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.api.base_url = String::new();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "https://api.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.export.output_dir = Some(PathBuf::from("/tmp/reports"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[export]"));

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.export.output_dir, config.export.output_dir);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppConfig = toml::from_str("[api]\nbase_url = \"http://host:9000\"\n").unwrap();
        assert_eq!(parsed.api.base_url, "http://host:9000");
        assert!(parsed.export.output_dir.is_none());

        let parsed: AppConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:5000");
    }

    // The only test in this binary touching the ATLAS_* variables.
    #[test]
    fn test_env_overrides_win_over_file_values() {
        std::env::set_var("ATLAS_API_URL", "http://env-host:7000");
        std::env::set_var("ATLAS_EXPORT_DIR", "/tmp/atlas-env-exports");

        let mut config = AppConfig::default();
        config.api.base_url = "http://file-host:9000".to_string();
        config.apply_env_overrides();

        assert_eq!(config.api.base_url, "http://env-host:7000");
        assert_eq!(
            config.export.output_dir,
            Some(PathBuf::from("/tmp/atlas-env-exports"))
        );

        std::env::remove_var("ATLAS_API_URL");
        std::env::remove_var("ATLAS_EXPORT_DIR");
    }
}
