//! Configuration System
//!
//! Handles loading configuration from TOML files and environment variables.
//! The resulting [`AppConfig`] is built once at start-up and shared
//! read-only afterwards: behind an `Arc` in the CLI, through context in the
//! dashboard.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Application name substituted into every page title
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Base URL for static assets used by the layout chrome
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_app_name() -> String {
    "Estate CRM".to_string()
}

fn default_assets_dir() -> String {
    "/assets".to_string()
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    #[serde(default = "default_session_path")]
    pub session_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_session_path() -> String {
    "/sanctum/csrf-cookie".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            session_path: default_session_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolute URL of the session (CSRF cookie) endpoint
    pub fn session_url(&self) -> String {
        format!("{}{}", self.base(), self.session_path)
    }

    /// Absolute URL of a collection, e.g. `.../api/clients`
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}{}/{}", self.base(), self.api_prefix, collection)
    }

    /// Absolute URL of a single record in a collection
    pub fn entity_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(collection),
            urlencoding::encode(id)
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            assets_dir: default_assets_dir(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("estate-admin").join("config.toml")),
            Some(PathBuf::from("/etc/estate-admin/config.toml")),
            Some(PathBuf::from("./estate-admin.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("ESTATE_APP_NAME") {
            self.app_name = name;
        }
        if let Some(dir) = lookup("ESTATE_ASSETS_DIR") {
            self.assets_dir = dir;
        }
        if let Some(url) = lookup("ESTATE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(level) = lookup("ESTATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ESTATE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// URL of a file under the assets directory
    pub fn asset_url(&self, file: &str) -> String {
        format!(
            "{}/{}",
            self.assets_dir.trim_end_matches('/'),
            file.trim_start_matches('/')
        )
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config from {origin}: {error}")]
    Parse { origin: String, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Estate Admin Configuration
#
# Environment variables override these settings:
# - ESTATE_APP_NAME
# - ESTATE_ASSETS_DIR
# - ESTATE_API_URL
# - ESTATE_LOG_LEVEL
# - ESTATE_LOG_FORMAT

# Shown at the end of every page title
app_name = "Estate CRM"

# Base URL for logos, avatars and other layout assets
assets_dir = "/assets"

[api]
# Backend origin
base_url = "http://localhost:8000"

# Prefix for REST collections
api_prefix = "/api"

# Endpoint that sets the session and XSRF-TOKEN cookies
session_path = "/sanctum/csrf-cookie"

# Request timeout in seconds (CLI only)
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "Estate CRM");
        assert_eq!(config.assets_dir, "/assets");
        assert_eq!(config.api.session_path, "/sanctum/csrf-cookie");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = AppConfig::from_toml_str(&generate_default_config(), "template").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml_str("app_name = \"Homes\"\n[api]\nbase_url = \"https://crm.example\"\n", "inline").unwrap();
        assert_eq!(config.app_name, "Homes");
        assert_eq!(config.api.base_url, "https://crm.example");
        assert_eq!(config.api.api_prefix, "/api");
        assert_eq!(config.assets_dir, "/assets");
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = AppConfig::from_toml_str("app_name = ", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == "broken.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_name = \"From File\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.app_name, "From File");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ESTATE_APP_NAME", "Skyline"),
            ("ESTATE_API_URL", "https://api.skyline.test"),
            ("ESTATE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.app_name, "Skyline");
        assert_eq!(config.api.base_url, "https://api.skyline.test");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_api_urls() {
        let api = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.session_url(), "http://localhost:8000/sanctum/csrf-cookie");
        assert_eq!(api.collection_url("clients"), "http://localhost:8000/api/clients");
        assert_eq!(
            api.entity_url("clients", "c 42"),
            "http://localhost:8000/api/clients/c%2042"
        );
    }

    #[test]
    fn test_asset_url() {
        let config = AppConfig {
            assets_dir: "/static/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.asset_url("/logo.svg"), "/static/logo.svg");
    }
}
