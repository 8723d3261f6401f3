//! HTTP Server Configuration
//!
//! Host, port, CORS and document store settings.
//!
//! Sources, lowest precedence first: defaults, JSON config file,
//! environment, command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// MongoDB connection string; without one the store is unavailable
    #[serde(default)]
    pub database_url: Option<String>,

    /// Database holding the collections (default: "real_estate")
    #[serde(default = "default_database_name")]
    pub database_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_name() -> String {
    "real_estate".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: None,
            database_name: default_database_name(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load a JSON config file; absent keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay values from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`. Empty values are ignored.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.host = host;
        }
        if let Some(port) = get("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
        }
        if let Some(origins) = get("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(url) = get("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(name) = get("DATABASE_NAME") {
            self.database_name = name;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Copy safe to print: the database URL may embed credentials.
    pub fn redacted(&self) -> Self {
        Self {
            database_url: self.database_url.as_ref().map(|_| "<set>".to_string()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_origins.is_empty());
        assert!(config.database_url.is_none());
        assert_eq!(config.database_name, "real_estate");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .apply_env_from(env(&[
                ("PORT", "9000"),
                ("DATABASE_URL", "mongodb://localhost:27017"),
                ("DATABASE_NAME", "listings"),
                ("CORS_ORIGINS", "http://localhost:5173, https://estate.example.com,"),
            ]))
            .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(config.database_name, "listings");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://estate.example.com"]
        );
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let config = ServerConfig::default()
            .apply_env_from(env(&[("DATABASE_URL", ""), ("PORT", "  ")]))
            .unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = ServerConfig::default()
            .apply_env_from(env(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 7000, "database_name": "demo"}}"#).unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.database_name, "demo");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_malformed_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port = 7000").unwrap();
        assert!(matches!(
            ServerConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_redacted_hides_database_url() {
        let config = ServerConfig {
            database_url: Some("mongodb://user:secret@db:27017".into()),
            ..Default::default()
        };
        let redacted = config.redacted();
        assert_eq!(redacted.database_url.as_deref(), Some("<set>"));
        assert_eq!(redacted.port, config.port);
    }
}
