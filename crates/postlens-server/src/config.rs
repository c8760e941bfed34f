//! Server configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on a single uploaded file (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Origin of the local frontend dev server, always allowed by CORS.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

/// Configuration errors, reported at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Unsupported config file format. Use .toml, .json, or .yaml")]
    UnsupportedFormat,

    #[error("{name} must be {expected}, got {value:?}")]
    InvalidEnv {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Deployed frontend origin allowed by CORS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,
    /// Additional CORS origins.
    pub extra_origins: Vec<String>,
    /// Directory holding in-flight uploads.
    pub upload_dir: PathBuf,
    /// Largest accepted file, in bytes.
    pub max_upload_bytes: usize,
    /// Deadline for extracting one document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_timeout_secs: Option<u64>,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            client_url: None,
            extra_origins: vec![LOCAL_DEV_ORIGIN.to_string()],
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            extraction_timeout_secs: None,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat),
        }
    }

    /// Load configuration: `POSTLENS_CONFIG` file if set, then environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("POSTLENS_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Load configuration from environment variables only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("POSTLENS_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_env("PORT", "a valid port number", port)?;
        }
        if let Some(url) = lookup("CLIENT_URL").filter(|u| !u.trim().is_empty()) {
            self.client_url = Some(url);
        }
        if let Some(dir) = lookup("POSTLENS_UPLOAD_DIR") {
            self.upload_dir = PathBuf::from(dir);
        }
        if let Some(max) = lookup("POSTLENS_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = parse_env("POSTLENS_MAX_UPLOAD_BYTES", "a byte count", max)?;
        }
        if let Some(secs) = lookup("POSTLENS_EXTRACTION_TIMEOUT_SECS") {
            self.extraction_timeout_secs = Some(parse_env(
                "POSTLENS_EXTRACTION_TIMEOUT_SECS",
                "a number of seconds",
                secs,
            )?);
        }
        if let Some(flag) = lookup("POSTLENS_LOG_JSON") {
            self.log_json = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(self)
    }

    /// Origins allowed to call the API from a browser.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self.client_url.iter().cloned().collect();
        for origin in &self.extra_origins {
            if !origins.contains(origin) {
                origins.push(origin.clone());
            }
        }
        origins
    }

    pub fn extraction_timeout(&self) -> Option<Duration> {
        self.extraction_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T: FromStr>(
    name: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            expected,
            value,
        })
}
