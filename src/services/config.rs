use std::env;
use std::fs;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::session::Credentials;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV: &str = "MIS_API_URL";
pub const USERNAME_ENV: &str = "MIS_USERNAME";
pub const PASSWORD_ENV: &str = "MIS_PASSWORD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
}

/// Connection settings for the MIS API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(filepath).map_err(|source| ConfigError::Read {
            path: filepath.to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: filepath.to_string(),
            source,
        })
    }

    /// Config file (or defaults), then `MIS_API_URL`, then the `--base-url` flag.
    pub fn load(filepath: Option<&str>, base_url_flag: Option<String>) -> Result<Self, ConfigError> {
        let file_config = match filepath {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        file_config.with_overrides(env::var(BASE_URL_ENV).ok(), base_url_flag)
    }

    pub fn with_overrides(
        mut self,
        env_base_url: Option<String>,
        flag_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = flag_base_url.or(env_base_url) {
            self.base_url = url;
        }
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url));
        }
        self.base_url = trimmed;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Flags win over `MIS_USERNAME` / `MIS_PASSWORD`; missing values stay empty.
pub fn resolve_credentials(username: Option<String>, password: Option<String>) -> Credentials {
    Credentials::new(
        username.or_else(|| env::var(USERNAME_ENV).ok()).unwrap_or_default(),
        password.or_else(|| env::var(PASSWORD_ENV).ok()).unwrap_or_default(),
    )
}
