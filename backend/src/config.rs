//! Application configuration file support.
//!
//! Configuration is read from a TOML file and then overridden by environment
//! variables. Every field has a default, so an empty file (or no file at all)
//! yields a usable local setup.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! body_limit_bytes = 1048576
//!
//! [repository]
//! type = "local"
//! ```
//!
//! # Environment Variables
//!
//! - `SUBWAY_CONFIG`: path of the config file to load
//! - `HOST`, `PORT`: override `[server]`
//! - `REPOSITORY_TYPE`: overrides `[repository] type`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::db::factory::RepositoryType;
use crate::db::repository::RepositoryError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Repository type settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

impl RepositorySettings {
    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repo_type)
    }
}

impl ServerSettings {
    /// `host:port` string suitable for `SocketAddr` parsing.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Search for `subway.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when none of them exists.
    pub fn from_default_location() -> Result<Option<Self>, RepositoryError> {
        let search_paths = [
            PathBuf::from("subway.toml"),
            PathBuf::from("backend/subway.toml"),
            PathBuf::from("../subway.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration.
    ///
    /// Order: explicit `path`, then `SUBWAY_CONFIG`, then the default search
    /// locations, then built-in defaults. Environment overrides are applied
    /// last.
    pub fn load(path: Option<&Path>) -> Result<Self, RepositoryError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var("SUBWAY_CONFIG") {
                Ok(env_path) => Self::from_file(env_path)?,
                Err(_) => Self::from_default_location()?.unwrap_or_default(),
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `REPOSITORY_TYPE` on top of the file values.
    pub fn apply_env_overrides(&mut self) -> Result<(), RepositoryError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                RepositoryError::configuration(format!(
                    "PORT must be a valid port number, got {}",
                    port
                ))
            })?;
        }
        if let Ok(repo_type) = std::env::var("REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        Ok(())
    }
}
