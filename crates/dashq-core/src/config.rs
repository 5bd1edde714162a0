//! Configuration file handling for dashq
//!
//! Config is stored at `~/.config/dashq/config.yaml` (or the platform
//! equivalent via `dirs::config_dir()`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config filename within the dashq config directory
const FILENAME: &str = "config.yaml";

/// Application directory name
const APP_DIR: &str = "dashq";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config not found — run `dashq init` to get started")]
    NotFound,

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Generic AWS credential settings, resolved into a service client by
/// `dashq-client`.
///
/// Only `region` is required. When no static keys and no profile are set,
/// resolution falls through to the default provider chain (environment,
/// shared config files, instance metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsCredentials {
    /// AWS region the connection is scoped to
    pub region: String,

    /// Static access key id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// Static secret access key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,

    /// Session token accompanying temporary static keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Named profile from the shared AWS config files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Endpoint override, e.g. a LocalStack endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Role to assume via STS before talking to the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_arn: Option<String>,

    /// Session name for the assumed role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_session_name: Option<String>,

    /// Source identity recorded for the assumed role session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_source_identity: Option<String>,
}

impl AwsCredentials {
    /// Credentials for a region with everything else left to the default
    /// provider chain.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            profile: None,
            endpoint_url: None,
            assume_role_arn: None,
            assume_role_session_name: None,
            assume_role_source_identity: None,
        }
    }
}

/// QuickSight connection details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Account whose dashboards the connection is scoped to
    pub aws_account_id: String,

    /// Credential settings handed to the client factory
    pub credentials: AwsCredentials,
}

/// Top-level dashq configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// QuickSight connection details
    pub connection: ConnectionConfig,
}

impl Config {
    /// Return the path to the config file: `<config_dir>/dashq/config.yaml`.
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from the standard location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound
            } else {
                ConfigError::Read(e)
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Save the config to the standard location, creating the directory if needed.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
