//! VMS connection configuration
//!
//! Loaded from the process environment in production (`VMS_HOST`,
//! `API_KEY`), or built explicitly so tests never touch global state.

use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the VMS API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VmsConfig {
    /// Base URL of the VMS (`VMS_HOST`)
    #[serde(default)]
    pub vms_host: Option<String>,

    /// API key sent as `X-Auth-Token` (`API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Fallback API key (`VMS_API_KEY`), used when `API_KEY` is unset
    #[serde(default)]
    pub vms_api_key: Option<String>,

    /// Request timeout in seconds (`REQUEST_TIMEOUT_SECS`); the client
    /// default applies when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Exact request timeout; takes precedence over `request_timeout_secs`
    #[serde(skip)]
    pub request_timeout: Option<Duration>,
}

impl VmsConfig {
    /// Create a config with an explicit host and API key
    pub fn new(vms_host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            vms_host: Some(vms_host.into()),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(|e| SyncError::Config(e.to_string()))
    }

    /// Load from an explicit set of `(NAME, value)` variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(|e| SyncError::Config(e.to_string()))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Base URL without a trailing slash
    ///
    /// Called before every outbound request; a missing or blank host is a
    /// [`SyncError::Config`].
    pub fn host(&self) -> Result<&str> {
        match self.vms_host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => Ok(host.trim_end_matches('/')),
            _ => Err(SyncError::Config("VMS_HOST is missing".to_string())),
        }
    }

    /// API key, preferring `API_KEY` over `VMS_API_KEY`
    pub fn api_key(&self) -> Result<&str> {
        [self.api_key.as_deref(), self.vms_api_key.as_deref()]
            .into_iter()
            .flatten()
            .find(|k| !k.is_empty())
            .ok_or_else(|| SyncError::Config("API_KEY is missing".to_string()))
    }

    /// Effective request timeout
    ///
    /// A zero timeout would fail every request, so it is a
    /// [`SyncError::Config`].
    pub fn timeout(&self) -> Result<Option<Duration>> {
        let timeout = self
            .request_timeout
            .or_else(|| self.request_timeout_secs.map(Duration::from_secs));
        match timeout {
            Some(t) if t.is_zero() => Err(SyncError::Config(
                "request timeout must be greater than zero".to_string(),
            )),
            other => Ok(other),
        }
    }
}
