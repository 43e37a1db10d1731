//! Run configuration.
//!
//! The CLI loads a JSON file describing the outgoing networks to audit and
//! the checkers to run against them:
//!
//! ```json
//! {
//!   "ip_networks": ["198.51.100.0/27", "2001:db8::/128"],
//!   "checkers": {
//!     "snds": { "key": "..." },
//!     "dns": { "hosts": ["dnsbl.example.com"] }
//!   }
//! }
//! ```
//!
//! Both checker sections are optional; leaving one out disables that
//! source for the run.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::net::NetworkSpec;
use crate::snds::DEFAULT_FEED_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub ip_networks: Vec<NetworkSpec>,
    #[serde(default)]
    pub checkers: CheckersConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckersConfig {
    pub snds: Option<SndsConfig>,
    pub dns: Option<DnsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SndsConfig {
    /// SNDS access key (Automated Data Access key of the registered user).
    pub key: String,
    /// Feed endpoint; defaults to the production SNDS endpoint.
    #[serde(default = "default_feed_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsConfig {
    /// DNSBL zones to query, in the order they should be checked.
    pub hosts: Vec<String>,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ip_networks.is_empty() {
            return Err(ConfigError::Invalid(
                "ip_networks must not be empty".to_string(),
            ));
        }
        if let Some(snds) = &self.checkers.snds {
            if snds.key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "checkers.snds.key must not be empty".to_string(),
                ));
            }
        }
        if let Some(dns) = &self.checkers.dns {
            if dns.hosts.is_empty() {
                return Err(ConfigError::Invalid(
                    "checkers.dns.hosts must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
