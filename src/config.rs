//! Connection settings: flags, environment, optional YAML file, prompts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::prompt::{ask_non_empty, Prompt};
use crate::validation::{base_url, validate_host, validate_port};

/// Secure string type that zeroizes memory on drop
/// Used for the appliance password
#[derive(Clone, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Configuration file layout
///
/// ```yaml
/// connection:
///   host: 192.168.1.5
///   port: 80
///   username: admin
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub connection: ConnectionConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }
}

/// Partially known connection parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<SecureString>,
}

impl ConnectionConfig {
    /// Fill fields missing from `self` with those of `fallback`
    pub fn or(self, fallback: ConnectionConfig) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.or(fallback.host),
            port: self.port.or(fallback.port),
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
        }
    }

    /// Validate known fields and ask for the missing ones
    pub fn complete(self, prompt: &dyn Prompt) -> Result<Connection> {
        let host = match self.host {
            Some(host) => validate_host(&host)?,
            None => validate_host(&prompt.ask("Host (e.g. 192.168.1.5)")?)?,
        };

        let port = match self.port {
            Some(0) => anyhow::bail!("Port must be between 1 and 65535"),
            Some(port) => port,
            None => validate_port(&prompt.ask("Port (e.g. 80)")?)?,
        };

        let username = match self.username {
            Some(username) if !username.trim().is_empty() => username,
            _ => ask_non_empty(prompt, "Username")?,
        };

        let password = match self.password {
            Some(password) if !password.is_empty() => password,
            _ => SecureString::new(prompt.ask_secret("Password")?),
        };

        Ok(Connection {
            host,
            port,
            username,
            password,
        })
    }
}

/// Fully resolved connection parameters
#[derive(Debug, Clone)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecureString,
}

impl Connection {
    pub fn base_url(&self) -> String {
        base_url(&self.host, self.port)
    }
}
