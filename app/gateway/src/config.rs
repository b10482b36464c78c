//! Gateway configuration loaded from TOML or the environment.

use anyhow::{Context, Result};
use router::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Top-level gateway configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider slots. Slots without a credential are ignored.
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

/// Server configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    /// Parse a TOML string into a `GatewayConfig`, expanding `${ENV_VAR}`
    /// references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = crate::utils::expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Configuration read through `lookup`: `PORT` for the port and one
    /// provider slot per vendor credential variable.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut server = ServerConfig::default();
        if let Some(port) = lookup("PORT").filter(|port| !port.trim().is_empty()) {
            server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT '{port}'"))?;
        }
        Ok(Self {
            server,
            providers: ProviderConfig::from_vars(lookup),
        })
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
