use crate::{DbKind, Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Database connection settings
#[derive(Clone, Deserialize)]
pub struct DbConfig {
    #[serde(rename = "type")]
    pub kind: DbKind,
    pub host: String,
    /// Falls back to the engine's default port
    #[serde(default)]
    pub port: Option<u16>,
    pub name: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
}

impl DbConfig {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.kind.default_port())
    }
}

// Keep the password out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("kind", &self.kind)
            .field("host", &self.host)
            .field("port", &self.port())
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db: DbConfig,
}

impl Config {
    /// Load from a `.toml` file, or JSON for any other extension
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Error reading config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
