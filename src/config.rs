// src/config.rs
use crate::banner::DisplayParameters;
use crate::errors::{BannerError, Result};
use serde::Deserialize;
use std::env::VarError;
use std::path::Path;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

/// Banner configuration as read from a TOML file.
/// Every key is optional; missing keys take the server defaults.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Port of the MCP server, shown only when set
    #[serde(default)]
    pub mcp_port: Option<u16>,
}

/// High-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub display: DisplayParameters,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `COEXIST_BANNER_CONFIG` points at a TOML file that replaces the
    /// `COEXIST_HOST` / `COEXIST_PORT` / `COEXIST_MCP_PORT` lookup.
    pub fn from_env() -> Result<Self> {
        match config_path(std::env::var("COEXIST_BANNER_CONFIG"))? {
            Some(path) => Self::from_file(path),
            None => Self::from_lookup(|key| std::env::var(key).ok()),
        }
    }

    /// Load configuration from any key/value source shaped like the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("COEXIST_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("COEXIST_PORT") {
            Some(raw) => parse_port("COEXIST_PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let mcp_port = lookup("COEXIST_MCP_PORT")
            .map(|raw| parse_port("COEXIST_MCP_PORT", &raw))
            .transpose()?;

        Ok(AppConfig {
            display: DisplayParameters::new(host, port, mcp_port),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        Ok(file.into())
    }
}

impl From<FileConfig> for AppConfig {
    fn from(file: FileConfig) -> Self {
        AppConfig {
            display: DisplayParameters::new(
                file.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                file.port.unwrap_or(DEFAULT_PORT),
                file.mcp_port,
            ),
        }
    }
}

/// A set but unreadable config path is an error, not a fallback to the environment.
fn config_path(var: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(path) => Ok(Some(path)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(BannerError::Config(format!(
            "COEXIST_BANNER_CONFIG is not valid UTF-8: {:?}",
            raw
        ))),
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        BannerError::Config(format!("{} must be a port number, got '{}': {}", key, raw, e))
    })
}
