// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BannerError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime metadata unavailable: {0}")]
    Metadata(String),
}

pub type Result<T> = std::result::Result<T, BannerError>;
