//! Error types for Scholar

use thiserror::Error;

/// Error thrown when a configuration file has an extension we cannot parse
#[derive(Debug, Error)]
#[error("Unsupported config format '{extension}'. Supported formats: json, yaml, yml")]
pub struct UnsupportedFormatError {
    pub extension: String,
}

/// General Scholar error type
#[derive(Debug, Error)]
pub enum ScholarError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ScholarError>;
