//! Error types for key parsing and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A key token that does not map to any calculator button.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
