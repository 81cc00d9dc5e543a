//! Error types for saved query operations

use std::io;
use thiserror::Error;

/// Errors that can occur while managing saved queries
#[derive(Debug, Error)]
pub enum SavedQueryError {
    /// Saved query not found
    #[error("Saved query '{0}' not found")]
    NotFound(String),

    /// Saved query already exists
    #[error("Saved query '{0}' already exists")]
    AlreadyExists(String),

    /// Invalid saved query name
    #[error("Invalid saved query name '{0}': {1}")]
    InvalidName(String, String),

    /// The stored query state cannot be evaluated
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] crate::query::QueryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<toml::de::Error> for SavedQueryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for SavedQueryError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
