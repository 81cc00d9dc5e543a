//! Error types for catalog construction and loading
//!
//! These errors are raised at the catalog-supplier boundary: while adapting
//! domain records into items, validating a catalog, or reading one from disk.

use std::io;
use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two items share the same id
    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    /// A declared numeric domain is empty or not finite
    #[error("Invalid domain for '{attribute}': [{min}, {max}]")]
    InvalidDomain {
        attribute: String,
        min: f64,
        max: f64,
    },

    /// An item carries a NaN or infinite value for a numeric attribute
    #[error("Item '{id}' has a non-finite value for '{attribute}'")]
    NonFiniteValue { id: String, attribute: String },

    /// An item value lies outside its attribute's declared domain
    #[error("Item '{id}' has {attribute} = {value}, outside the declared domain")]
    OutOfDomain {
        id: String,
        attribute: String,
        value: f64,
    },

    /// A date string could not be normalized to a point in time
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    /// A clock duration string could not be parsed
    #[error("Invalid duration '{0}'")]
    InvalidDuration(String),

    /// Unknown catalog kind in a catalog document
    #[error("Unknown catalog kind '{0}' (expected 'mentors' or 'videos')")]
    UnknownKind(String),

    /// Catalog file extension is not supported
    #[error("Unsupported catalog format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
