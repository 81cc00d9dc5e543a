//! Mentorq - catalog search, filter and sort for a mentorship platform
//!
//! This library evaluates a query (free text, category tab, selected tags,
//! numeric ranges and a sort option) against a catalog of mentors or video
//! lessons, producing an ordered view that is always a subset of the catalog.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod query;
pub mod saved;
pub mod selection;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MentorqError {
    /// Catalog loading or validation error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Query configuration error
    #[error("Query error: {0}")]
    QueryError(#[from] query::QueryError),
    /// Saved query store error
    #[error("Saved query error: {0}")]
    SavedQueryError(#[from] saved::SavedQueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// CSV export error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// JSON export error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
