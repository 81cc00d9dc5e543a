//! Catalog file loading
//!
//! A catalog document names its kind and lists its entries:
//!
//! ```toml
//! kind = "videos"
//!
//! [[entries]]
//! id = "1"
//! title = "Getting Started with JavaScript Fundamentals"
//! mentorName = "Sarah Johnson"
//! duration = "45:30"
//! date = "2 weeks ago"
//! category = "Programming"
//! rating = 4.8
//! views = 1240
//! tags = ["JavaScript", "Beginner"]
//! ```
//!
//! The same shape is accepted as JSON.

use super::adapters::{Mentor, Video, mentor_catalog, video_catalog};
use super::error::CatalogError;
use super::types::Catalog;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk catalog document
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogDocument {
    Mentors {
        #[serde(default)]
        entries: Vec<Mentor>,
    },
    Videos {
        #[serde(default)]
        entries: Vec<Video>,
    },
}

impl CatalogDocument {
    /// Adapt the document's records into a catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any record fails to adapt or ids collide.
    pub fn into_catalog(self, now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
        match self {
            Self::Mentors { entries } => mentor_catalog(&entries, now),
            Self::Videos { entries } => video_catalog(&entries, now),
        }
    }
}

/// Parse a catalog document from a string in the given format
///
/// # Errors
///
/// Returns `CatalogError::UnsupportedFormat` for unknown formats, or the
/// parse/adaptation error otherwise.
pub fn parse_catalog(
    contents: &str,
    format: &str,
    now: DateTime<Utc>,
) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument = match format {
        "json" => serde_json::from_str(contents)?,
        "toml" => toml::from_str(contents)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };
    document.into_catalog(now)
}

/// Load a catalog from a `.json` or `.toml` file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, has an unsupported
/// extension, or does not describe a valid catalog.
pub fn load_catalog(path: &Path, now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if format != "json" && format != "toml" {
        return Err(CatalogError::UnsupportedFormat(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents, &format, now)
}
