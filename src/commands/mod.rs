//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and a [`Context`]. Results are written to the context's output
//! stream; status messages go through its [`OutputWriter`].

pub mod completions;
pub mod config;
pub mod facets;
pub mod query;
pub mod saved;
pub mod show;
pub mod sorts;

pub use completions::execute as completions;
pub use config::execute as config;
pub use facets::execute as facets;
pub use query::execute as query;
pub use saved::execute as saved;
pub use show::execute as show;
pub use sorts::execute as sorts;

use crate::MentorqError;
use crate::catalog::{self, Catalog, CatalogKind, samples};
use crate::cli::CatalogSource;
use crate::config::MentorqConfig;
use crate::output::OutputWriter;
use crate::saved::SavedQueryManager;
use chrono::{DateTime, Utc};
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Everything a command needs besides its own arguments
pub struct Context<'a> {
    pub config: &'a MentorqConfig,
    pub writer: &'a dyn OutputWriter,
    pub out: &'a mut dyn Write,
    pub quiet: bool,
    /// Reference time for relative dates in catalog files
    pub now: DateTime<Utc>,
}

impl Context<'_> {
    /// Open the saved query store named by the configuration
    ///
    /// # Errors
    ///
    /// Returns `MentorqError::ConfigError` if no store location can be determined.
    pub fn saved_queries(&self) -> Result<SavedQueryManager> {
        Ok(SavedQueryManager::new(self.config.saved_queries_path()?))
    }
}

/// Resolve the catalog selected by the source flags
///
/// Precedence: `--sample`, `--file`, `--catalog`, the configured
/// `default_catalog`, then the mentors sample.
///
/// # Errors
///
/// Returns `MentorqError` if a named catalog is not configured or the catalog
/// file cannot be loaded.
pub fn resolve_catalog(
    source: &CatalogSource,
    config: &MentorqConfig,
    now: DateTime<Utc>,
) -> Result<Catalog> {
    if let Some(kind) = source.sample {
        return Ok(samples::sample(kind.into(), now)?);
    }
    if let Some(path) = &source.file {
        return Ok(catalog::load_catalog(path, now)?);
    }

    let name = source.catalog.as_ref().or(config.default_catalog.as_ref());
    match name {
        Some(name) => {
            let path = config.get_catalog(name).ok_or_else(|| {
                MentorqError::InvalidInput(format!(
                    "Catalog '{name}' not found in configuration"
                ))
            })?;
            Ok(catalog::load_catalog(path, now)?)
        }
        None => Ok(samples::sample(CatalogKind::Mentors, now)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SampleKind;
    use crate::testing::reference_now;

    #[test]
    fn test_falls_back_to_mentor_sample() {
        let catalog =
            resolve_catalog(&CatalogSource::default(), &MentorqConfig::default(), reference_now())
                .unwrap();
        assert_eq!(catalog.schema().kind(), CatalogKind::Mentors);
    }

    #[test]
    fn test_sample_flag_wins() {
        let source = CatalogSource {
            sample: Some(SampleKind::Videos),
            ..CatalogSource::default()
        };
        let catalog = resolve_catalog(&source, &MentorqConfig::default(), reference_now()).unwrap();
        assert_eq!(catalog.schema().kind(), CatalogKind::Videos);
    }

    #[test]
    fn test_unknown_named_catalog() {
        let source = CatalogSource {
            catalog: Some("missing".to_string()),
            ..CatalogSource::default()
        };
        let err = resolve_catalog(&source, &MentorqConfig::default(), reference_now()).unwrap_err();
        assert!(matches!(err, MentorqError::InvalidInput(_)));
    }
}
