//! Facets command - what a catalog can be filtered by

use super::{Context, resolve_catalog};
use crate::MentorqError;
use crate::catalog::Facets;
use crate::cli::CatalogSource;
use crate::output;
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute the facets command
///
/// In quiet mode only category names are printed, one per line.
///
/// # Errors
///
/// Returns `MentorqError` if the catalog cannot be resolved or output fails.
pub fn execute(source: &CatalogSource, ctx: &mut Context<'_>) -> Result<()> {
    let catalog = resolve_catalog(source, ctx.config, ctx.now)?;
    let facets = Facets::collect(&catalog);

    if ctx.quiet {
        for (category, _) in &facets.categories {
            writeln!(ctx.out, "{category}")?;
        }
    } else {
        write!(ctx.out, "{}", output::facets_text(&facets, catalog.len()))?;
    }
    Ok(())
}
