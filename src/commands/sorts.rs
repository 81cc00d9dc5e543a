//! Sorts command - list sort options

use super::{Context, resolve_catalog};
use crate::MentorqError;
use crate::cli::CatalogSource;
use crate::output;
use crate::query::ComparatorTable;
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute the sorts command
///
/// Only the options the catalog's schema can satisfy are listed; the default
/// (configured `default_sort` or the catalog's own) is marked.
///
/// # Errors
///
/// Returns `MentorqError` if the catalog cannot be resolved or output fails.
pub fn execute(source: &CatalogSource, ctx: &mut Context<'_>) -> Result<()> {
    let catalog = resolve_catalog(source, ctx.config, ctx.now)?;
    let schema = catalog.schema();

    let default_key = match &ctx.config.default_sort {
        Some(name) => ComparatorTable::lookup(name)?.key,
        None => ComparatorTable::lookup(schema.default_sort())?.key,
    };

    for comparator in ComparatorTable::supported(schema) {
        if ctx.quiet {
            writeln!(ctx.out, "{}", comparator.key)?;
        } else {
            writeln!(
                ctx.out,
                "{}",
                output::comparator_line(comparator, comparator.key == default_key)
            )?;
        }
    }
    Ok(())
}
