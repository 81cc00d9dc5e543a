//! Show command - open one item for detail viewing

use super::{Context, resolve_catalog};
use crate::MentorqError;
use crate::cli::CatalogSource;
use crate::output;
use crate::query::{QueryState, evaluate};
use crate::selection::SelectionState;
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute the show command
///
/// With `after`, a text query runs once the item is open. The selection is
/// resolved through the full catalog again afterwards, so it stays open even
/// when the query filters the item out of the view.
///
/// # Errors
///
/// Returns `MentorqError` if the catalog cannot be resolved, no item has the
/// id, the follow-up query is misconfigured, or output fails.
pub fn execute(
    id: &str,
    after: Option<&str>,
    source: &CatalogSource,
    ctx: &mut Context<'_>,
) -> Result<()> {
    let catalog = resolve_catalog(source, ctx.config, ctx.now)?;

    let mut selection = SelectionState::new();
    selection.open(id);
    let item = selection
        .resolve(&catalog)
        .ok_or_else(|| MentorqError::InvalidInput(format!("No item with id '{id}'")))?;
    write!(ctx.out, "{}", output::item_detail(item))?;

    let Some(text) = after else {
        return Ok(());
    };

    let mut state = QueryState::for_schema(catalog.schema());
    state.set_search_text(text);
    let view = evaluate(&catalog, &state)?;

    if !ctx.quiet {
        ctx.writer
            .info(&format!("{} result(s) for \"{text}\"", view.len()));
    }
    for item in &view {
        writeln!(ctx.out, "{}", output::item_line(item, ctx.quiet))?;
    }

    if let Some(open) = selection.resolve(&catalog)
        && !ctx.quiet
    {
        let visibility = if view.iter().any(|v| v.id() == open.id()) {
            "in view"
        } else {
            "filtered out of view"
        };
        ctx.writer
            .info(&format!("Still open: {} ({visibility})", open.title()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SampleKind;
    use crate::config::MentorqConfig;
    use crate::output::{MemoryWriter, MessageLevel};
    use crate::testing::reference_now;

    fn run(id: &str, after: Option<&str>) -> (Result<()>, Vec<(MessageLevel, String)>) {
        let config = MentorqConfig::default();
        let writer = MemoryWriter::new();
        let mut buf = Vec::new();
        let mut ctx = Context {
            config: &config,
            writer: &writer,
            out: &mut buf,
            quiet: false,
            now: reference_now(),
        };
        let source = CatalogSource {
            sample: Some(SampleKind::Videos),
            ..CatalogSource::default()
        };
        let result = execute(id, after, &source, &mut ctx);
        (result, writer.messages())
    }

    #[test]
    fn test_selection_survives_narrowing_query() {
        let (result, messages) = run("1", Some("zzz-no-match"));
        result.unwrap();
        assert!(
            messages
                .iter()
                .any(|(_, m)| m.starts_with("Still open") && m.contains("filtered out"))
        );
    }

    #[test]
    fn test_unknown_id() {
        let (result, _) = run("nope", None);
        assert!(matches!(result, Err(MentorqError::InvalidInput(_))));
    }
}
