//! Query command - filter, sort and page a catalog

use super::{Context, resolve_catalog};
use crate::MentorqError;
use crate::cli::{OutputFormat, QueryArgs};
use crate::output::{self, PageWindow};
use crate::query::{CategoryFilter, QueryState, TagMode, evaluate, parse_range_filter};
use std::io::Write;
use std::str::FromStr;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute the query command
///
/// # Errors
///
/// Returns `MentorqError` if the catalog cannot be resolved, a saved query
/// cannot be loaded or stored, the query is misconfigured (unknown sort,
/// undeclared range attribute, malformed range), or output fails.
pub fn execute(args: &QueryArgs, ctx: &mut Context<'_>) -> Result<()> {
    let catalog = resolve_catalog(&args.source, ctx.config, ctx.now)?;

    let base = match &args.load {
        Some(name) => {
            let manager = ctx.saved_queries()?;
            let saved = manager.get(name)?;
            manager.record_use(name)?;
            if !ctx.quiet {
                ctx.writer.info(&format!("Loaded saved query '{name}'"));
            }
            saved.state
        }
        None => {
            let mut state = QueryState::for_schema(catalog.schema());
            if let Some(sort) = &ctx.config.default_sort {
                state.set_sort_key(sort.as_str());
            }
            state
        }
    };

    let state = apply_args(base, args)?;
    let view = evaluate(&catalog, &state)?;

    if let Some(name) = &args.save {
        let manager = ctx.saved_queries()?;
        let description = args.description.clone().unwrap_or_default();
        manager.create(name, description, state.clone())?;
        ctx.writer.success(&format!("Saved query '{name}'"));
    }

    let window = match args.limit {
        Some(limit) => {
            let shown = limit.min(view.len());
            PageWindow {
                shown,
                remaining: view.len() - shown,
            }
        }
        None => PageWindow::new(view.len(), args.page, ctx.config.page_size),
    };
    let visible = &view[..window.shown];

    match args.format {
        OutputFormat::Json => output::write_json(ctx.out, visible)?,
        OutputFormat::Csv => output::write_csv(ctx.out, visible)?,
        OutputFormat::Text => {
            if view.is_empty() {
                if !ctx.quiet {
                    ctx.writer.info("No results found.");
                }
                return Ok(());
            }
            for item in visible {
                writeln!(ctx.out, "{}", output::item_line(item, ctx.quiet))?;
            }
            if window.remaining > 0 && !ctx.quiet {
                let hint = if args.limit.is_some() {
                    String::new()
                } else {
                    format!(" (--page {})", args.page.max(1) + 1)
                };
                ctx.writer
                    .info(&format!("{} more to load{hint}", window.remaining));
            }
        }
    }

    Ok(())
}

/// Overlay command-line criteria onto a starting state
///
/// Text and category replace the base values when given, tags and ranges are
/// added, `--all-tags` switches to AND logic and `--sort` replaces the sort key.
///
/// # Errors
///
/// Returns `MentorqError::QueryError` for a malformed range expression.
pub fn apply_args(mut state: QueryState, args: &QueryArgs) -> Result<QueryState> {
    let mut overrides = QueryState::builder().tags(args.tags.iter().cloned());
    if let Some(text) = &args.text {
        overrides = overrides.search_text(text.as_str());
    }
    if let Some(category) = &args.category {
        let Ok(filter) = CategoryFilter::from_str(category);
        overrides = overrides.category(filter);
    }
    for expr in &args.ranges {
        let (attribute, range) = parse_range_filter(expr)?;
        overrides = overrides.range(attribute, range.min, range.max);
    }
    state.merge(&overrides.build());

    // "-c all" switches back to the all tab even over a loaded category
    if args
        .category
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case("all"))
    {
        state.set_category(CategoryFilter::All);
    }
    if args.all_tags {
        state.set_tag_mode(TagMode::All);
    }
    if let Some(sort) = &args.sort {
        state.set_sort_key(sort.as_str());
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CatalogSource, SampleKind};
    use crate::config::MentorqConfig;
    use crate::output::{MemoryWriter, MessageLevel};
    use crate::query::QueryError;
    use crate::testing::reference_now;
    use tempfile::TempDir;

    fn videos_args() -> QueryArgs {
        QueryArgs {
            page: 1,
            source: CatalogSource {
                sample: Some(SampleKind::Videos),
                ..CatalogSource::default()
            },
            ..QueryArgs::default()
        }
    }

    fn run(args: &QueryArgs, config: &MentorqConfig, writer: &MemoryWriter) -> Result<String> {
        let mut buf = Vec::new();
        let mut ctx = Context {
            config,
            writer,
            out: &mut buf,
            quiet: true,
            now: reference_now(),
        };
        execute(args, &mut ctx)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_apply_args_overrides_and_adds() {
        let base = QueryState::builder()
            .search_text("python")
            .tag("Beginner")
            .category(CategoryFilter::only("Programming"))
            .sort_key("newest")
            .build();
        let args = QueryArgs {
            tags: vec!["Data".to_string()],
            all_tags: true,
            ranges: vec!["rating=4.5..".to_string()],
            sort: Some("mostPopular".to_string()),
            ..QueryArgs::default()
        };

        let state = apply_args(base, &args).unwrap();
        assert_eq!(state.search_text(), "python");
        assert_eq!(state.selected_tags().len(), 2);
        assert_eq!(state.tag_mode(), TagMode::All);
        assert_eq!(state.sort_key(), "mostPopular");
        assert!(state.ranges().contains_key("rating"));
        assert_eq!(state.category(), &CategoryFilter::only("Programming"));
    }

    #[test]
    fn test_apply_args_category_all_resets() {
        let base = QueryState::builder()
            .category(CategoryFilter::only("Finance"))
            .build();
        let args = QueryArgs {
            category: Some("ALL".to_string()),
            ..QueryArgs::default()
        };
        let state = apply_args(base, &args).unwrap();
        assert!(state.category().is_all());
    }

    #[test]
    fn test_apply_args_bad_range() {
        let args = QueryArgs {
            ranges: vec!["rating".to_string()],
            ..QueryArgs::default()
        };
        let err = apply_args(QueryState::new(), &args).unwrap_err();
        assert!(matches!(
            err,
            MentorqError::QueryError(QueryError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_quiet_output_is_ids_paged() {
        let config = MentorqConfig {
            page_size: 2,
            ..MentorqConfig::default()
        };
        let writer = MemoryWriter::new();
        let args = QueryArgs {
            sort: Some("mostPopular".to_string()),
            ..videos_args()
        };

        let out = run(&args, &config, &writer).unwrap();
        assert_eq!(out.lines().count(), 2);

        let args = QueryArgs { page: 3, ..args };
        let out = run(&args, &config, &writer).unwrap();
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_json_output_respects_limit() {
        let config = MentorqConfig::default();
        let writer = MemoryWriter::new();
        let args = QueryArgs {
            limit: Some(1),
            format: OutputFormat::Json,
            ..videos_args()
        };

        let out = run(&args, &config, &writer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_sort_is_error() {
        let config = MentorqConfig::default();
        let writer = MemoryWriter::new();
        let args = QueryArgs {
            sort: Some("cheapest".to_string()),
            ..videos_args()
        };
        let err = run(&args, &config, &writer).unwrap_err();
        assert!(matches!(
            err,
            MentorqError::QueryError(QueryError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let config = MentorqConfig {
            saved_queries_path: Some(dir.path().join("queries.toml")),
            ..MentorqConfig::default()
        };
        let writer = MemoryWriter::new();

        let args = QueryArgs {
            text: Some("python".to_string()),
            sort: Some("highestRated".to_string()),
            save: Some("python-best".to_string()),
            ..videos_args()
        };
        let first = run(&args, &config, &writer).unwrap();
        assert!(writer.has(MessageLevel::Success));

        let args = QueryArgs {
            load: Some("python-best".to_string()),
            ..videos_args()
        };
        let second = run(&args, &config, &writer).unwrap();
        assert_eq!(first, second);
    }
}
