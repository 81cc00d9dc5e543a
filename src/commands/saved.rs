//! Saved query management command
//!
//! - List saved queries, most used first
//! - Show a query's criteria
//! - Delete a query
//! - Rename a query
//!
//! Queries are created with `mentorq query --save NAME`.

use super::Context;
use crate::MentorqError;
use crate::cli::SavedCommands;
use crate::query::TagMode;
use crate::saved::SavedQuery;
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute a saved query subcommand
///
/// # Errors
///
/// Returns `MentorqError` if the store cannot be accessed, the named query
/// does not exist, or a new name is invalid or taken.
pub fn execute(command: &SavedCommands, ctx: &mut Context<'_>) -> Result<()> {
    let manager = ctx.saved_queries()?;

    match command {
        SavedCommands::List => {
            let queries = manager.list()?;
            if queries.is_empty() {
                if !ctx.quiet {
                    ctx.writer.info("No saved queries.");
                }
                return Ok(());
            }
            for query in &queries {
                if ctx.quiet {
                    writeln!(ctx.out, "{}", query.name)?;
                } else {
                    writeln!(ctx.out, "{}", summary_line(query))?;
                }
            }
        }
        SavedCommands::Show { name } => {
            let query = manager.get(name)?;
            write!(ctx.out, "{}", details(&query))?;
        }
        SavedCommands::Delete { name } => {
            manager.delete(name)?;
            ctx.writer.success(&format!("Deleted saved query '{name}'"));
        }
        SavedCommands::Rename { old_name, new_name } => {
            manager.rename(old_name, new_name.clone())?;
            ctx.writer
                .success(&format!("Renamed '{old_name}' to '{new_name}'"));
        }
    }
    Ok(())
}

fn summary_line(query: &SavedQuery) -> String {
    let mut line = format!("  {} (used {}x)", query.name, query.use_count);
    if !query.description.is_empty() {
        line.push_str(&format!(" - {}", query.description));
    }
    line
}

fn details(query: &SavedQuery) -> String {
    let state = &query.state;
    let mut out = format!("{}\n", query.name);
    if !query.description.is_empty() {
        out.push_str(&format!("  description: {}\n", query.description));
    }
    if !state.search_text().is_empty() {
        out.push_str(&format!("  text:        {}\n", state.search_text()));
    }
    out.push_str(&format!("  category:    {}\n", state.category()));
    if !state.selected_tags().is_empty() {
        let joiner = match state.tag_mode() {
            TagMode::Any => " | ",
            TagMode::All => " & ",
        };
        let tags: Vec<&str> = state.selected_tags().iter().map(String::as_str).collect();
        out.push_str(&format!("  tags:        {}\n", tags.join(joiner)));
    }
    for (attribute, range) in state.ranges() {
        out.push_str(&format!("  range:       {attribute}={range}\n"));
    }
    out.push_str(&format!("  sort:        {}\n", state.sort_key()));
    out.push_str(&format!(
        "  used:        {} times, last {}\n",
        query.use_count,
        query.last_used.format("%Y-%m-%d %H:%M")
    ));
    out
}
