//! Result rendering for CLI display
//!
//! Views are rendered as colored text for terminals, or as JSON / CSV for
//! scripting. The "load more" window is applied here: the engine always
//! returns the full view and display truncates it.

pub mod writer;

pub use writer::{MemoryWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::catalog::{Facets, Item};
use crate::query::Comparator;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::Write;

/// Visible slice of a view after `page` "load more" steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Items to display
    pub shown: usize,
    /// Items still hidden behind "load more"
    pub remaining: usize,
}

impl PageWindow {
    /// Window showing `page * page_size` items (page counts from 1)
    #[must_use]
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let shown = page.max(1).saturating_mul(page_size).min(total);
        Self {
            shown,
            remaining: total - shown,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// One-line summary of an item
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        return item.id().to_string();
    }

    let mut line = format!(
        "  {} {} {}",
        format!("[{}]", item.id()).dimmed(),
        item.title().bold(),
        format!("· {}", item.secondary_text()).dimmed()
    );
    if let Some(rating) = item.numeric("rating") {
        line.push_str(&format!(" {}", format!("★ {rating:.1}").yellow()));
    }
    if !item.category().is_empty() {
        line.push_str(&format!(" ({})", item.category()));
    }
    line
}

/// Multi-line detail view of an item
#[must_use]
pub fn item_detail(item: &Item) -> String {
    let mut out = format!("{}\n", item.title().bold());
    out.push_str(&format!("  id:        {}\n", item.id()));
    out.push_str(&format!("  by:        {}\n", item.secondary_text()));
    out.push_str(&format!("  category:  {}\n", item.category()));
    if !item.tags().is_empty() {
        out.push_str(&format!("  tags:      {}\n", item.tags().join(", ")));
    }
    for (attribute, value) in item.numeric_attributes() {
        out.push_str(&format!("  {attribute:<10} {}\n", format_number(*value)));
    }
    if let Some(date) = item.date() {
        out.push_str(&format!("  date:      {}\n", date.format("%Y-%m-%d")));
    }
    out
}

/// Write a view as a JSON array
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization or writing fails.
pub fn write_json(out: &mut dyn Write, items: &[&Item]) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Write a view as CSV
///
/// Fixed columns come first, then one column per numeric attribute present in
/// any item (sorted by name). Tags are joined with `;`.
///
/// # Errors
///
/// Returns `csv::Error` if writing fails.
pub fn write_csv(out: &mut dyn Write, items: &[&Item]) -> Result<(), csv::Error> {
    let attributes: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.numeric_attributes().keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["id", "title", "secondary_text", "category", "tags", "date"];
    header.extend(attributes.iter().copied());
    writer.write_record(&header)?;

    for item in items {
        let mut record = vec![
            item.id().to_string(),
            item.title().to_string(),
            item.secondary_text().to_string(),
            item.category().to_string(),
            item.tags().join(";"),
            item.date().map(|d| d.to_rfc3339()).unwrap_or_default(),
        ];
        record.extend(
            attributes
                .iter()
                .map(|a| item.numeric(a).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render facets as the category tabs, tag list and attribute spans
#[must_use]
pub fn facets_text(facets: &Facets, total: usize) -> String {
    let mut out = format!("{}\n", "Categories".bold());
    out.push_str(&format!("  all ({total})\n"));
    for (category, count) in &facets.categories {
        out.push_str(&format!("  {category} ({count})\n"));
    }

    out.push_str(&format!("{}\n", "Tags".bold()));
    for (tag, count) in &facets.tags {
        out.push_str(&format!("  {tag} ({count})\n"));
    }

    out.push_str(&format!("{}\n", "Ranges".bold()));
    for (attribute, span) in &facets.spans {
        out.push_str(&format!(
            "  {attribute}: {} .. {}\n",
            format_number(span.min),
            format_number(span.max)
        ));
    }
    out
}

/// One line per sort option
#[must_use]
pub fn comparator_line(comparator: &Comparator, is_default: bool) -> String {
    let marker = if is_default { " (default)" } else { "" };
    format!("  {:<16} {}{}", comparator.key, comparator.label, marker.dimmed())
}
