//! Config command - inspect the effective configuration

use super::Context;
use crate::MentorqError;
use crate::cli::ConfigCommands;
use crate::config::MentorqConfig;
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, MentorqError>;

/// Execute a config subcommand
///
/// `path` is the file the configuration was loaded from.
///
/// # Errors
///
/// Returns `MentorqError` if the configuration cannot be serialized or
/// output fails.
pub fn execute(command: &ConfigCommands, path: &Path, ctx: &mut Context<'_>) -> Result<()> {
    match command {
        ConfigCommands::Path => writeln!(ctx.out, "{}", path.display())?,
        ConfigCommands::Show => write!(ctx.out, "{}", render(ctx.config)?)?,
    }
    Ok(())
}

fn render(config: &MentorqConfig) -> Result<String> {
    let mut out = format!("quiet = {}\npage_size = {}\n", config.quiet, config.page_size);
    if let Some(name) = &config.default_catalog {
        out.push_str(&format!("default_catalog = \"{name}\"\n"));
    }
    if let Some(sort) = &config.default_sort {
        out.push_str(&format!("default_sort = \"{sort}\"\n"));
    }
    out.push_str(&format!(
        "saved_queries_path = \"{}\"\n",
        config.saved_queries_path()?.display()
    ));
    if !config.catalogs.is_empty() {
        out.push_str("\n[catalogs]\n");
        for name in config.list_catalogs() {
            if let Some(path) = config.get_catalog(name) {
                out.push_str(&format!("{name} = \"{}\"\n", path.display()));
            }
        }
    }
    Ok(out)
}
