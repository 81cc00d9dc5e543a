//! Completions command - static shell completion scripts

use crate::MentorqError;
use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

type Result<T> = std::result::Result<T, MentorqError>;

/// Write a completion script for `shell`
///
/// # Errors
///
/// Returns `MentorqError::IoError` if flushing the output fails.
pub fn execute(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
