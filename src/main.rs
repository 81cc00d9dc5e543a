//! Mentorq CLI application entry point
//!
//! Search, filter and sort a catalog of mentors or video lessons from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the mentors sample, highest rated first (default command)
//! mentorq
//!
//! # Python videos, newest first
//! mentorq query python --sample videos -s newest
//!
//! # Mentors in a category with a rate ceiling, cheapest first
//! mentorq query -c "Software Development" -r hourlyRate=..70 -s priceLowToHigh
//!
//! # Items tagged both Python and Beginner, as JSON
//! mentorq query -t Python -t Beginner --all-tags --format json
//!
//! # Show more results ("load more" twice)
//! mentorq query --page 3
//!
//! # Save and re-run a query
//! mentorq query python -s highestRated --save python-best
//! mentorq query --load python-best
//!
//! # Quiet mode (only ids)
//! mentorq -q query python
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/mentorq/config.toml` on Linux) and created with defaults on
//! first run. `MENTORQ_*` environment variables override file values.

use mentorq::{
    MentorqError,
    cli::{Cli, Commands},
    commands::{self, Context},
    config::MentorqConfig,
    output::{OutputWriter, StdoutWriter},
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, MentorqError>;

fn run(cli: &Cli) -> Result<()> {
    let (config, config_path) = match &cli.config {
        Some(path) => (MentorqConfig::load_from(path)?, path.clone()),
        None => (MentorqConfig::load()?, MentorqConfig::config_path()?),
    };

    let quiet = cli.quiet || config.quiet;
    let writer = StdoutWriter::new(quiet);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut ctx = Context {
        config: &config,
        writer: &writer,
        out: &mut out,
        quiet,
        now: chrono::Utc::now(),
    };

    match cli.get_command() {
        Commands::Query(args) => commands::query(&args, &mut ctx),
        Commands::Facets { source } => commands::facets(&source, &mut ctx),
        Commands::Show { id, after, source } => {
            commands::show(&id, after.as_deref(), &source, &mut ctx)
        }
        Commands::Sorts { source } => commands::sorts(&source, &mut ctx),
        Commands::Saved { command } => commands::saved(&command, &mut ctx),
        Commands::Config { command } => commands::config(&command, &config_path, &mut ctx),
        Commands::Completions { shell } => commands::completions(shell, ctx.out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StdoutWriter::new(cli.quiet).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
