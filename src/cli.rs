//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for mentorq using the `clap` crate.
//!
//! # Commands
//!
//! - **query**: Search, filter and sort a catalog (default)
//! - **facets**: Categories, tags and attribute spans present in a catalog
//! - **show**: Open one item for detail viewing
//! - **sorts**: List sort options
//! - **saved**: Manage saved queries
//! - **config**: Inspect configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use mentorq::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["mentorq", "query", "python", "-s", "highestRated"]);
//! match cli.get_command() {
//!     Commands::Query(args) => assert_eq!(args.text.as_deref(), Some("python")),
//!     _ => unreachable!(),
//! }
//! ```

use crate::catalog::CatalogKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Built-in sample catalogs
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Mentor profiles
    Mentors,
    /// Video lessons
    Videos,
}

impl From<SampleKind> for CatalogKind {
    fn from(kind: SampleKind) -> Self {
        match kind {
            SampleKind::Mentors => Self::Mentors,
            SampleKind::Videos => Self::Videos,
        }
    }
}

/// Result output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of items
    Json,
    /// CSV with one column per attribute
    Csv,
}

/// Shared arguments selecting which catalog to query
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogSource {
    /// Use a built-in sample catalog
    #[arg(long = "sample", value_name = "KIND", conflicts_with_all = ["file", "catalog"])]
    pub sample: Option<SampleKind>,

    /// Load a catalog file (.json or .toml)
    #[arg(long = "file", value_name = "PATH", conflicts_with = "catalog")]
    pub file: Option<PathBuf>,

    /// Catalog name from the configuration (overrides default)
    #[arg(long = "catalog", value_name = "NAME")]
    pub catalog: Option<String>,
}

/// Arguments of the query command
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free-text search over title, secondary text and tags
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Category tab to restrict to ("all" for every category)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Tags to filter by (can specify multiple: -t tag1 -t tag2)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Require every selected tag instead of any
    #[arg(long = "all-tags")]
    pub all_tags: bool,

    /// Inclusive numeric range, e.g. rating=4.5..5 or hourlyRate=..40
    #[arg(short = 'r', long = "range", value_name = "ATTR=MIN..MAX")]
    pub ranges: Vec<String>,

    /// Sort option (see `mentorq sorts`)
    #[arg(short = 's', long = "sort", value_name = "SORT")]
    pub sort: Option<String>,

    /// Number of "load more" pages to show
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Show at most N items, ignoring paging
    #[arg(long = "limit", value_name = "N", conflicts_with = "page")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Start from a saved query
    #[arg(long = "load", value_name = "NAME")]
    pub load: Option<String>,

    /// Save the resulting query under a name
    #[arg(long = "save", value_name = "NAME")]
    pub save: Option<String>,

    /// Description for the saved query
    #[arg(long = "description", value_name = "DESC", requires = "save")]
    pub description: Option<String>,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Saved query management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SavedCommands {
    /// List saved queries, most used first
    #[command(visible_alias = "ls")]
    List,

    /// Show the criteria of a saved query
    Show {
        /// Name of the query to show
        name: String,
    },

    /// Delete a saved query
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the query to delete
        name: String,
    },

    /// Rename a saved query
    Rename {
        /// Current name
        old_name: String,

        /// New name
        new_name: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mentorq")]
#[command(about = "Search, filter and sort mentor and video catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the default
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search, filter and sort a catalog (default)
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Show categories, tags and attribute spans of a catalog
    Facets {
        #[command(flatten)]
        source: CatalogSource,
    },

    /// Open an item for detail viewing
    Show {
        /// Item id
        id: String,

        /// Run a text query afterwards; the opened item stays selected
        #[arg(long = "after", value_name = "TEXT")]
        after: Option<String>,

        #[command(flatten)]
        source: CatalogSource,
    },

    /// List sort options supported by a catalog
    Sorts {
        #[command(flatten)]
        source: CatalogSource,
    },

    /// Manage saved queries
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to an unfiltered query if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| {
            Commands::Query(QueryArgs {
                page: 1,
                ..QueryArgs::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query_with_filters() {
        let cli = Cli::parse_from([
            "mentorq", "query", "python", "-c", "Programming", "-t", "Python", "-t", "Beginner",
            "--all-tags", "-r", "rating=4.5..5", "-s", "newest", "--sample", "videos",
        ]);
        let Commands::Query(args) = cli.get_command() else {
            panic!("Expected Query command");
        };
        assert_eq!(args.text.as_deref(), Some("python"));
        assert_eq!(args.category.as_deref(), Some("Programming"));
        assert_eq!(args.tags, vec!["Python".to_string(), "Beginner".to_string()]);
        assert!(args.all_tags);
        assert_eq!(args.ranges, vec!["rating=4.5..5".to_string()]);
        assert_eq!(args.sort.as_deref(), Some("newest"));
        assert_eq!(args.source.sample, Some(SampleKind::Videos));
        assert_eq!(args.page, 1);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_default_command_is_query() {
        let cli = Cli::parse_from(["mentorq"]);
        let Commands::Query(args) = cli.get_command() else {
            panic!("Expected Query command");
        };
        assert!(args.text.is_none());
        assert_eq!(args.page, 1);
    }

    #[test]
    fn test_global_quiet_after_subcommand() {
        let cli = Cli::parse_from(["mentorq", "sorts", "-q"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_description_requires_save() {
        let result = Cli::try_parse_from(["mentorq", "query", "--description", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_conflicts_with_file() {
        let result =
            Cli::try_parse_from(["mentorq", "facets", "--sample", "mentors", "--file", "a.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_saved_rename() {
        let cli = Cli::parse_from(["mentorq", "saved", "rename", "old", "new"]);
        match cli.get_command() {
            Commands::Saved {
                command: SavedCommands::Rename { old_name, new_name },
            } => {
                assert_eq!(old_name, "old");
                assert_eq!(new_name, "new");
            }
            _ => panic!("Expected Saved Rename command"),
        }
    }
}
