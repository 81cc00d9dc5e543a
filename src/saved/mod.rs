//! Saved queries
//!
//! Named query presets let a user re-run a search, filter and sort combination
//! by name. They are stored in TOML at `~/.config/mentorq/queries.toml` by
//! default, with usage statistics for listing the most used first.
//!
//! ```toml
//! [[query]]
//! name = "cheap-python"
//! description = "Python mentors under $70/hr"
//! created = "2024-06-01T12:00:00Z"
//! last_used = "2024-06-01T12:00:00Z"
//! use_count = 0
//!
//! [query.state]
//! search_text = "python"
//! tag_mode = "any"
//! sort_key = "priceLowToHigh"
//! selected_tags = []
//! category = "all"
//!
//! [query.state.ranges.hourlyRate]
//! min = 0.0
//! max = 70.0
//! ```

pub mod error;
pub mod operations;
pub mod types;

pub use error::SavedQueryError;
pub use operations::SavedQueryManager;
pub use types::{SavedQuery, SavedQueryStorage, validate_query_name};
