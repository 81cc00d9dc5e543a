//! Catalog query engine
//!
//! This module turns a [`QueryState`] into an ordered view of a catalog:
//!
//! - [`state`]: the mutable criteria of a query session
//! - [`predicate`]: compiles criteria into a per-item match test
//! - [`sort`]: the comparator table selected by sort key
//! - [`engine`]: `evaluate` and the stateful [`QueryEngine`]
//!
//! # Examples
//!
//! ```
//! use mentorq::catalog::samples;
//! use mentorq::query::{QueryState, evaluate};
//!
//! let catalog = samples::mentors(chrono::Utc::now()).unwrap();
//! let state = QueryState::builder()
//!     .search_text("python")
//!     .sort_key("priceLowToHigh")
//!     .build();
//!
//! let view = evaluate(&catalog, &state).unwrap();
//! assert_eq!(view[0].secondary_text(), "Dr. Emily Chen");
//! ```

pub mod engine;
pub mod error;
pub mod predicate;
pub mod sort;
pub mod state;

pub use engine::{QueryEngine, evaluate, sort_items};
pub use error::QueryError;
pub use predicate::{Predicate, PredicateFilterExt, SearchKeys};
pub use sort::{Comparator, ComparatorTable, Direction, SortField, SortSource, SortValue};
pub use state::{
    CategoryFilter, DEFAULT_SORT_KEY, QueryState, QueryStateBuilder, TagMode, parse_range_filter,
};
