//! Catalog model and supplier-side adapters
//!
//! A catalog is the full, unfiltered collection of items a view can query.
//! Domain records (mentor profiles, library videos) are adapted into the
//! shared [`Item`] shape before any query runs.
//!
//! # Examples
//!
//! ```
//! use mentorq::catalog::{Catalog, CatalogSchema, Item};
//!
//! let items = vec![
//!     Item::builder("1")
//!         .title("Python for Beginners")
//!         .category("Programming")
//!         .numeric("rating", 4.8)
//!         .build(),
//! ];
//! let catalog = Catalog::new(CatalogSchema::videos(), items).unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

pub mod adapters;
pub mod error;
pub mod facets;
pub mod loader;
pub mod samples;
pub mod time;
pub mod types;

pub use adapters::{Mentor, Video, mentor_catalog, video_catalog};
pub use error::CatalogError;
pub use facets::Facets;
pub use loader::{load_catalog, parse_catalog};
pub use types::{
    Catalog, CatalogKind, CatalogSchema, Item, ItemBuilder, NumericDomain, NumericRange, SortRole,
};
