//! Query-specific error types
//!
//! Every variant signals a configuration mistake: a sort option the table does
//! not know, or a filter/sort referencing an attribute the catalog does not
//! provide. Empty results and out-of-domain ranges are never errors.

use thiserror::Error;

/// Query configuration errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    /// Sort name is not in the comparator table
    #[error("Unknown sort key '{0}'")]
    UnknownSortKey(String),

    /// The catalog declares no attribute for the role this sort needs
    #[error("Sort '{key}' is not supported by {kind} catalogs (no {role} attribute)")]
    UnsupportedSort {
        key: String,
        kind: String,
        role: String,
    },

    /// A range filter names an attribute the schema does not declare
    #[error("Unknown numeric attribute '{0}'")]
    UnknownAttribute(String),

    /// An item lacks an attribute required by the active sort or filter
    #[error("Item '{id}' is missing required attribute '{attribute}'")]
    MissingAttribute { id: String, attribute: String },

    /// A range expression could not be parsed
    #[error("Invalid range '{0}' (expected ATTR=MIN..MAX)")]
    InvalidRange(String),
}
