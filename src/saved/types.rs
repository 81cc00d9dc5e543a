//! Saved query data structures
//!
//! - `SavedQuery`: a named `QueryState` with usage statistics
//! - `SavedQueryStorage`: the TOML document holding every saved query

use crate::query::{ComparatorTable, QueryError, QueryState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named query preset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedQuery {
    /// Unique name
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub created: DateTime<Utc>,

    pub last_used: DateTime<Utc>,

    #[serde(default)]
    pub use_count: u32,

    /// The stored criteria and sort
    pub state: QueryState,
}

impl SavedQuery {
    #[must_use]
    pub fn new(name: String, description: String, state: QueryState) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            created: now,
            last_used: now,
            use_count: 0,
            state,
        }
    }

    /// Record that this query was run
    pub fn record_use(&mut self) {
        self.use_count += 1;
        self.last_used = Utc::now();
    }

    /// Validate the name and the stored sort key
    ///
    /// # Errors
    ///
    /// Returns a message describing an invalid name, or the `QueryError` for
    /// an unknown sort key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_query_name(&self.name).map_err(ValidationError::Name)?;
        ComparatorTable::lookup(self.state.sort_key()).map_err(ValidationError::Query)?;
        Ok(())
    }
}

/// Why a saved query failed validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Name(String),
    Query(QueryError),
}

/// Storage container for all saved queries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavedQueryStorage {
    #[serde(rename = "query", default)]
    pub queries: Vec<SavedQuery>,
}

impl SavedQueryStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queries: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SavedQuery> {
        self.queries.iter().find(|q| q.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SavedQuery> {
        self.queries.iter_mut().find(|q| q.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.queries.iter().any(|q| q.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<SavedQuery> {
        let pos = self.queries.iter().position(|q| q.name == name)?;
        Some(self.queries.remove(pos))
    }

    /// Saved queries, most used first
    #[must_use]
    pub fn most_used(&self) -> Vec<&SavedQuery> {
        let mut sorted: Vec<&SavedQuery> = self.queries.iter().collect();
        sorted.sort_by(|a, b| b.use_count.cmp(&a.use_count).then_with(|| a.name.cmp(&b.name)));
        sorted
    }
}

/// Validate a saved query name
///
/// Names are 1-64 characters of alphanumerics, `-` and `_`.
///
/// # Errors
///
/// Returns a message describing the problem.
pub fn validate_query_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.chars().count() > 64 {
        return Err(format!("Name too long (max 64 chars): {}", name.len()));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Name '{name}' contains invalid characters (only alphanumeric, '-', and '_' allowed)"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_name() {
        assert!(validate_query_name("cheap-python").is_ok());
        assert!(validate_query_name("top_rated2").is_ok());
        assert!(validate_query_name("").is_err());
        assert!(validate_query_name("has space").is_err());
        assert!(validate_query_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_sort() {
        let state = QueryState::builder().sort_key("alphabetical").build();
        let query = SavedQuery::new("bad".into(), String::new(), state);
        assert!(matches!(query.validate(), Err(ValidationError::Query(_))));
    }

    #[test]
    fn test_most_used_order() {
        let mut storage = SavedQueryStorage::new();
        let mut a = SavedQuery::new("a".into(), String::new(), QueryState::new());
        let b = SavedQuery::new("b".into(), String::new(), QueryState::new());
        a.record_use();
        storage.queries.push(b);
        storage.queries.push(a);

        let names: Vec<_> = storage.most_used().iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
