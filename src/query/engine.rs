//! Query evaluation
//!
//! [`evaluate`] filters a catalog with the compiled predicate, then orders the
//! survivors with the comparator named by the state's sort key. Every call
//! re-derives the view from scratch; the result is a subset of the catalog,
//! holds no duplicates, and depends only on `(catalog, state)`.
//!
//! [`QueryEngine`] owns a catalog, its cached search keys and the session's
//! `QueryState`, for callers that re-query after every user interaction.

use super::error::QueryError;
use super::predicate::{Predicate, PredicateFilterExt, SearchKeys};
use super::sort::{Comparator, ComparatorTable, SortField};
use super::state::QueryState;
use crate::catalog::{Catalog, Item};

/// Filter and sort a catalog
///
/// # Errors
///
/// Returns `QueryError` for an unknown or unsupported sort key, a range on an
/// undeclared attribute, or a surviving item missing the attribute the active
/// sort or range filter needs. An empty result is `Ok`.
pub fn evaluate<'c>(catalog: &'c Catalog, state: &QueryState) -> Result<Vec<&'c Item>, QueryError> {
    let keys: Vec<SearchKeys> = catalog.items().iter().map(SearchKeys::of).collect();
    evaluate_with_keys(catalog, &keys, state)
}

fn evaluate_with_keys<'c>(
    catalog: &'c Catalog,
    keys: &[SearchKeys],
    state: &QueryState,
) -> Result<Vec<&'c Item>, QueryError> {
    let comparator = ComparatorTable::lookup(state.sort_key())?;
    let field = comparator.field(catalog.schema())?;
    let predicate = Predicate::compile(state, catalog.schema())?;

    let kept = catalog
        .items()
        .iter()
        .zip(keys)
        .filter_matching(&predicate)?;

    sort_items(kept, comparator, &field)
}

/// Order items by a comparator, ties broken by ascending id
///
/// # Errors
///
/// Returns `QueryError::MissingAttribute` if an item lacks the sort field.
pub fn sort_items<'c>(
    items: Vec<&'c Item>,
    comparator: &Comparator,
    field: &SortField,
) -> Result<Vec<&'c Item>, QueryError> {
    let mut keyed = items
        .into_iter()
        .map(|item| field.value(item).map(|value| (value, item)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(va, a), (vb, b)| comparator.order((va, a.id()), (vb, b.id())));

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// A catalog view with its own query state
///
/// # Examples
///
/// ```
/// use mentorq::catalog::samples;
/// use mentorq::query::{CategoryFilter, QueryEngine};
///
/// let catalog = samples::videos(chrono::Utc::now()).unwrap();
/// let mut engine = QueryEngine::new(catalog);
///
/// engine.state_mut().set_category(CategoryFilter::only("Programming"));
/// engine.state_mut().set_sort_key("highestRated");
///
/// let view = engine.view().unwrap();
/// assert!(view.iter().all(|v| v.category() == "Programming"));
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Catalog,
    keys: Vec<SearchKeys>,
    state: QueryState,
}

impl QueryEngine {
    /// Start a query session with the catalog's default state
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let state = QueryState::for_schema(catalog.schema());
        Self::with_state(catalog, state)
    }

    /// Start a query session with a given state
    #[must_use]
    pub fn with_state(catalog: Catalog, state: QueryState) -> Self {
        let keys = catalog.items().iter().map(SearchKeys::of).collect();
        Self {
            catalog,
            keys,
            state,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Mutable access for discrete state updates
    pub const fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    /// Replace the whole state, returning the previous one
    pub fn replace_state(&mut self, state: QueryState) -> QueryState {
        std::mem::replace(&mut self.state, state)
    }

    /// Derive the filtered, sorted view for the current state
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`].
    pub fn view(&self) -> Result<Vec<&Item>, QueryError> {
        evaluate_with_keys(&self.catalog, &self.keys, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSchema;
    use crate::query::state::CategoryFilter;
    use crate::testing::{ids, scenario_catalog};

    #[test]
    fn test_scenario_category_filter() {
        let catalog = scenario_catalog();
        let state = QueryState::builder()
            .category(CategoryFilter::only("Programming"))
            .sort_key("highestRated")
            .build();
        assert_eq!(ids(&evaluate(&catalog, &state).unwrap()), ["1"]);
    }

    #[test]
    fn test_scenario_most_popular() {
        let catalog = scenario_catalog();
        let state = QueryState::builder().sort_key("mostPopular").build();
        assert_eq!(ids(&evaluate(&catalog, &state).unwrap()), ["1", "2"]);
    }

    #[test]
    fn test_scenario_text_search_newest() {
        let catalog = scenario_catalog();
        let state = QueryState::builder()
            .search_text("finance")
            .sort_key("newest")
            .build();
        assert_eq!(ids(&evaluate(&catalog, &state).unwrap()), ["2"]);
    }

    #[test]
    fn test_unknown_sort_fails_even_when_empty() {
        let catalog = Catalog::new(CatalogSchema::videos(), vec![]).unwrap();
        let state = QueryState::builder().sort_key("alphabetical").build();
        assert_eq!(
            evaluate(&catalog, &state).unwrap_err(),
            QueryError::UnknownSortKey("alphabetical".to_string())
        );
    }

    #[test]
    fn test_empty_result_is_ok() {
        let catalog = scenario_catalog();
        let state = QueryState::builder().search_text("no such thing").build();
        assert!(evaluate(&catalog, &state).unwrap().is_empty());
    }

    #[test]
    fn test_missing_date_under_newest() {
        let items = vec![Item::builder("1").title("Undated").build()];
        let catalog = Catalog::new(CatalogSchema::videos(), items).unwrap();
        let state = QueryState::builder().sort_key("newest").build();
        assert_eq!(
            evaluate(&catalog, &state).unwrap_err(),
            QueryError::MissingAttribute {
                id: "1".to_string(),
                attribute: "date".to_string()
            }
        );
    }

    #[test]
    fn test_engine_rederives_after_mutation() {
        let mut engine = QueryEngine::new(scenario_catalog());
        assert_eq!(engine.view().unwrap().len(), 2);

        engine.state_mut().set_search_text("python");
        assert_eq!(ids(&engine.view().unwrap()), ["1"]);

        engine.state_mut().set_search_text("");
        engine.state_mut().set_category(CategoryFilter::only("Finance"));
        assert_eq!(ids(&engine.view().unwrap()), ["2"]);
    }
}
