//! Predicate builder
//!
//! A [`Predicate`] is compiled once per evaluation from a [`QueryState`] and
//! the catalog schema, then tested against every item. The verdict is the AND
//! of four components (text, category, tags, numeric ranges); a component at
//! its default value accepts every item.
//!
//! Lower-casing the searchable strings dominates the cost of a text match, so
//! callers that evaluate repeatedly keep a [`SearchKeys`] per item.
//!
//! # Iterator Adapters
//!
//! [`PredicateFilterExt`] adds `filter_matching` to iterators of
//! `(item, keys)` pairs:
//!
//! ```ignore
//! let kept = items.iter().zip(&keys).filter_matching(&predicate)?;
//! ```

use super::error::QueryError;
use super::state::{CategoryFilter, QueryState, TagMode};
use crate::catalog::{CatalogSchema, Item, NumericRange};

/// Lower-cased searchable text of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeys {
    title: String,
    secondary: String,
    tags: Vec<String>,
}

impl SearchKeys {
    #[must_use]
    pub fn of(item: &Item) -> Self {
        Self {
            title: item.title().to_lowercase(),
            secondary: item.secondary_text().to_lowercase(),
            tags: item.tags().iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Substring test against title, secondary text and tags
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.secondary.contains(needle)
            || self.tags.iter().any(|t| t.contains(needle))
    }
}

/// A range filter that actually narrows its attribute's domain
#[derive(Debug, Clone, PartialEq)]
struct ActiveRange {
    attribute: String,
    range: NumericRange,
}

/// Compiled form of a query's filter criteria
#[derive(Debug, Clone)]
pub struct Predicate<'s> {
    needle: String,
    category: Option<&'s str>,
    tags: Vec<&'s str>,
    tag_mode: TagMode,
    ranges: Vec<ActiveRange>,
}

impl<'s> Predicate<'s> {
    /// Compile a state's criteria against a schema
    ///
    /// Ranges are clamped into their declared domains; a range covering the
    /// whole domain after clamping is dropped.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownAttribute` if a range names an attribute
    /// the schema does not declare.
    pub fn compile(state: &'s QueryState, schema: &CatalogSchema) -> Result<Self, QueryError> {
        let mut ranges = Vec::new();
        for (attribute, range) in state.ranges() {
            let domain = schema
                .domain(attribute)
                .ok_or_else(|| QueryError::UnknownAttribute(attribute.clone()))?;
            let clamped = domain.clamp(*range);
            if domain.is_narrowed_by(clamped) {
                ranges.push(ActiveRange {
                    attribute: attribute.clone(),
                    range: clamped,
                });
            }
        }

        let category = match state.category() {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(c.as_str()),
        };

        Ok(Self {
            needle: state.search_text().to_lowercase(),
            category,
            tags: state.selected_tags().iter().map(String::as_str).collect(),
            tag_mode: state.tag_mode(),
            ranges,
        })
    }

    /// Number of range filters still active after clamping
    #[must_use]
    pub fn active_ranges(&self) -> usize {
        self.ranges.len()
    }

    fn text_matches(&self, keys: &SearchKeys) -> bool {
        self.needle.is_empty() || keys.contains(&self.needle)
    }

    fn category_matches(&self, item: &Item) -> bool {
        self.category.is_none_or(|c| item.category() == c)
    }

    fn tags_match(&self, item: &Item) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        match self.tag_mode {
            TagMode::Any => self.tags.iter().any(|t| item.has_tag(t)),
            TagMode::All => self.tags.iter().all(|t| item.has_tag(t)),
        }
    }

    fn ranges_match(&self, item: &Item) -> Result<bool, QueryError> {
        for active in &self.ranges {
            let value = item
                .numeric(&active.attribute)
                .ok_or_else(|| QueryError::MissingAttribute {
                    id: item.id().to_string(),
                    attribute: active.attribute.clone(),
                })?;
            if !active.range.contains(value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Test an item using its precomputed search keys
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingAttribute` if an active range filter
    /// references an attribute the item does not carry.
    pub fn matches(&self, item: &Item, keys: &SearchKeys) -> Result<bool, QueryError> {
        Ok(self.ranges_match(item)?
            && self.category_matches(item)
            && self.tags_match(item)
            && self.text_matches(keys))
    }

    /// Test an item, lower-casing its text on the fly
    ///
    /// # Errors
    ///
    /// Same as [`Predicate::matches`].
    pub fn matches_item(&self, item: &Item) -> Result<bool, QueryError> {
        self.matches(item, &SearchKeys::of(item))
    }
}

/// Extension trait filtering `(item, keys)` iterators by a predicate
pub trait PredicateFilterExt<'c, 'k>: Iterator<Item = (&'c Item, &'k SearchKeys)> + Sized {
    /// Keep the items the predicate accepts, in input order
    ///
    /// # Errors
    ///
    /// Returns the first `QueryError` raised by [`Predicate::matches`].
    fn filter_matching(self, predicate: &Predicate<'_>) -> Result<Vec<&'c Item>, QueryError> {
        let mut kept = Vec::new();
        for (item, keys) in self {
            if predicate.matches(item, keys)? {
                kept.push(item);
            }
        }
        Ok(kept)
    }
}

impl<'c, 'k, I> PredicateFilterExt<'c, 'k> for I where I: Iterator<Item = (&'c Item, &'k SearchKeys)> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::state::CategoryFilter;

    fn item() -> Item {
        Item::builder("2")
            .title("Advanced React Hooks")
            .secondary_text("Michael Chen")
            .category("Programming")
            .tags(["React", "Hooks"])
            .numeric("rating", 4.9)
            .numeric("views", 856.0)
            .build()
    }

    fn check(state: &QueryState) -> bool {
        Predicate::compile(state, &CatalogSchema::videos())
            .unwrap()
            .matches_item(&item())
            .unwrap()
    }

    #[test]
    fn test_default_state_accepts() {
        assert!(check(&QueryState::default()));
    }

    #[test]
    fn test_text_is_case_insensitive_substring() {
        assert!(check(&QueryState::builder().search_text("REACT").build()));
        assert!(check(&QueryState::builder().search_text("chen").build()));
        assert!(check(&QueryState::builder().search_text("hook").build()));
        assert!(!check(&QueryState::builder().search_text("python").build()));
    }

    #[test]
    fn test_category_is_exact() {
        let only = |c: &str| QueryState::builder().category(CategoryFilter::only(c)).build();
        assert!(check(&only("Programming")));
        assert!(!check(&only("programming")));
        assert!(!check(&only("Finance")));
    }

    #[test]
    fn test_tag_modes() {
        let any = QueryState::builder().tags(["React", "Python"]).build();
        assert!(check(&any));

        let all = QueryState::builder()
            .tags(["React", "Python"])
            .tag_mode(TagMode::All)
            .build();
        assert!(!check(&all));

        let all_present = QueryState::builder()
            .tags(["React", "Hooks"])
            .tag_mode(TagMode::All)
            .build();
        assert!(check(&all_present));
    }

    #[test]
    fn test_ranges_are_inclusive() {
        assert!(check(&QueryState::builder().range("rating", 4.9, 5.0).build()));
        assert!(!check(&QueryState::builder().range("rating", 0.0, 4.8).build()));
    }

    #[test]
    fn test_full_domain_range_is_inactive() {
        let state = QueryState::builder().range("rating", -50.0, 1000.0).build();
        let predicate = Predicate::compile(&state, &CatalogSchema::videos()).unwrap();
        assert_eq!(predicate.active_ranges(), 0);
    }

    #[test]
    fn test_unknown_range_attribute() {
        let state = QueryState::builder().range("hourlyRate", 0.0, 10.0).build();
        assert_eq!(
            Predicate::compile(&state, &CatalogSchema::videos()).unwrap_err(),
            QueryError::UnknownAttribute("hourlyRate".to_string())
        );
    }

    #[test]
    fn test_missing_attribute_under_active_range() {
        let state = QueryState::builder().range("durationSeconds", 0.0, 600.0).build();
        let predicate = Predicate::compile(&state, &CatalogSchema::videos()).unwrap();
        assert!(matches!(
            predicate.matches_item(&item()),
            Err(QueryError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_filter_matching_adapter() {
        let items = vec![item(), Item::builder("9").title("Finance").build()];
        let keys: Vec<SearchKeys> = items.iter().map(SearchKeys::of).collect();
        let state = QueryState::builder().search_text("finance").build();
        let predicate = Predicate::compile(&state, &CatalogSchema::videos()).unwrap();

        let kept = items.iter().zip(&keys).filter_matching(&predicate).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id(), "9");
    }
}
