//! Query session state
//!
//! A `QueryState` is pure filter criteria: it owns no references into the
//! catalog and is mutated one field at a time as the user types, clicks a
//! tab, toggles a tag, moves a slider or picks a sort option.
//!
//! ```
//! use mentorq::query::{CategoryFilter, QueryState};
//!
//! let mut state = QueryState::builder()
//!     .search_text("react")
//!     .category(CategoryFilter::only("Programming"))
//!     .sort_key("highestRated")
//!     .build();
//!
//! state.toggle_tag("Hooks");
//! assert!(state.selected_tags().contains("Hooks"));
//! ```

use super::error::QueryError;
use crate::catalog::{CatalogSchema, NumericRange};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Sort used when nothing else is specified
pub const DEFAULT_SORT_KEY: &str = "newest";

/// Single-select category tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// The "all" tab: no category filtering
    #[default]
    All,
    /// Exactly one category (case-sensitive)
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `"all"` in any case selects the all tab; anything else is a category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

/// How multiple selected tags combine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Item needs at least one selected tag (OR logic)
    #[default]
    Any,
    /// Item needs every selected tag (AND logic)
    All,
}

/// Mutable criteria driving one query session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryState {
    #[serde(default)]
    search_text: String,

    #[serde(default)]
    tag_mode: TagMode,

    #[serde(default = "default_sort_key")]
    sort_key: String,

    #[serde(default)]
    selected_tags: BTreeSet<String>,

    #[serde(default)]
    category: CategoryFilter,

    /// Absent attributes are unfiltered (full declared domain)
    #[serde(default)]
    ranges: BTreeMap<String, NumericRange>,
}

fn default_sort_key() -> String {
    DEFAULT_SORT_KEY.to_string()
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            selected_tags: BTreeSet::new(),
            tag_mode: TagMode::Any,
            ranges: BTreeMap::new(),
            sort_key: default_sort_key(),
        }
    }
}

impl QueryState {
    /// Default state: no filters, default sort
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default state for a catalog, sorted by the schema's default order
    #[must_use]
    pub fn for_schema(schema: &CatalogSchema) -> Self {
        Self {
            sort_key: schema.default_sort().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn builder() -> QueryStateBuilder {
        QueryStateBuilder::default()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub const fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    #[must_use]
    pub const fn tag_mode(&self) -> TagMode {
        self.tag_mode
    }

    #[must_use]
    pub const fn ranges(&self) -> &BTreeMap<String, NumericRange> {
        &self.ranges
    }

    #[must_use]
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// True when no filter narrows the catalog
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.category.is_all()
            && self.selected_tags.is_empty()
            && self.ranges.is_empty()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Add the tag if absent, remove it if present
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.selected_tags.insert(tag.into());
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.selected_tags.remove(tag)
    }

    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    pub const fn set_tag_mode(&mut self, mode: TagMode) {
        self.tag_mode = mode;
    }

    /// Set an inclusive range on a numeric attribute
    ///
    /// Bounds outside the attribute's declared domain are clamped when the
    /// query is evaluated.
    pub fn set_range(&mut self, attribute: impl Into<String>, range: NumericRange) {
        self.ranges.insert(attribute.into(), range);
    }

    /// Drop a range filter, returning the attribute to its full domain
    pub fn clear_range(&mut self, attribute: &str) -> Option<NumericRange> {
        self.ranges.remove(attribute)
    }

    pub fn set_sort_key(&mut self, key: impl Into<String>) {
        self.sort_key = key.into();
    }

    /// Clear every filter, keeping the sort key
    pub fn reset_filters(&mut self) {
        let sort_key = std::mem::take(&mut self.sort_key);
        *self = Self {
            sort_key,
            ..Self::default()
        };
    }

    /// Overlay another state's filters onto this one
    ///
    /// Used when a saved query is combined with command-line criteria: text and
    /// category from `other` win when set, tags and ranges are added. The tag
    /// mode and sort key stay as they are.
    pub fn merge(&mut self, other: &Self) {
        if !other.search_text.is_empty() {
            self.search_text.clone_from(&other.search_text);
        }
        if !other.category.is_all() {
            self.category = other.category.clone();
        }
        self.selected_tags
            .extend(other.selected_tags.iter().cloned());
        for (attribute, range) in &other.ranges {
            self.ranges.insert(attribute.clone(), *range);
        }
    }
}

/// Builder for `QueryState`
#[derive(Debug, Clone, Default)]
pub struct QueryStateBuilder {
    state: QueryState,
}

impl QueryStateBuilder {
    #[must_use]
    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.state.search_text = text.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.state.category = category;
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.state.selected_tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .selected_tags
            .extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn tag_mode(mut self, mode: TagMode) -> Self {
        self.state.tag_mode = mode;
        self
    }

    #[must_use]
    pub fn range(mut self, attribute: impl Into<String>, min: f64, max: f64) -> Self {
        self.state
            .ranges
            .insert(attribute.into(), NumericRange::new(min, max));
        self
    }

    #[must_use]
    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.state.sort_key = key.into();
        self
    }

    #[must_use]
    pub fn build(self) -> QueryState {
        self.state
    }
}

/// Parse a range filter of the form `ATTR=MIN..MAX`
///
/// Either bound may be omitted (`rating=4.5..`, `hourlyRate=..60`) and is then
/// unbounded on that side; clamping to the attribute's domain happens at
/// evaluation time.
///
/// # Errors
///
/// Returns `QueryError::InvalidRange` if the expression is malformed.
pub fn parse_range_filter(expr: &str) -> Result<(String, NumericRange), QueryError> {
    let invalid = || QueryError::InvalidRange(expr.to_string());

    let (attribute, bounds) = expr.split_once('=').ok_or_else(invalid)?;
    let attribute = attribute.trim();
    if attribute.is_empty() {
        return Err(invalid());
    }

    let (lo, hi) = bounds.split_once("..").ok_or_else(invalid)?;
    let parse_bound = |s: &str, open: f64| -> Result<f64, QueryError> {
        let s = s.trim();
        if s.is_empty() {
            Ok(open)
        } else {
            s.parse::<f64>()
                .ok()
                .filter(|v| !v.is_nan())
                .ok_or_else(invalid)
        }
    };

    let min = parse_bound(lo, f64::NEG_INFINITY)?;
    let max = parse_bound(hi, f64::INFINITY)?;
    Ok((attribute.to_string(), NumericRange::new(min, max)))
}
