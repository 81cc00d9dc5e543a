//! Catalog data structures
//!
//! - `Item`: a queryable catalog entry (mentor, video, or any adapted record)
//! - `NumericDomain` / `NumericRange`: declared value domains and range filters
//! - `CatalogSchema`: the domains and sort roles a catalog declares
//! - `Catalog`: a validated schema plus its items

use super::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A read-only catalog entry
///
/// Items are built once by the catalog supplier and never mutated by queries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    id: String,
    title: String,
    secondary_text: String,
    category: String,
    tags: Vec<String>,
    numeric: BTreeMap<String, f64>,
    date: Option<DateTime<Utc>>,
}

impl Item {
    /// Start building an item with the given id
    #[must_use]
    pub fn builder(id: impl Into<String>) -> ItemBuilder {
        ItemBuilder {
            item: Self {
                id: id.into(),
                title: String::new(),
                secondary_text: String::new(),
                category: String::new(),
                tags: Vec::new(),
                numeric: BTreeMap::new(),
                date: None,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Mentor name, author, or other text shown under the title
    #[must_use]
    pub fn secondary_text(&self) -> &str {
        &self.secondary_text
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Value of a named numeric attribute, if the item carries it
    #[must_use]
    pub fn numeric(&self, attribute: &str) -> Option<f64> {
        self.numeric.get(attribute).copied()
    }

    /// All numeric attributes, ordered by name
    #[must_use]
    pub const fn numeric_attributes(&self) -> &BTreeMap<String, f64> {
        &self.numeric
    }

    #[must_use]
    pub const fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Check whether the item carries a tag (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Builder for `Item`
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = title.into();
        self
    }

    #[must_use]
    pub fn secondary_text(mut self, text: impl Into<String>) -> Self {
        self.item.secondary_text = text.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = category.into();
        self
    }

    /// Add a tag; duplicates are ignored
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.item.tags.contains(&tag) {
            self.item.tags.push(tag);
        }
        self
    }

    /// Add several tags, keeping first-seen order
    #[must_use]
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, Self::tag)
    }

    #[must_use]
    pub fn numeric(mut self, attribute: impl Into<String>, value: f64) -> Self {
        self.item.numeric.insert(attribute.into(), value);
        self
    }

    #[must_use]
    pub const fn date(mut self, date: DateTime<Utc>) -> Self {
        self.item.date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> Item {
        self.item
    }
}

/// Inclusive `[min, max]` range used as a numeric filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Declared valid domain of a numeric attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NumericDomain {
    min: f64,
    max: f64,
}

impl NumericDomain {
    /// Create a domain
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDomain` if a bound is not finite or `min > max`.
    pub fn new(attribute: &str, min: f64, max: f64) -> Result<Self, CatalogError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CatalogError::InvalidDomain {
                attribute: attribute.to_string(),
                min,
                max,
            });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// The range covering the whole domain (no filtering)
    #[must_use]
    pub const fn full_range(&self) -> NumericRange {
        NumericRange::new(self.min, self.max)
    }

    /// Clamp a requested range into this domain
    ///
    /// NaN bounds fall back to the matching domain bound and inverted bounds
    /// are swapped, so the result is always a valid sub-range.
    #[must_use]
    pub fn clamp(&self, range: NumericRange) -> NumericRange {
        let lo = if range.min.is_nan() { self.min } else { range.min };
        let hi = if range.max.is_nan() { self.max } else { range.max };
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        NumericRange::new(lo.clamp(self.min, self.max), hi.clamp(self.min, self.max))
    }

    /// Whether a (clamped) range narrows this domain at all
    #[must_use]
    pub fn is_narrowed_by(&self, range: NumericRange) -> bool {
        range.min > self.min || range.max < self.max
    }

    /// Whether a value lies inside the domain
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Kind of records a catalog was adapted from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Mentors,
    Videos,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mentors => write!(f, "mentors"),
            Self::Videos => write!(f, "videos"),
        }
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mentors" | "mentor" => Ok(Self::Mentors),
            "videos" | "video" => Ok(Self::Videos),
            other => Err(CatalogError::UnknownKind(other.to_string())),
        }
    }
}

/// A numeric attribute's part in ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortRole {
    /// Views, reviews, or another popularity count
    Popularity,
    /// Star rating
    Rating,
    /// Price, hourly rate
    Price,
}

impl fmt::Display for SortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popularity => write!(f, "popularity"),
            Self::Rating => write!(f, "rating"),
            Self::Price => write!(f, "price"),
        }
    }
}

/// Numeric domains and sort roles a catalog declares
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSchema {
    kind: CatalogKind,
    domains: BTreeMap<String, NumericDomain>,
    popularity: Option<String>,
    rating: Option<String>,
    price: Option<String>,
    dated: bool,
    default_sort: String,
}

impl CatalogSchema {
    /// Create an empty schema of the given kind
    #[must_use]
    pub fn new(kind: CatalogKind, default_sort: impl Into<String>) -> Self {
        Self {
            kind,
            domains: BTreeMap::new(),
            popularity: None,
            rating: None,
            price: None,
            dated: false,
            default_sort: default_sort.into(),
        }
    }

    /// Declare a numeric attribute and its valid domain
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDomain` if the bounds are invalid.
    pub fn with_domain(
        mut self,
        attribute: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Result<Self, CatalogError> {
        let attribute = attribute.into();
        let domain = NumericDomain::new(&attribute, min, max)?;
        self.domains.insert(attribute, domain);
        Ok(self)
    }

    /// Assign the attribute that plays a sort role
    #[must_use]
    pub fn with_role(mut self, role: SortRole, attribute: impl Into<String>) -> Self {
        let attribute = Some(attribute.into());
        match role {
            SortRole::Popularity => self.popularity = attribute,
            SortRole::Rating => self.rating = attribute,
            SortRole::Price => self.price = attribute,
        }
        self
    }

    /// Declare whether items carry a date, enabling `newest`/`oldest`
    #[must_use]
    pub fn with_dates(mut self, dated: bool) -> Self {
        self.dated = dated;
        self
    }

    /// Schema for the mentor directory
    #[must_use]
    pub fn mentors() -> Self {
        let mut schema = Self::new(CatalogKind::Mentors, "highestRated")
            .with_role(SortRole::Rating, "rating")
            .with_role(SortRole::Popularity, "reviews")
            .with_role(SortRole::Price, "hourlyRate")
            .with_dates(true);
        schema.insert_domain("rating", 0.0, 5.0);
        schema.insert_domain("reviews", 0.0, 1_000_000.0);
        schema.insert_domain("hourlyRate", 0.0, 1_000.0);
        schema
    }

    /// Schema for the video library
    #[must_use]
    pub fn videos() -> Self {
        let mut schema = Self::new(CatalogKind::Videos, "newest")
            .with_role(SortRole::Rating, "rating")
            .with_role(SortRole::Popularity, "views")
            .with_dates(true);
        schema.insert_domain("rating", 0.0, 5.0);
        schema.insert_domain("views", 0.0, 10_000_000_000.0);
        schema.insert_domain("durationSeconds", 0.0, 86_400.0);
        schema
    }

    /// Built-in schema for a catalog kind
    #[must_use]
    pub fn for_kind(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Mentors => Self::mentors(),
            CatalogKind::Videos => Self::videos(),
        }
    }

    // Constant domains only; bounds are known to be valid.
    fn insert_domain(&mut self, attribute: &str, min: f64, max: f64) {
        self.domains
            .insert(attribute.to_string(), NumericDomain { min, max });
    }

    #[must_use]
    pub const fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[must_use]
    pub fn domain(&self, attribute: &str) -> Option<&NumericDomain> {
        self.domains.get(attribute)
    }

    #[must_use]
    pub const fn domains(&self) -> &BTreeMap<String, NumericDomain> {
        &self.domains
    }

    /// Name of the attribute assigned to a sort role
    #[must_use]
    pub fn role_attribute(&self, role: SortRole) -> Option<&str> {
        match role {
            SortRole::Popularity => self.popularity.as_deref(),
            SortRole::Rating => self.rating.as_deref(),
            SortRole::Price => self.price.as_deref(),
        }
    }

    #[must_use]
    pub const fn has_dates(&self) -> bool {
        self.dated
    }

    #[must_use]
    pub fn default_sort(&self) -> &str {
        &self.default_sort
    }
}

/// A validated schema plus its items
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: CatalogSchema,
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, validating item ids and numeric values
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two items share an id,
    /// `CatalogError::NonFiniteValue` if an item carries NaN or infinity for a
    /// declared attribute, or `CatalogError::OutOfDomain` if a value lies
    /// outside its attribute's declared domain.
    pub fn new(schema: CatalogSchema, items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id().to_string()));
            }
            for (attribute, value) in item.numeric_attributes() {
                let Some(domain) = schema.domain(attribute) else {
                    continue;
                };
                if !value.is_finite() {
                    return Err(CatalogError::NonFiniteValue {
                        id: item.id().to_string(),
                        attribute: attribute.clone(),
                    });
                }
                // Range clamping assumes every value sits inside its domain
                if !domain.contains(*value) {
                    return Err(CatalogError::OutOfDomain {
                        id: item.id().to_string(),
                        attribute: attribute.clone(),
                        value: *value,
                    });
                }
            }
        }
        Ok(Self { schema, items })
    }

    #[must_use]
    pub const fn schema(&self) -> &CatalogSchema {
        &self.schema
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id in the full catalog
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
