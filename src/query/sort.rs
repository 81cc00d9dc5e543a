//! Comparator table
//!
//! Sort options are looked up by name at query time. Every comparator breaks
//! ties by ascending item id, so two distinct items never compare equal and
//! the output order does not depend on input order.
//!
//! | key              | primary order                 |
//! |------------------|-------------------------------|
//! | `newest`         | date, descending              |
//! | `oldest`         | date, ascending               |
//! | `mostPopular`    | popularity attribute, desc    |
//! | `highestRated`   | rating attribute, descending  |
//! | `priceLowToHigh` | price attribute, ascending    |
//! | `priceHighToLow` | price attribute, descending   |

use super::error::QueryError;
use crate::catalog::{CatalogSchema, Item, SortRole};
use chrono::{DateTime, Utc};
use heck::ToLowerCamelCase;
use std::cmp::Ordering;
use std::fmt;

/// Where a comparator reads its primary key from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSource {
    /// The item's recency date
    Date,
    /// Whichever numeric attribute the schema assigns to this role
    Role(SortRole),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A named ordering over items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    pub key: &'static str,
    pub label: &'static str,
    pub source: SortSource,
    pub direction: Direction,
}

static COMPARATORS: [Comparator; 6] = [
    Comparator {
        key: "newest",
        label: "Newest First",
        source: SortSource::Date,
        direction: Direction::Descending,
    },
    Comparator {
        key: "oldest",
        label: "Oldest First",
        source: SortSource::Date,
        direction: Direction::Ascending,
    },
    Comparator {
        key: "mostPopular",
        label: "Most Popular",
        source: SortSource::Role(SortRole::Popularity),
        direction: Direction::Descending,
    },
    Comparator {
        key: "highestRated",
        label: "Highest Rated",
        source: SortSource::Role(SortRole::Rating),
        direction: Direction::Descending,
    },
    Comparator {
        key: "priceLowToHigh",
        label: "Price: Low to High",
        source: SortSource::Role(SortRole::Price),
        direction: Direction::Ascending,
    },
    Comparator {
        key: "priceHighToLow",
        label: "Price: High to Low",
        source: SortSource::Role(SortRole::Price),
        direction: Direction::Descending,
    },
];

// Option values used by the directory and library dropdowns.
static ALIASES: [(&str, &str); 5] = [
    ("recent", "newest"),
    ("popular", "mostPopular"),
    ("rating", "highestRated"),
    ("priceLow", "priceLowToHigh"),
    ("priceHigh", "priceHighToLow"),
];

/// Field a resolved comparator sorts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    Date,
    Numeric(String),
}

/// Extracted primary key of one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue {
    Date(DateTime<Utc>),
    Number(f64),
}

impl SortValue {
    fn cmp_primary(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            // A single comparator only ever yields one variant.
            (Self::Date(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Date(_)) => Ordering::Greater,
        }
    }
}

impl Comparator {
    /// Resolve the field this comparator sorts on for a schema
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnsupportedSort` if the schema has no attribute
    /// for the comparator's role, or declares no dates for a date sort.
    pub fn field(&self, schema: &CatalogSchema) -> Result<SortField, QueryError> {
        match self.source {
            SortSource::Date if schema.has_dates() => Ok(SortField::Date),
            SortSource::Date => Err(QueryError::UnsupportedSort {
                key: self.key.to_string(),
                kind: schema.kind().to_string(),
                role: "date".to_string(),
            }),
            SortSource::Role(role) => schema
                .role_attribute(role)
                .map(|attr| SortField::Numeric(attr.to_string()))
                .ok_or_else(|| QueryError::UnsupportedSort {
                    key: self.key.to_string(),
                    kind: schema.kind().to_string(),
                    role: role.to_string(),
                }),
        }
    }

    /// Whether a schema can be sorted with this comparator
    #[must_use]
    pub fn supports(&self, schema: &CatalogSchema) -> bool {
        self.field(schema).is_ok()
    }

    /// Total order over `(primary key, id)` pairs
    #[must_use]
    pub fn order(&self, a: (&SortValue, &str), b: (&SortValue, &str)) -> Ordering {
        let primary = a.0.cmp_primary(b.0);
        let primary = match self.direction {
            Direction::Ascending => primary,
            Direction::Descending => primary.reverse(),
        };
        primary.then_with(|| a.1.cmp(b.1))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl SortField {
    /// Read this field from an item
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingAttribute` if the item lacks the field.
    pub fn value(&self, item: &Item) -> Result<SortValue, QueryError> {
        let missing = |attribute: &str| QueryError::MissingAttribute {
            id: item.id().to_string(),
            attribute: attribute.to_string(),
        };
        match self {
            Self::Date => item.date().map(SortValue::Date).ok_or_else(|| missing("date")),
            Self::Numeric(attr) => item
                .numeric(attr)
                .map(SortValue::Number)
                .ok_or_else(|| missing(attr)),
        }
    }
}

/// Lookup over the fixed set of comparators
pub struct ComparatorTable;

impl ComparatorTable {
    /// Every comparator, in dropdown order
    #[must_use]
    pub fn all() -> &'static [Comparator] {
        &COMPARATORS
    }

    /// Find a comparator by name
    ///
    /// Names are matched after normalizing to lower camel case, so
    /// `most-popular`, `most_popular` and `MostPopular` all find
    /// `mostPopular`. Legacy dropdown values (`recent`, `popular`, `rating`,
    /// `priceLow`, `priceHigh`) are accepted as aliases. Only ASCII
    /// alphanumerics, `-`, `_` and spaces may appear in a name.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownSortKey` if the name is malformed or no
    /// comparator matches.
    pub fn lookup(name: &str) -> Result<&'static Comparator, QueryError> {
        let unknown = || QueryError::UnknownSortKey(name.to_string());

        let trimmed = name.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '));
        if !well_formed {
            return Err(unknown());
        }

        let normalized = trimmed.to_lower_camel_case();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map_or(normalized.as_str(), |(_, key)| *key);

        COMPARATORS
            .iter()
            .find(|c| c.key == canonical)
            .ok_or_else(unknown)
    }

    /// Comparators a schema can satisfy, for presenting sort options
    #[must_use]
    pub fn supported(schema: &CatalogSchema) -> Vec<&'static Comparator> {
        COMPARATORS.iter().filter(|c| c.supports(schema)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_canonical_and_normalized() {
        assert_eq!(ComparatorTable::lookup("newest").unwrap().key, "newest");
        assert_eq!(ComparatorTable::lookup("most-popular").unwrap().key, "mostPopular");
        assert_eq!(ComparatorTable::lookup("highest_rated").unwrap().key, "highestRated");
        assert_eq!(ComparatorTable::lookup("PriceLowToHigh").unwrap().key, "priceLowToHigh");
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(ComparatorTable::lookup("recent").unwrap().key, "newest");
        assert_eq!(ComparatorTable::lookup("popular").unwrap().key, "mostPopular");
        assert_eq!(ComparatorTable::lookup("rating").unwrap().key, "highestRated");
        assert_eq!(ComparatorTable::lookup("priceHigh").unwrap().key, "priceHighToLow");
    }

    #[test]
    fn test_unknown_key_is_error() {
        assert_eq!(
            ComparatorTable::lookup("cheapest"),
            Err(QueryError::UnknownSortKey("cheapest".to_string()))
        );
    }

    #[test]
    fn test_punctuated_key_is_error() {
        for name in ["newest!!", "??highest rated??", "most.popular", "", "   "] {
            assert_eq!(
                ComparatorTable::lookup(name),
                Err(QueryError::UnknownSortKey(name.to_string())),
                "{name:?}"
            );
        }
        assert_eq!(ComparatorTable::lookup("highest rated").unwrap().key, "highestRated");
    }

    #[test]
    fn test_supported_by_schema() {
        let video_keys: Vec<_> = ComparatorTable::supported(&CatalogSchema::videos())
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(video_keys, ["newest", "oldest", "mostPopular", "highestRated"]);
        assert_eq!(ComparatorTable::supported(&CatalogSchema::mentors()).len(), 6);
    }

    #[test]
    fn test_date_sorts_need_dated_schema() {
        let undated = CatalogSchema::mentors().with_dates(false);
        let keys: Vec<_> = ComparatorTable::supported(&undated)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, ["mostPopular", "highestRated", "priceLowToHigh", "priceHighToLow"]);

        let newest = ComparatorTable::lookup("newest").unwrap();
        assert!(matches!(
            newest.field(&undated),
            Err(QueryError::UnsupportedSort { role, .. }) if role == "date"
        ));
    }

    #[test]
    fn test_price_sort_unsupported_for_videos() {
        let comparator = ComparatorTable::lookup("priceLowToHigh").unwrap();
        assert!(matches!(
            comparator.field(&CatalogSchema::videos()),
            Err(QueryError::UnsupportedSort { .. })
        ));
    }

    #[test]
    fn test_order_breaks_ties_by_id() {
        let comparator = ComparatorTable::lookup("highestRated").unwrap();
        let v = SortValue::Number(4.9);
        assert_eq!(comparator.order((&v, "a"), (&v, "b")), Ordering::Less);
        let lower = SortValue::Number(4.8);
        assert_eq!(comparator.order((&v, "z"), (&lower, "a")), Ordering::Less);
    }
}
