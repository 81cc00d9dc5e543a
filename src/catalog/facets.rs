//! Facet summaries for building filter controls
//!
//! Category tabs, tag checkboxes and range sliders are populated from the
//! full catalog, independent of the current query.

use super::types::{Catalog, NumericRange};
use std::collections::{BTreeMap, HashMap};

/// Counts and spans over a whole catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Facets {
    /// Categories with item counts, sorted by name
    pub categories: Vec<(String, usize)>,
    /// Tags with item counts, most used first, ties by name
    pub tags: Vec<(String, usize)>,
    /// Observed min/max per numeric attribute
    pub spans: BTreeMap<String, NumericRange>,
}

impl Facets {
    /// Collect facets from a catalog
    #[must_use]
    pub fn collect(catalog: &Catalog) -> Self {
        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        let mut tags: HashMap<&str, usize> = HashMap::new();
        let mut spans: BTreeMap<String, NumericRange> = BTreeMap::new();

        for item in catalog.items() {
            *categories.entry(item.category()).or_default() += 1;
            for tag in item.tags() {
                *tags.entry(tag.as_str()).or_default() += 1;
            }
            for (attribute, &value) in item.numeric_attributes() {
                spans
                    .entry(attribute.clone())
                    .and_modify(|span| {
                        span.min = span.min.min(value);
                        span.max = span.max.max(value);
                    })
                    .or_insert_with(|| NumericRange::new(value, value));
            }
        }

        let mut tags: Vec<(String, usize)> = tags
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            categories: categories
                .into_iter()
                .map(|(c, n)| (c.to_string(), n))
                .collect(),
            tags,
            spans,
        }
    }

    /// Number of items in a category, zero if absent
    #[must_use]
    pub fn category_count(&self, category: &str) -> usize {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::samples;
    use chrono::Utc;

    #[test]
    fn test_video_facets() {
        let catalog = samples::videos(Utc::now()).unwrap();
        let facets = Facets::collect(&catalog);

        assert_eq!(facets.category_count("Programming"), 2);
        assert_eq!(facets.category_count("Data Science"), 2);
        assert_eq!(facets.category_count("Business"), 0);

        // "Beginner" appears on two videos and sorts ahead of single-use tags
        assert_eq!(facets.tags[0], ("Beginner".to_string(), 2));

        let views = facets.spans["views"];
        assert_eq!(views, NumericRange::new(765.0, 2150.0));
    }
}
