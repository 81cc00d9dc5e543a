//! Testing utilities for mentorq
//!
//! Catalog fixtures and small assertion helpers shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, CatalogSchema, Item};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference time so relative dates are reproducible
///
/// # Panics
/// Never; the timestamp is a valid constant.
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Two-video catalog used by the engine scenarios
///
/// | id | title                | category    | rating | views  |
/// |----|----------------------|-------------|--------|--------|
/// | 1  | Python for Beginners | Programming | 4.8    | 248292 |
/// | 2  | Finance Basics       | Finance     | 4.9    | 765    |
///
/// # Panics
/// Panics if the fixture is invalid, which would be a bug in the fixture.
#[must_use]
pub fn scenario_catalog() -> Catalog {
    let now = reference_now();
    let items = vec![
        Item::builder("1")
            .title("Python for Beginners")
            .secondary_text("Dr. Lisa Wang")
            .category("Programming")
            .tags(["Python", "Beginner"])
            .numeric("rating", 4.8)
            .numeric("views", 248_292.0)
            .date(now - chrono::Duration::days(14))
            .build(),
        Item::builder("2")
            .title("Finance Basics")
            .secondary_text("James Wilson")
            .category("Finance")
            .tags(["Budgeting"])
            .numeric("rating", 4.9)
            .numeric("views", 765.0)
            .date(now - chrono::Duration::days(3))
            .build(),
    ];
    Catalog::new(CatalogSchema::videos(), items).expect("valid scenario catalog")
}

/// Ids of a view, in order
#[must_use]
pub fn ids(view: &[&Item]) -> Vec<String> {
    view.iter().map(|item| item.id().to_string()).collect()
}
