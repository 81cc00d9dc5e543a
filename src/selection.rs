//! Selection/detail state
//!
//! Tracks the single item opened for detail viewing (a playing video, an
//! expanded mentor profile). It is independent of the query state: an open
//! item stays open when a later query filters it out of the view.

use crate::catalog::{Catalog, Item};
use serde::{Deserialize, Serialize};

/// At most one open item, referenced by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    active: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Open an item, replacing any previously open one
    ///
    /// Returns the id that was open before, if any.
    pub fn open(&mut self, id: impl Into<String>) -> Option<String> {
        self.active.replace(id.into())
    }

    /// Close the open item
    pub fn close(&mut self) -> Option<String> {
        self.active.take()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Look the open item up in the full catalog, not the filtered view
    #[must_use]
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Option<&'c Item> {
        self.active_id().and_then(|id| catalog.get(id))
    }
}
