//! Saved query CRUD operations

use super::error::SavedQueryError;
use super::types::{SavedQuery, SavedQueryStorage, ValidationError, validate_query_name};
use crate::query::QueryState;
use std::fs;
use std::path::{Path, PathBuf};

/// Manager for saved query operations
///
/// Encapsulates the storage path; every operation loads the TOML file, applies
/// the change and writes it back.
///
/// # Examples
///
/// ```no_run
/// use mentorq::saved::SavedQueryManager;
/// use std::path::PathBuf;
///
/// let manager = SavedQueryManager::new(PathBuf::from("~/.config/mentorq/queries.toml"));
/// let queries = manager.list().unwrap();
/// ```
pub struct SavedQueryManager {
    path: PathBuf,
    auto_backup: bool,
}

impl SavedQueryManager {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: true,
        }
    }

    /// Create a manager that never writes `.backup` files
    #[must_use]
    pub const fn without_backup(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns an empty storage if the file doesn't exist.
    fn load(&self) -> Result<SavedQueryStorage, SavedQueryError> {
        if !self.path.exists() {
            return Ok(SavedQueryStorage::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let storage: SavedQueryStorage = toml::from_str(&contents)?;
        Ok(storage)
    }

    fn save(&self, storage: &SavedQueryStorage) -> Result<(), SavedQueryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.auto_backup && self.path.exists() {
            let backup_path = self.path.with_extension("toml.backup");
            fs::copy(&self.path, backup_path)?;
        }

        let toml = toml::to_string_pretty(storage)?;
        fs::write(&self.path, toml)?;

        Ok(())
    }

    /// Save a new query
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError` if:
    /// - The name is invalid
    /// - The state's sort key is unknown
    /// - A query with the same name already exists
    /// - The storage file cannot be saved
    pub fn create(
        &self,
        name: &str,
        description: String,
        state: QueryState,
    ) -> Result<SavedQuery, SavedQueryError> {
        let mut storage = self.load()?;

        let query = SavedQuery::new(name.to_string(), description, state);
        query.validate().map_err(|e| match e {
            ValidationError::Name(msg) => SavedQueryError::InvalidName(name.to_string(), msg),
            ValidationError::Query(err) => SavedQueryError::InvalidQuery(err),
        })?;

        if storage.contains(name) {
            return Err(SavedQueryError::AlreadyExists(name.to_string()));
        }
        storage.queries.push(query.clone());

        self.save(&storage)?;

        Ok(query)
    }

    /// Get a saved query by name
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError::NotFound` if no query has that name, or an
    /// error if the storage file cannot be loaded.
    pub fn get(&self, name: &str) -> Result<SavedQuery, SavedQueryError> {
        let storage = self.load()?;
        storage
            .get(name)
            .cloned()
            .ok_or_else(|| SavedQueryError::NotFound(name.to_string()))
    }

    /// Delete a saved query by name
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError` if the query is not found or the storage file
    /// cannot be saved.
    pub fn delete(&self, name: &str) -> Result<SavedQuery, SavedQueryError> {
        let mut storage = self.load()?;

        let query = storage
            .remove(name)
            .ok_or_else(|| SavedQueryError::NotFound(name.to_string()))?;

        self.save(&storage)?;

        Ok(query)
    }

    /// Rename a saved query
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError` if:
    /// - The old query is not found
    /// - The new name is invalid or already taken
    /// - The storage file cannot be saved
    pub fn rename(&self, old_name: &str, new_name: String) -> Result<(), SavedQueryError> {
        let mut storage = self.load()?;

        validate_query_name(&new_name)
            .map_err(|e| SavedQueryError::InvalidName(new_name.clone(), e))?;

        if storage.contains(&new_name) {
            return Err(SavedQueryError::AlreadyExists(new_name));
        }

        let query = storage
            .get_mut(old_name)
            .ok_or_else(|| SavedQueryError::NotFound(old_name.to_string()))?;
        query.name = new_name;

        self.save(&storage)?;

        Ok(())
    }

    /// List all saved queries, most used first
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError` if the storage file cannot be loaded.
    pub fn list(&self) -> Result<Vec<SavedQuery>, SavedQueryError> {
        let storage = self.load()?;
        Ok(storage.most_used().into_iter().cloned().collect())
    }

    /// Increment a query's use count and update `last_used`
    ///
    /// # Errors
    ///
    /// Returns `SavedQueryError` if the query is not found or the storage file
    /// cannot be saved.
    pub fn record_use(&self, name: &str) -> Result<(), SavedQueryError> {
        let mut storage = self.load()?;

        let query = storage
            .get_mut(name)
            .ok_or_else(|| SavedQueryError::NotFound(name.to_string()))?;
        query.record_use();

        self.save(&storage)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CategoryFilter;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> SavedQueryManager {
        SavedQueryManager::new(dir.path().join("queries.toml"))
    }

    fn python_query() -> QueryState {
        QueryState::builder()
            .search_text("python")
            .category(CategoryFilter::only("Data Science"))
            .tag("Beginner")
            .range("rating", 4.5, 5.0)
            .sort_key("highestRated")
            .build()
    }

    #[test]
    fn test_create_and_get() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager
            .create("python", "Python picks".into(), python_query())
            .unwrap();
        let loaded = manager.get("python").unwrap();

        assert_eq!(loaded.description, "Python picks");
        assert_eq!(loaded.state, python_query());
    }

    #[test]
    fn test_create_duplicate_fails() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager.create("q", String::new(), QueryState::new()).unwrap();
        assert!(matches!(
            manager.create("q", String::new(), QueryState::new()),
            Err(SavedQueryError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_create_rejects_bad_name_and_sort() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        assert!(matches!(
            manager.create("bad name", String::new(), QueryState::new()),
            Err(SavedQueryError::InvalidName(..))
        ));

        let state = QueryState::builder().sort_key("alphabetical").build();
        assert!(matches!(
            manager.create("ok", String::new(), state),
            Err(SavedQueryError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_rename_and_delete() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager.create("old", String::new(), QueryState::new()).unwrap();
        manager.rename("old", "new".into()).unwrap();
        assert!(matches!(manager.get("old"), Err(SavedQueryError::NotFound(_))));

        let removed = manager.delete("new").unwrap();
        assert_eq!(removed.name, "new");
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_record_use_and_backup() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager.create("q", String::new(), QueryState::new()).unwrap();
        manager.record_use("q").unwrap();
        manager.record_use("q").unwrap();

        assert_eq!(manager.get("q").unwrap().use_count, 2);
        assert!(dir.path().join("queries.toml.backup").exists());
    }

    #[test]
    fn test_missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let manager = SavedQueryManager::without_backup(dir.path().join("none.toml"));
        assert!(manager.list().unwrap().is_empty());
    }
}
