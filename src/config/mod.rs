//! Configuration module for mentorq
//!
//! Manages named catalog files, the default catalog, the "load more" page
//! size and the saved query location. Configuration is stored in the user's
//! config directory and can be overridden with `MENTORQ_*` environment
//! variables (for example `MENTORQ_PAGE_SIZE=12`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Items shown per "load more" step when unset
pub const DEFAULT_PAGE_SIZE: usize = 6;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MentorqConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Items revealed per "load more" step
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// The catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Sort key overriding the catalog's own default
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Where saved queries live; defaults to `queries.toml` next to this file
    #[serde(default)]
    pub saved_queries_path: Option<PathBuf>,

    /// Map of catalog names to catalog files (.json or .toml)
    #[serde(default)]
    pub catalogs: HashMap<String, PathBuf>,
}

impl Default for MentorqConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            page_size: DEFAULT_PAGE_SIZE,
            default_catalog: None,
            default_sort: None,
            saved_queries_path: None,
            catalogs: HashMap::new(),
        }
    }
}

impl MentorqConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("mentorq").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a file plus `MENTORQ_*` environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("MENTORQ").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message("page_size must be at least 1".to_string()));
        }
        if let Some(name) = &self.default_catalog
            && !self.catalogs.contains_key(name)
        {
            return Err(ConfigError::Message(format!(
                "default_catalog '{name}' is not listed under [catalogs]"
            )));
        }
        Ok(())
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Get a catalog path by name
    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&PathBuf> {
        self.catalogs.get(name)
    }

    /// List all catalog names, sorted
    #[must_use]
    pub fn list_catalogs(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.catalogs.keys().collect();
        names.sort();
        names
    }

    /// Path of the saved query store
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the config directory
    /// cannot be determined.
    pub fn saved_queries_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.saved_queries_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_path()?.with_file_name("queries.toml")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MentorqConfig::default();
        assert!(config.catalogs.is_empty());
        assert!(config.default_catalog.is_none());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = MentorqConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.quiet);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
page_size = 3
default_catalog = "library"
default_sort = "mostPopular"

[catalogs]
library = "/data/videos.toml"
"#,
        )
        .unwrap();

        let config = MentorqConfig::load_from(&path).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.default_sort.as_deref(), Some("mostPopular"));
        assert_eq!(
            config.get_catalog("library"),
            Some(&PathBuf::from("/data/videos.toml"))
        );
    }

    #[test]
    fn test_default_catalog_must_exist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_catalog = \"nowhere\"\n").unwrap();
        assert!(MentorqConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 0\n").unwrap();
        assert!(MentorqConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = MentorqConfig::default();
        config
            .catalogs
            .insert("mentors".to_string(), PathBuf::from("/tmp/mentors.json"));
        config.default_catalog = Some("mentors".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(MentorqConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_list_catalogs_sorted() {
        let mut config = MentorqConfig::default();
        config.catalogs.insert("b".into(), PathBuf::from("/b.json"));
        config.catalogs.insert("a".into(), PathBuf::from("/a.json"));
        assert_eq!(config.list_catalogs(), [&"a".to_string(), &"b".to_string()]);
    }
}
