//! Configuration for TextDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, TextDbError};

/// Default database file used by the binaries
pub const DEFAULT_PATH: &str = "mijn_tekstdatabase.txt";

/// Configuration for opening a RecordStore
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing file for load and save
    pub path: PathBuf,

    /// Start with an empty database instead of reading `path`.
    /// The file is only overwritten on the first save.
    pub create_new: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            create_new: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config can be used to open a store
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(TextDbError::Config("database path is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Start empty instead of loading the existing file
    pub fn create_new(mut self, create_new: bool) -> Self {
        self.config.create_new = create_new;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_PATH));
        assert!(!config.create_new);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder().path("notes.txt").create_new(true).build();
        assert_eq!(config.path, PathBuf::from("notes.txt"));
        assert!(config.create_new);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = Config::builder().path("").build();
        assert!(matches!(config.validate(), Err(TextDbError::Config(_))));
    }
}
