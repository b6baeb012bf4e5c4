//! Category table configuration.
//!
//! The binary always sorts with the built-in table. Library users can describe
//! their own table in TOML and turn it into a [`CategoryTable`]:
//!
//! ```toml
//! [categories]
//! Image = [".jpg", ".png", ".heic"]
//! Documents = [".txt", ".md"]
//! Book = [".epub"]
//! ```
//!
//! Keys must be category names (`Other` excluded, it is the fallback), and
//! every extension needs a leading dot. Extensions are lowercased on load.

use crate::file_category::{Category, CategoryTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a category configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Invalid TOML syntax or structure.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// A key under `[categories]` is not a category name.
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// An extension is missing its leading dot or is otherwise malformed.
    #[error("Invalid extension '{extension}' for category {category:?}: expected a leading dot")]
    InvalidExtension {
        category: Category,
        extension: String,
    },

    /// `Other` is the fallback and cannot own extensions.
    #[error("The Other category cannot list extensions")]
    OtherHasExtensions,

    /// The same extension is claimed by two categories.
    #[error("Extension '{extension}' is listed under both {first:?} and {second:?}")]
    DuplicateExtension {
        extension: String,
        first: Category,
        second: Category,
    },

    /// IO error while reading configuration.
    #[error("IO error reading configuration: {0}")]
    IoError(#[from] std::io::Error),
}

/// TOML description of a category table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryConfig {
    /// Extensions per category.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl CategoryConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if the file does not exist,
    /// `ConfigError::IoError` if it cannot be read and
    /// `ConfigError::ConfigInvalid` if TOML parsing fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validates the configuration and builds the table it describes.
    pub fn into_table(self) -> Result<CategoryTable, ConfigError> {
        let mut table = CategoryTable::empty();
        let mut owners: BTreeMap<String, Category> = BTreeMap::new();

        for (name, extensions) in self.categories {
            let category =
                Category::from_dir_name(&name).ok_or(ConfigError::UnknownCategory(name))?;
            if category == Category::Other {
                if extensions.is_empty() {
                    continue;
                }
                return Err(ConfigError::OtherHasExtensions);
            }

            let mut lowered = Vec::with_capacity(extensions.len());
            for extension in extensions {
                let ext = extension.trim().to_lowercase();
                if ext.len() < 2 || !ext.starts_with('.') {
                    return Err(ConfigError::InvalidExtension {
                        category,
                        extension,
                    });
                }
                if let Some(&first) = owners.get(&ext) {
                    if first != category {
                        return Err(ConfigError::DuplicateExtension {
                            extension: ext,
                            first,
                            second: category,
                        });
                    }
                    continue;
                }
                owners.insert(ext.clone(), category);
                lowered.push(ext);
            }

            let refs: Vec<&str> = lowered.iter().map(String::as_str).collect();
            table.add_extensions(category, &refs);
        }

        Ok(table)
    }
}
