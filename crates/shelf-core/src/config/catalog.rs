use super::validation;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Label used for catalogs parsed from memory rather than a file
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Ordered list of categories read from a catalog file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// A named group of applications, rendered as one panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub applications: Vec<Application>,
}

/// A launchable program: display name, executable path and argument string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub path: String,
    /// Space-separated tokens, split at launch time
    pub arguments: String,
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            arguments: arguments.into(),
        }
    }

    /// Argument tokens passed to the executable.
    ///
    /// Tokens are separated by whitespace; there is no quoting, so an argument
    /// can never contain a space.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        self.arguments.split_whitespace()
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if nothing exists at `path`
    /// - [`Error::ConfigRead`] if the file exists but cannot be read
    /// - [`Error::ConfigParse`] if the content is not valid JSON
    /// - [`Error::ConfigSchema`] if a required field is missing or mistyped
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let catalog = Self::parse(&content, path)?;
        info!(
            "Loaded {} categories ({} applications) from {}",
            catalog.categories.len(),
            catalog.application_count(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from an in-memory JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] or [`Error::ConfigSchema`] as [`Catalog::load`] does.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content.as_bytes(), Path::new(IN_MEMORY_SOURCE))
    }

    fn parse(content: &[u8], path: &Path) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(content).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        validation::check_schema(&value).map_err(|violation| Error::ConfigSchema {
            path: path.to_path_buf(),
            location: violation.location,
            problem: violation.problem,
        })?;

        let source_name = path.display().to_string();
        validation::warn_unknown_fields(&value, &source_name);

        // The schema check above covers every field serde needs, so this only
        // fails if the two drift apart.
        serde_json::from_value(value).map_err(|e| {
            debug!("Catalog passed schema check but failed to deserialize: {e}");
            Error::ConfigSchema {
                path: path.to_path_buf(),
                location: "$".to_string(),
                problem: e.to_string(),
            }
        })
    }

    /// Total number of applications across all categories
    #[must_use]
    pub fn application_count(&self) -> usize {
        self.categories.iter().map(|c| c.applications.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
