//! Launcher state shared by every frontend

use crate::catalog::{self, CatalogView, Registry};
use crate::config::{Catalog, Directories};
use crate::{Result, launcher};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owns the view, the registry built into it, and the current search query.
pub struct Shell<V: CatalogView> {
    view: V,
    registry: Registry<V::Element>,
    catalog: Catalog,
    query: String,
    source: Option<PathBuf>,
}

impl<V: CatalogView> Shell<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            registry: Registry::new(),
            catalog: Catalog::default(),
            query: String::new(),
            source: None,
        }
    }

    /// Load the catalog at `path` and rebuild the view from it.
    ///
    /// On failure the current view and registry are left exactly as they were.
    /// On success the current query is re-applied to the new buttons. Returns
    /// the number of applications now shown in the catalog.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Catalog::load`].
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let catalog = Catalog::load(path).inspect_err(|e| {
            warn!("Keeping current catalog: {e}");
        })?;

        self.replace(catalog);
        self.source = Some(path.to_path_buf());
        Ok(self.registry.len())
    }

    /// Load the first default catalog found in `dirs`, if any.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Catalog::load`] for the discovered file.
    pub fn load_default(&mut self, dirs: &Directories) -> Result<Option<usize>> {
        let Some(path) = dirs.default_catalog() else {
            info!("No default catalog found, starting empty");
            return Ok(None);
        };

        debug!("Loading default catalog from {}", path.display());
        self.load(&path).map(Some)
    }

    /// Install an already parsed catalog.
    pub fn replace(&mut self, catalog: Catalog) {
        self.registry = catalog::build(&mut self.view, &catalog);
        self.catalog = catalog;
        if !self.query.is_empty() {
            catalog::filter(&self.view, &self.registry, &self.query);
        }
    }

    /// Apply a new search query. Returns the number of visible entries.
    pub fn search(&mut self, query: &str) -> usize {
        query.clone_into(&mut self.query);
        catalog::filter(&self.view, &self.registry, query)
    }

    /// Launch the application behind registry entry `index`.
    ///
    /// An index past the end of the registry launches nothing.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`launcher::launch`].
    pub fn launch(&self, index: usize) -> Result<()> {
        let Some(app) = self
            .catalog
            .categories
            .iter()
            .flat_map(|c| &c.applications)
            .nth(index)
        else {
            debug!("No application at index {index}, nothing to launch");
            return Ok(());
        };

        launcher::launch(app)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry<V::Element> {
        &self.registry
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// File the current catalog was loaded from
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}
