use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the config directory
pub const DEFAULT_CATALOG_FILE: &str = "config.json";

/// Places where a default catalog may live
#[derive(Debug, Clone)]
pub struct Directories {
    /// Working directory catalog (./config.json)
    pub local_catalog: PathBuf,

    /// Config directory (~/.config/shelf), if the platform has one
    pub config: Option<PathBuf>,
}

impl Directories {
    /// Standard locations: the working directory first, then XDG config.
    #[must_use]
    pub fn new() -> Self {
        let config = ProjectDirs::from("", "", "shelf").map(|p| p.config_dir().to_path_buf());

        Self {
            local_catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
            config,
        }
    }

    #[must_use]
    pub fn with_base(base: &Path) -> Self {
        Self {
            local_catalog: base.join(DEFAULT_CATALOG_FILE),
            config: Some(base.join("config")),
        }
    }

    /// Catalog file inside the config directory
    #[must_use]
    pub fn user_catalog(&self) -> Option<PathBuf> {
        self.config.as_ref().map(|dir| dir.join(DEFAULT_CATALOG_FILE))
    }

    /// First catalog file that exists, in lookup order.
    ///
    /// Returns `None` when no default catalog is present; that is not an error.
    #[must_use]
    pub fn default_catalog(&self) -> Option<PathBuf> {
        std::iter::once(self.local_catalog.clone())
            .chain(self.user_catalog())
            .find(|path| path.is_file())
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
