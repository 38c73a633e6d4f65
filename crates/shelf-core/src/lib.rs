pub mod catalog;
pub mod config;
pub mod launcher;

mod error;
mod shell;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogView, Registry, RegistryEntry, build, filter};
pub use config::{Application, Catalog, Category, Directories};
pub use error::{Error, Result};
pub use launcher::launch;
pub use shell::Shell;
