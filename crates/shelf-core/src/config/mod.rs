mod catalog;
mod dirs;
mod validation;

pub use catalog::{Application, Catalog, Category};
pub use dirs::Directories;
