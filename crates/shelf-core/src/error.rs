use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file '{}' not found.", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Config file '{}' contains invalid JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file '{}' is invalid at {location}: {problem}", .path.display())]
    ConfigSchema {
        path: PathBuf,
        location: String,
        problem: String,
    },

    #[error("Config file '{}' could not be read: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Application path '{path}' not found.")]
    LaunchNotFound { path: String },

    #[error("Failed to launch application '{path}': {source}")]
    Launch {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Short heading for user-facing notifications
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Error::ConfigNotFound { .. } => "Config Not Found",
            Error::ConfigParse { .. } => "Invalid Config",
            Error::ConfigSchema { .. } => "Config Schema Error",
            Error::ConfigRead { .. } => "Config Unreadable",
            Error::LaunchNotFound { .. } => "Application Not Found",
            Error::Launch { .. } => "Launch Failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
