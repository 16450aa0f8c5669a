//! Error handling for the Kothi plugin generator.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for plugin generation.
///
/// Every failure in the generator propagates unmodified (aside from wrapping)
/// to the caller; nothing is caught or retried inside the library.
#[derive(Error, Debug)]
pub enum Error {
    /// The plugin name does not match the allowed `kebab-case` pattern.
    #[error("Invalid plugin name '{name}': use lowercase letters, digits and single hyphens (e.g. payment-gateway).")]
    InvalidName { name: String },

    /// Represents errors that occur during file system operations
    #[error("Filesystem error at '{}': {source}.", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The plugin directory exists and overwriting it was not confirmed.
    #[error("Plugin directory '{}' already exists. Use --force to overwrite it.", .plugin_dir.display())]
    PluginExists { plugin_dir: PathBuf },

    /// Represents errors that occur during project configuration parsing
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Interactive confirmation could not be completed.
    #[error("Prompt error: {0}.")]
    Prompt(String),

    /// Any other unexpected failure, e.g. from rendering or serializing an artifact.
    #[error("Unexpected error: {0}.")]
    Unknown(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an I/O error together with the path it happened at.
    pub fn file_system<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Unknown(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unknown(Box::new(err))
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Failed to generate plugin: {err}");
    std::process::exit(1);
}
