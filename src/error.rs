use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while converting recipes
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The recipe document is not valid YAML for the recipe schema
    #[error("Failed to parse recipe: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Reading or writing a file failed
    #[error("Failed to access {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The recipes folder does not exist
    #[error("Recipes folder {} not found", .0.display())]
    MissingFolder(PathBuf),

    /// The template could not be compiled or rendered
    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ConvertError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::IoError {
            path: path.to_path_buf(),
            source,
        }
    }
}
