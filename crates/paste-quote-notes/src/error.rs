//! Error types for paste-quote-notes

use paste_quote_core::CoreError;
use thiserror::Error;

/// Result type alias for note operations
pub type Result<T> = std::result::Result<T, NotesError>;

/// Main error type for note and settings operations
#[derive(Error, Debug)]
pub enum NotesError {
    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter is not valid YAML
    #[error("Front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// The bibliography field has the wrong shape
    #[error("Invalid bibliography: {message}")]
    InvalidBibliography { message: String },

    /// Settings file could not be parsed
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("Settings write error: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    /// Error from the core pipeline
    #[error(transparent)]
    Core(#[from] CoreError),
}
