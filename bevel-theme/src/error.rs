//! # Theme Error Types
//!
//! Error types for theme resolution and look configuration. Most failures in this
//! crate are recovered locally (logged, then a built-in theme is used); only
//! [ThemeError::InvalidArgument] is meant to stop the calling operation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// A caller broke the contract of an operation, e.g. installed no theme.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// The look configuration file could not be read.
    #[error("Failed to read look configuration {path:?}: {source}")]
    ConfigRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the look configuration file.
    #[error("Failed to parse look configuration {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A color value was not a valid `#rrggbb` or `#rrggbbaa` string.
    #[error("Invalid color value '{value}'")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration read error.
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration parse error.
    pub fn config_parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}
