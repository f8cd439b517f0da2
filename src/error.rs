//! Error handling for spray-forge

use thiserror::Error;

/// Main error type for spray-forge
#[derive(Error, Debug, Clone)]
pub enum SprayForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration conflict: {message}")]
    ConfigurationConflict { message: String },

    #[error("Missing input '{path}': {message}")]
    MissingInput { path: String, message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        broken_pipe: bool,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SprayForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConfigurationConflict {
            message: message.into(),
        }
    }

    /// Create a missing input error
    pub fn missing_input(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
            broken_pipe: false,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Attach a path to an IO error that was converted without one
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::Io {
                message,
                path: None,
                broken_pipe,
            } => Self::Io {
                message,
                path: Some(path.into()),
                broken_pipe,
            },
            other => other,
        }
    }

    /// True when the reading end of the output went away (e.g. `| head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io { broken_pipe: true, .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("Configuration problem: {}\nhint: run with --help for usage", message)
            }
            Self::ConfigurationConflict { message } => {
                format!(
                    "{}\nhint: pass exactly one of --pattern or --patterns-file",
                    message
                )
            }
            Self::MissingInput { path, message } => {
                format!("Could not read '{}': {}", path, message)
            }
            Self::Io { message, path, .. } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("File error{}: {}\nhint: check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("Internal error: {}\nhint: this is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for SprayForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
            broken_pipe: err.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

impl From<regex::Error> for SprayForgeError {
    fn from(err: regex::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SprayForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::SprayForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SprayForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! conflict_error {
    ($msg:expr) => {
        $crate::error::SprayForgeError::conflict($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SprayForgeError::conflict(format!($fmt, $($arg)*))
    };
}
