use std::path::PathBuf;

/// Result type alias for envhash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for envhash operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A syntactically malformed include/exclude specification string.
    ///
    /// This is a configuration mistake that has to be fixed by the user;
    /// it is never retried, and a resolution that hits one produces no
    /// partial output.
    #[error("invalid specification '{pattern}': {message}")]
    Specification { pattern: String, message: String },

    /// Configuration errors outside the specification syntax itself
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File system operations (configuration files, snapshot files)
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid-specification error
    #[must_use]
    pub fn specification(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Specification {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}
