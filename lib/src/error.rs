/// Error type for the linkboard library
///
/// Parsing of Netscape HTML never fails; only the JSON path, file access,
/// configuration and export surface errors through this enum.
#[derive(Debug, thiserror::Error)]
pub enum LinkboardError {
    /// The JSON import file does not parse or lacks a `boards` array
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    /// I/O errors (reading import files, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors (unsupported target, serialization)
    #[error("Export error: {0}")]
    Export(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using LinkboardError
pub type Result<T> = std::result::Result<T, LinkboardError>;

impl From<String> for LinkboardError {
    fn from(s: String) -> Self {
        LinkboardError::Other(s)
    }
}

impl From<&str> for LinkboardError {
    fn from(s: &str) -> Self {
        LinkboardError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for LinkboardError {
    fn from(err: serde_yaml::Error) -> Self {
        LinkboardError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for LinkboardError {
    fn from(err: serde_json::Error) -> Self {
        LinkboardError::Json(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkboardError {
    fn from(err: toml::ser::Error) -> Self {
        LinkboardError::Toml(err.to_string())
    }
}
