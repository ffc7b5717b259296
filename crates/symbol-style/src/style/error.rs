//! Style sheet loading errors.

use std::path::PathBuf;

/// Error returned when a style sheet cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The sheet file could not be read.
    #[error("failed to read style sheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sheet is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The sheet is not valid YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension does not name a supported format.
    #[error("unsupported style sheet format '{extension}' (expected json, yaml or yml)")]
    UnsupportedFormat { extension: String },
    /// The document parsed but is not shaped like a style sheet.
    #[error("invalid style sheet: {0}")]
    Invalid(String),
}
