//! Error types for mapping-file I/O and engine configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from importing or exporting a mapping file.
#[derive(Debug, Error)]
pub enum MappingFileError {
    /// The mapping file does not exist.
    #[error("mapping file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file is not a profile-field -> variant-list document.
    #[error("failed to parse mapping file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The table could not be encoded as JSON.
    #[error("failed to serialize mappings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other file-system failure.
    #[error("failed to {operation} mapping file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temp file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MappingFileError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
}

/// Result type for mapping-file operations.
pub type Result<T> = std::result::Result<T, MappingFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingFileError::NotFound {
            path: PathBuf::from("/tmp/mappings.json"),
        };
        assert_eq!(err.to_string(), "mapping file not found: /tmp/mappings.json");

        let err = ConfigError::ThresholdOutOfRange {
            name: "fuzzy_threshold",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "fuzzy_threshold must be within [0, 1], got 1.5");
    }
}
