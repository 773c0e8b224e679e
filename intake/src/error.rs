//! Error types for the upload intake.
//!
//! - [`Rejection`] - Why a single candidate file was refused. Carried as data
//!   on its [`Entry`](crate::Entry), never returned to the embedding form.
//! - [`ConfigError`] - Invalid or unreadable intake configuration.

use thiserror::Error;

// =============================================================================
// Rejections
// =============================================================================

/// Reason a candidate file was refused by the validator.
///
/// The `Display` output is the user-visible message shown next to the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// File is larger than the configured limit.
    #[error("File size exceeds {max_size_mb}MB limit")]
    Oversize { max_size_mb: u64 },

    /// Neither the extension nor the media type matches an accepted pattern.
    #[error("File type not accepted. Accepted types: {accept}")]
    UnsupportedType { accept: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading or checking an [`IntakeConfig`](crate::IntakeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema.
    #[error("Invalid config JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// `max_files` must allow at least one entry.
    #[error("max_files must be at least 1")]
    NoFileSlots,

    /// The accept string holds no usable pattern.
    #[error("No accepted file types in '{0}'")]
    EmptyAccept(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let oversize = Rejection::Oversize { max_size_mb: 10 };
        assert_eq!(oversize.to_string(), "File size exceeds 10MB limit");

        let unsupported = Rejection::UnsupportedType {
            accept: ".pdf,.jpg".into(),
        };
        assert_eq!(
            unsupported.to_string(),
            "File type not accepted. Accepted types: .pdf,.jpg"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(err.to_string().starts_with("Invalid config JSON"));
    }
}
