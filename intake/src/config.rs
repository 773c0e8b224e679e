//! Intake configuration.
//!
//! Supplied by the embedding form when the widget is created and immutable
//! for its lifetime. Can also be loaded from a JSON file (CLI).
//!
//! ```json
//! { "accept": ".pdf,.jpg", "max_size_mb": 10, "max_files": 5, "multiple": true }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Accept string used when the embedding form gives none.
pub const DEFAULT_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Per-file size limit in MB used when the embedding form gives none.
pub const DEFAULT_MAX_SIZE_MB: u64 = 10;

/// Entry limit used when the embedding form gives none.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Bytes in one configured megabyte.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Wildcard pattern accepting any file type.
pub const WILDCARD: &str = "*";

/// Constraints applied to every candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Comma-separated accepted patterns (`.pdf`, `image/png`, `*`).
    /// Kept verbatim for the rejection message.
    pub accept: String,
    /// Per-file upper bound, in MB.
    pub max_size_mb: u64,
    /// Upper bound on the number of entries.
    pub max_files: usize,
    /// Append new selections instead of replacing the current set.
    pub multiple: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accept: DEFAULT_ACCEPT.to_string(),
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            max_files: DEFAULT_MAX_FILES,
            multiple: false,
        }
    }
}

impl IntakeConfig {
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn with_max_size_mb(mut self, max_size_mb: u64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Load and check a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations under which no file could ever be accepted.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_files == 0 {
            return Err(ConfigError::NoFileSlots);
        }
        if self.patterns().next().is_none() {
            return Err(ConfigError::EmptyAccept(self.accept.clone()));
        }
        Ok(())
    }

    /// Accepted patterns in configured order, trimmed, empty items skipped.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.accept
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// How many files of one selection event are considered.
    pub fn selection_limit(&self) -> usize {
        if self.multiple {
            self.max_files
        } else {
            1
        }
    }

    /// Drop-zone hint, e.g. `.pdf, .jpg up to 10MB (max 5 files)`.
    pub fn hint(&self) -> String {
        let types = self.patterns().collect::<Vec<_>>().join(", ");
        let mut hint = format!("{} up to {}MB", types, self.max_size_mb);
        if self.multiple {
            hint.push_str(&format!(" (max {} files)", self.max_files));
        }
        hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = IntakeConfig::default();
        assert_eq!(config.accept, ".pdf,.jpg,.jpeg,.png");
        assert_eq!(config.max_size_bytes(), 10 * 1_048_576);
        assert_eq!(config.max_files, 5);
        assert!(!config.multiple);
        assert_eq!(config.selection_limit(), 1);
    }

    #[test]
    fn test_patterns_are_trimmed() {
        let config = IntakeConfig::default().with_accept(" .pdf , image/png,,*");
        let patterns: Vec<_> = config.patterns().collect();
        assert_eq!(patterns, vec![".pdf", "image/png", "*"]);
    }

    #[test]
    fn test_hint() {
        let single = IntakeConfig::default();
        assert_eq!(single.hint(), ".pdf, .jpg, .jpeg, .png up to 10MB");

        let multi = IntakeConfig::default()
            .with_accept(".svs,.ndpi")
            .with_max_files(3)
            .with_multiple(true);
        assert_eq!(multi.hint(), ".svs, .ndpi up to 10MB (max 3 files)");
    }

    #[test]
    fn test_validate() {
        assert!(IntakeConfig::default().validate().is_ok());
        assert!(matches!(
            IntakeConfig::default().with_max_files(0).validate(),
            Err(ConfigError::NoFileSlots)
        ));
        assert!(matches!(
            IntakeConfig::default().with_accept(" , ").validate(),
            Err(ConfigError::EmptyAccept(_))
        ));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "accept": ".pdf,.jpg", "multiple": true }}"#).unwrap();

        let config = IntakeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.accept, ".pdf,.jpg");
        assert!(config.multiple);
        assert_eq!(config.max_size_mb, DEFAULT_MAX_SIZE_MB);
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn test_from_file_rejects_zero_slots() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_files": 0 }}"#).unwrap();

        let result = IntakeConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::NoFileSlots)));
    }
}
