//! Candidate file validation.
//!
//! A file is accepted when it fits the size limit and at least one accepted
//! pattern matches it. Checks run in order:
//!
//! 1. Size: `size > max_size_mb * 1_048_576` is rejected.
//! 2. Type: a pattern matches when it equals the lower-cased extension
//!    (`.pdf`), equals the media type exactly (`image/png`), or is `*`.
//!
//! # Example
//!
//! ```rust
//! use intake::{validate, CandidateFile, IntakeConfig, Rejection};
//!
//! let config = IntakeConfig::default().with_accept(".pdf,.jpg");
//! let scan = CandidateFile::new("Scan.JPG", 1024, "image/jpeg");
//! assert!(validate(&scan, &config).is_ok());
//!
//! let photo = CandidateFile::new("photo.png", 1024, "image/png");
//! assert!(matches!(validate(&photo, &config), Err(Rejection::UnsupportedType { .. })));
//! ```

use crate::config::{IntakeConfig, WILDCARD};
use crate::error::Rejection;
use crate::models::IntakeFile;

/// Check one file against the active configuration.
pub fn validate<F: IntakeFile + ?Sized>(file: &F, config: &IntakeConfig) -> Result<(), Rejection> {
    if file.size() > config.max_size_bytes() {
        return Err(Rejection::Oversize {
            max_size_mb: config.max_size_mb,
        });
    }

    if !is_type_accepted(file.name(), file.media_type(), config) {
        return Err(Rejection::UnsupportedType {
            accept: config.accept.clone(),
        });
    }

    Ok(())
}

/// Quick check: true when [`validate`] would accept.
pub fn is_accepted<F: IntakeFile + ?Sized>(file: &F, config: &IntakeConfig) -> bool {
    validate(file, config).is_ok()
}

/// Extension of `name` as `.ext`, lower-cased.
///
/// `None` when the name has no `.`; such files only pass through a media
/// type or wildcard pattern.
pub fn file_extension(name: &str) -> Option<String> {
    name.rfind('.')
        .map(|dot| format!(".{}", name[dot + 1..].to_lowercase()))
}

fn is_type_accepted(name: &str, media_type: &str, config: &IntakeConfig) -> bool {
    let extension = file_extension(name);
    config.patterns().any(|pattern| {
        pattern == WILDCARD
            || extension.as_deref() == Some(pattern)
            || pattern == media_type
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateFile;

    const MB: u64 = 1024 * 1024;

    fn scenario_config() -> IntakeConfig {
        IntakeConfig::default()
            .with_accept(".pdf,.jpg")
            .with_max_size_mb(10)
            .with_max_files(5)
            .with_multiple(true)
    }

    #[test]
    fn test_oversize_rejected() {
        let file = CandidateFile::new("report.pdf", 12 * MB, "application/pdf");
        let result = validate(&file, &scenario_config());
        assert_eq!(result, Err(Rejection::Oversize { max_size_mb: 10 }));
        assert_eq!(result.unwrap_err().to_string(), "File size exceeds 10MB limit");
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let config = scenario_config();
        assert!(is_accepted(&CandidateFile::new("a.pdf", 10 * MB, ""), &config));
        assert!(!is_accepted(&CandidateFile::new("a.pdf", 10 * MB + 1, ""), &config));
    }

    #[test]
    fn test_size_checked_before_type() {
        let file = CandidateFile::new("huge.exe", 50 * MB, "");
        assert!(matches!(
            validate(&file, &scenario_config()),
            Err(Rejection::Oversize { .. })
        ));
    }

    #[test]
    fn test_unsupported_type_rejected() {
        let file = CandidateFile::new("slide.png", 2 * MB, "image/png");
        let err = validate(&file, &scenario_config()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File type not accepted. Accepted types: .pdf,.jpg"
        );
    }

    #[test]
    fn test_message_keeps_accept_verbatim() {
        let config = IntakeConfig::default().with_accept(".pdf, .jpg");
        let err = validate(&CandidateFile::new("a.png", 1, ""), &config).unwrap_err();
        assert_eq!(err, Rejection::UnsupportedType { accept: ".pdf, .jpg".into() });
    }

    #[test]
    fn test_extension_case_insensitive() {
        let file = CandidateFile::new("REPORT.PDF", MB, "");
        assert!(is_accepted(&file, &scenario_config()));
    }

    #[test]
    fn test_media_type_match_is_exact() {
        let config = IntakeConfig::default().with_accept("image/png");
        assert!(is_accepted(&CandidateFile::new("scan", 1, "image/png"), &config));
        assert!(!is_accepted(&CandidateFile::new("scan", 1, "IMAGE/PNG"), &config));
    }

    #[test]
    fn test_wildcard_accepts_anything() {
        let config = IntakeConfig::default().with_accept("*");
        assert!(is_accepted(&CandidateFile::new("README", 1, ""), &config));
        assert!(is_accepted(&CandidateFile::new("a.xyz", 1, "x/y"), &config));
    }

    #[test]
    fn test_no_extension_never_matches_extension_pattern() {
        let config = IntakeConfig::default().with_accept(".pdf,.readme");
        assert!(!is_accepted(&CandidateFile::new("readme", 1, ""), &config));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.tar.GZ").as_deref(), Some(".gz"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), Some(".".to_string()));
        assert_eq!(file_extension(".hidden").as_deref(), Some(".hidden"));
    }
}
