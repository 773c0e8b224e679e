//! Domain models for the upload intake.
//!
//! - [`IntakeFile`] - What the intake needs to know about a file handle
//! - [`CandidateFile`] - Plain in-memory file description
//! - [`Entry`] - One candidate file plus its validation/progress state
//! - [`EntryStatus`] - `Uploading`, `Success` or `Error`
//! - [`FileKind`] - Icon category for display
//! - [`guess_media_type`] - Extension-based media type for local files

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BYTES_PER_MB;
use crate::error::Rejection;
use crate::validation::file_extension;

// =============================================================================
// File Handles
// =============================================================================

/// Read access to the metadata of a selected file.
///
/// The intake never reads file contents, so any opaque handle works:
/// [`CandidateFile`] natively, a `web_sys::File` wrapper in the browser.
pub trait IntakeFile {
    /// File name including its extension.
    fn name(&self) -> &str;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// Best-effort media type, may be empty.
    fn media_type(&self) -> &str;
}

/// A file described by its metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub media_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }
}

impl IntakeFile for CandidateFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }
}

// =============================================================================
// Entries
// =============================================================================

/// Stable identity of an entry, never reused by the same intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validation/progress state of an entry.
///
/// `Success` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Uploading,
    Success,
    Error(Rejection),
}

impl EntryStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EntryStatus::Uploading)
    }

    /// Short lowercase label (`uploading`, `success`, `error`).
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Uploading => "uploading",
            EntryStatus::Success => "success",
            EntryStatus::Error(_) => "error",
        }
    }
}

/// One candidate file under consideration.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<F> {
    pub id: EntryId,
    pub file: F,
    /// Percent in `[0, 100]`.
    pub progress: f64,
    pub status: EntryStatus,
}

impl<F: IntakeFile> Entry<F> {
    /// Rejection reason, present iff the entry is in error.
    pub fn error(&self) -> Option<&Rejection> {
        match &self.status {
            EntryStatus::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// Size in MB with two decimals, e.g. `2.00 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.file.size() as f64 / BYTES_PER_MB as f64)
    }

    pub fn kind(&self) -> FileKind {
        FileKind::of(self.file.media_type())
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

/// Icon category for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
}

impl FileKind {
    pub fn of(media_type: &str) -> Self {
        if media_type.starts_with("image/") {
            FileKind::Image
        } else {
            FileKind::Document
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Image => "🖼️",
            FileKind::Document => "📄",
        }
    }
}

/// Media type for a local file, from its extension. Empty when unknown,
/// like a browser that cannot tell.
pub fn guess_media_type(name: &str) -> &'static str {
    match file_extension(name).as_deref() {
        Some(".pdf") => "application/pdf",
        Some(".jpg") | Some(".jpeg") => "image/jpeg",
        Some(".png") => "image/png",
        Some(".tif") | Some(".tiff") => "image/tiff",
        Some(".dcm") => "application/dicom",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: u64, media_type: &str, status: EntryStatus) -> Entry<CandidateFile> {
        Entry {
            id: EntryId(1),
            file: CandidateFile::new("scan.png", size, media_type),
            progress: 0.0,
            status,
        }
    }

    #[test]
    fn test_size_label() {
        assert_eq!(entry(2 * BYTES_PER_MB, "", EntryStatus::Uploading).size_label(), "2.00 MB");
        assert_eq!(entry(1_572_864, "", EntryStatus::Uploading).size_label(), "1.50 MB");
        assert_eq!(entry(0, "", EntryStatus::Uploading).size_label(), "0.00 MB");
    }

    #[test]
    fn test_error_only_for_error_status() {
        let ok = entry(1, "image/png", EntryStatus::Success);
        assert!(ok.error().is_none());
        assert!(ok.status.is_terminal());

        let reason = Rejection::Oversize { max_size_mb: 10 };
        let bad = entry(1, "image/png", EntryStatus::Error(reason.clone()));
        assert_eq!(bad.error(), Some(&reason));
        assert_eq!(bad.status.label(), "error");
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::of("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::of("application/pdf"), FileKind::Document);
        assert_eq!(FileKind::of(""), FileKind::Document);
    }

    #[test]
    fn test_guess_media_type() {
        assert_eq!(guess_media_type("Report.PDF"), "application/pdf");
        assert_eq!(guess_media_type("slide.jpeg"), "image/jpeg");
        assert_eq!(guess_media_type("slide.svs"), "");
        assert_eq!(guess_media_type("README"), "");
    }
}
