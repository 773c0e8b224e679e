//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser file handles usable by the intake
//! - **View Types** - Render snapshots of intake entries

use intake::{Entry, EntryId, FileKind, IntakeFile};
use web_sys::{File, FileList};

// =============================================================================
// File Types
// =============================================================================

/// A browser `File` with its metadata read once.
///
/// `web_sys::File` getters return owned values, so name and media type are
/// cached to satisfy [`IntakeFile`]'s borrowed accessors. Equality compares
/// the handle too, so two picks of same-named files stay distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile {
    file: File,
    name: String,
    size: u64,
    media_type: String,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        let name = file.name();
        let size = file.size().max(0.0) as u64;
        let media_type = file.type_();
        Self {
            file,
            name,
            size,
            media_type,
        }
    }
}

impl IntakeFile for BrowserFile {
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

/// Files of a picker or drop, in the order the browser gives them.
pub fn files_from_list(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::new)
        .collect()
}

// =============================================================================
// View Types
// =============================================================================

/// Render snapshot of one intake entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryView {
    pub id: EntryId,
    pub name: String,
    pub size_label: String,
    pub kind: FileKind,
    pub progress: f64,
    /// `uploading`, `success` or `error`
    pub status: &'static str,
    pub error: Option<String>,
}

impl<F: IntakeFile> From<&Entry<F>> for EntryView {
    fn from(entry: &Entry<F>) -> Self {
        Self {
            id: entry.id,
            name: entry.file.name().to_string(),
            size_label: entry.size_label(),
            kind: entry.kind(),
            progress: entry.progress,
            status: entry.status.label(),
            error: entry.error().map(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake::{CandidateFile, EntryStatus, Rejection};

    #[test]
    fn test_entry_view_from_error_entry() {
        let entry = Entry {
            id: EntryId(3),
            file: CandidateFile::new("slide.png", 2 * 1024 * 1024, "image/png"),
            progress: 0.0,
            status: EntryStatus::Error(Rejection::UnsupportedType {
                accept: ".pdf".into(),
            }),
        };

        let view = EntryView::from(&entry);
        assert_eq!(view.id, EntryId(3));
        assert_eq!(view.size_label, "2.00 MB");
        assert_eq!(view.kind, FileKind::Image);
        assert_eq!(view.status, "error");
        assert_eq!(
            view.error.as_deref(),
            Some("File type not accepted. Accepted types: .pdf")
        );
    }
}
