//! Intake presets used by the new-case form's documents step.
//!
//! - Pathology report: one file, PDF or image.
//! - Slides: several files; glass slide photos or digital whole-slide images
//!   depending on what the patient has.

use serde::{Deserialize, Serialize};

use crate::config::{IntakeConfig, DEFAULT_ACCEPT};

/// Accepted types for photographed glass slides.
pub const GLASS_IMAGE_ACCEPT: &str = ".jpg,.jpeg,.png";

/// Accepted types for whole-slide imaging files.
pub const DIGITAL_WSI_ACCEPT: &str = ".svs,.ndpi,.dcm";

/// What the patient answered to "Do you have glass slides or digital slides?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideAvailability {
    /// Report only, no slides.
    ReportOnly,
    /// Slides must first be retrieved from the lab.
    NeedSlides,
    /// Physical glass slides.
    HaveGlass,
    /// Digital slides (WSI).
    HaveDigital,
}

impl SlideAvailability {
    pub const ALL: [SlideAvailability; 4] = [
        SlideAvailability::ReportOnly,
        SlideAvailability::NeedSlides,
        SlideAvailability::HaveGlass,
        SlideAvailability::HaveDigital,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SlideAvailability::ReportOnly => "Report only (no slides)",
            SlideAvailability::NeedSlides => "I need to retrieve glass slides from lab",
            SlideAvailability::HaveGlass => "I have glass slides",
            SlideAvailability::HaveDigital => "I have digital slides (WSI)",
        }
    }

    /// Form value, e.g. `have-glass`.
    pub fn value(&self) -> &'static str {
        match self {
            SlideAvailability::ReportOnly => "report-only",
            SlideAvailability::NeedSlides => "need-slides",
            SlideAvailability::HaveGlass => "have-glass",
            SlideAvailability::HaveDigital => "have-digital",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }

    /// Which slide upload to offer, if any.
    pub fn slide_source(&self) -> Option<SlideSource> {
        match self {
            SlideAvailability::HaveGlass => Some(SlideSource::GlassImages),
            SlideAvailability::HaveDigital => Some(SlideSource::DigitalWsi),
            SlideAvailability::ReportOnly | SlideAvailability::NeedSlides => None,
        }
    }

    /// Only glass slide holders can book the pickup add-on.
    pub fn offers_pickup(&self) -> bool {
        matches!(self, SlideAvailability::HaveGlass)
    }
}

/// Kind of slide files being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSource {
    GlassImages,
    DigitalWsi,
}

impl SlideSource {
    pub fn accept(&self) -> &'static str {
        match self {
            SlideSource::GlassImages => GLASS_IMAGE_ACCEPT,
            SlideSource::DigitalWsi => DIGITAL_WSI_ACCEPT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlideSource::GlassImages => "Glass Slide Images",
            SlideSource::DigitalWsi => "Digital Slides (WSI)",
        }
    }
}

impl IntakeConfig {
    /// Single pathology report.
    pub fn pathology_report() -> Self {
        IntakeConfig::default()
            .with_accept(DEFAULT_ACCEPT)
            .with_multiple(false)
    }

    /// Multiple slide files of the given kind.
    pub fn slides(source: SlideSource) -> Self {
        IntakeConfig::default()
            .with_accept(source.accept())
            .with_multiple(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateFile;
    use crate::validation::is_accepted;

    #[test]
    fn test_report_preset() {
        let config = IntakeConfig::pathology_report();
        assert!(!config.multiple);
        assert!(is_accepted(&CandidateFile::new("report.pdf", 1024, ""), &config));
        assert!(!is_accepted(&CandidateFile::new("slide.svs", 1024, ""), &config));
    }

    #[test]
    fn test_slide_presets() {
        let digital = IntakeConfig::slides(SlideSource::DigitalWsi);
        assert!(digital.multiple);
        assert!(is_accepted(&CandidateFile::new("case.NDPI", 1024, ""), &digital));
        assert!(!is_accepted(&CandidateFile::new("case.png", 1024, "image/png"), &digital));

        let glass = IntakeConfig::slides(SlideSource::GlassImages);
        assert!(is_accepted(&CandidateFile::new("slide.jpeg", 1024, "image/jpeg"), &glass));
    }

    #[test]
    fn test_availability() {
        assert_eq!(SlideAvailability::from_value("have-digital"), Some(SlideAvailability::HaveDigital));
        assert_eq!(SlideAvailability::from_value("nope"), None);
        assert_eq!(SlideAvailability::ReportOnly.slide_source(), None);
        assert_eq!(SlideAvailability::NeedSlides.slide_source(), None);
        assert_eq!(SlideAvailability::HaveGlass.slide_source(), Some(SlideSource::GlassImages));
        assert!(SlideAvailability::HaveGlass.offers_pickup());
        assert!(!SlideAvailability::HaveDigital.offers_pickup());

        for a in SlideAvailability::ALL {
            assert_eq!(SlideAvailability::from_value(a.value()), Some(a));
        }
    }

    #[test]
    fn test_availability_serde() {
        let json = serde_json::to_string(&SlideAvailability::HaveGlass).unwrap();
        assert_eq!(json, "\"have-glass\"");
    }
}
