//! Application configuration.
//!
//! Centralized constants for the SecondOpinion frontend. Widget limits
//! themselves come from [`intake::IntakeConfig`] presets.

/// Application name shown in the page header.
pub const APP_NAME: &str = "SecondOpinion";

/// Milliseconds between two simulated progress ticks.
pub const TICK_INTERVAL_MS: u32 = intake::TICK_INTERVAL_MS;

/// Element id of the pathology report picker.
pub const REPORT_INPUT_ID: &str = "report-upload";

/// Element id of the slide picker.
pub const SLIDE_INPUT_ID: &str = "slide-upload";
