//! # Intake - file intake for second opinion referrals
//!
//! Accepts candidate files from a picker or a drop, validates each against
//! size/type constraints, and tracks a simulated upload progress per file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selection  │────▶│  Validator  │────▶│   Entries   │────▶│  Listener   │
//! │ (pick/drop) │     │ (size/type) │     │ (≤ max)     │     │ (file set)  │
//! └─────────────┘     └─────────────┘     └──────┬──────┘     └─────────────┘
//!                                                │ tick(id)
//!                                         ┌──────▼──────┐
//!                                         │  Progress   │
//!                                         │   Source    │
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use intake::{CandidateFile, FixedStep, IntakeConfig, Tick, UploadIntake};
//!
//! let config = IntakeConfig::default().with_accept(".pdf,.jpg").with_multiple(true);
//! let mut intake = UploadIntake::with_progress(config, FixedStep(25.0));
//!
//! let started = intake.select([CandidateFile::new("report.pdf", 1024, "application/pdf")]);
//! while intake.tick(started[0]) != Tick::Completed {}
//! assert!(intake.is_settled());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Rejection reasons and config errors
//! - [`config`] - Intake configuration
//! - [`models`] - Entries and file handles
//! - [`validation`] - Size/type validator
//! - [`progress`] - Simulated progress sources
//! - [`intake`](crate::intake) - The intake state object
//! - [`presets`] - Configurations used by the new-case form

// Core modules
pub mod error;
pub mod config;
pub mod models;

// Rules
pub mod validation;
pub mod progress;

// State
pub mod intake;
pub mod presets;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, Rejection};

pub use config::{IntakeConfig, BYTES_PER_MB, DEFAULT_ACCEPT, DEFAULT_MAX_FILES, DEFAULT_MAX_SIZE_MB};

pub use models::{
    guess_media_type,
    CandidateFile,
    Entry,
    EntryId,
    EntryStatus,
    FileKind,
    IntakeFile,
};

pub use validation::{file_extension, is_accepted, validate};

pub use progress::{
    FixedStep,
    ProgressSource,
    RandomProgress,
    Scripted,
    Tick,
    COMPLETE,
    TICK_INTERVAL_MS,
};

pub use crate::intake::{FilesListener, UploadIntake};

pub use presets::{SlideAvailability, SlideSource};
