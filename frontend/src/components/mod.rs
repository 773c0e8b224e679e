//! UI Components for the SecondOpinion frontend.
//!
//! # Feature Components
//! - [`FileUpload`] - File intake with drag & drop and simulated progress
//! - [`ProgressBar`] - Per-file upload progress
//! - [`DocumentsStep`] - New-case documents step embedding the widget

mod upload;
mod progress;
mod documents;

pub use upload::*;
pub use progress::*;
pub use documents::*;
