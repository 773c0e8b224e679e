//! Client-side services.
//!
//! # Services
//!
//! - [`ticker`] - Timer tasks driving simulated upload progress

pub mod ticker;

pub use ticker::*;
