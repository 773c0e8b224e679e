//! SecondOpinion - Frontend Rust/Leptos Application
//!
//! A WebAssembly front end for submitting pathology documents for a second
//! opinion. Uploads are simulated client-side; nothing leaves the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DocumentsStep                                               │
//! │  ├── FileUpload (pathology report, single file)             │
//! │  └── FileUpload (slides, multiple files, when available)    │
//! │        └── UploadIntake (intake crate) + tick tasks         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file handles and entry view snapshots
//! - [`components`] - UI components (FileUpload, ProgressBar, DocumentsStep)
//! - [`services`] - Simulated upload tick driver

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{files_from_list, BrowserFile, EntryView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root view, mounted by the binary's `main`.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <h1 class="app-title">{APP_NAME}</h1>
                <Routes>
                    <Route path="/" view=DocumentsStep/>
                </Routes>
            </main>
        </Router>
    }
}
