//! Plagium Detector - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting source files to the plagium core
//! and displaying the pairwise similarity report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── PlagiarismForm (file slots, submit)                    │
//! │  └── ResultsPanel (#results-container)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileSlot, ReportEntry, AppError)
//! - [`state`] - Form model (slots, request tickets, results view)
//! - [`components`] - UI components (Hero, PlagiarismForm, ResultsPanel)
//! - [`services`] - Plagium core communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    FileSlot,
    // API
    ProcessResponse, ReportEntry,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{FormController, RequestSequence, RequestTicket, ResultsView, SlotList};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Plagium Detector - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Plagium Detector"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single source of truth for slots and results
    let controller = create_rw_signal(FormController::new());

    view! {
        <div class="container">
            <Hero/>
            <PlagiarismForm controller=controller/>
            <ResultsPanel controller=controller/>
        </div>

        <Footer/>
    }
}
