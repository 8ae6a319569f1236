//! UI Components for the Plagium application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`PlagiarismForm`] - File inputs, add/remove controls and submission
//! - [`ResultsPanel`] - Similarity report with one progress bar per pair

mod hero;
mod form;
mod results;
mod footer;

pub use hero::*;
pub use form::*;
pub use results::*;
pub use footer::*;
