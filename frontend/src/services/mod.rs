//! Backend services.
//!
//! # Services
//!
//! - [`process`] - Multipart submission to the plagium core

pub mod process;

pub use process::*;
