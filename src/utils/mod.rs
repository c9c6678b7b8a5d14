//! Utility functions and helpers for the translation service.
//!
//! # Submodules
//!
//! - `logging`: tracing subscriber initialization.

pub mod logging;
