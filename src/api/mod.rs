//! Taamim Analysis WASM API
//!
//! This module provides the JavaScript-facing API for the analysis
//! engine. `helpers` holds the shared serialization, validation and
//! console-logging utilities; `core` exposes the API functions
//! themselves.

pub mod helpers;
pub mod core;

// Re-export the public API surface
pub use self::core::{analysis_token_rows, analyze_verse, hebrew_numeral, taam_inventory_of};
