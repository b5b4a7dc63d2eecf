//! Hebrew Cantillation Analysis WASM Module
//!
//! This is the main WASM module for the taamim analysis engine.
//! It classifies biblical verse text annotated with cantillation marks
//! into a hierarchical accentuation structure.

pub mod models;
pub mod text;
pub mod registry;
pub mod analysis;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use models::taam::{Role, Taam};
pub use models::token::{LetterCluster, Mark, MarkKind, Token, WordToken};
pub use analysis::{analyze, AnalyzeResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Taamim analysis WASM module initialized");
}
