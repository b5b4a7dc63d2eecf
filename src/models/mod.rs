//! Data models for taamim analysis
//!
//! This module contains the data structures flowing through the
//! analysis pipeline: tokens with letter clusters, the taam and role
//! enumerations, inference records and hierarchical spans.

pub mod token;
pub mod taam;
pub mod classify;
pub mod inference;
pub mod spans;

// Re-export commonly used types
pub use token::*;
pub use taam::*;
pub use classify::*;
pub use inference::*;
pub use spans::*;
