//! The role-layer inference engine
//!
//! Four nested layers evaluated strictly in order, each confined to its
//! parent's index range and forbidden from reclaiming indices already in
//! the claim table.

pub mod claims;
pub mod span_builder;
pub mod primary;
pub mod secondary;
pub mod tertiary;
pub mod layers;

pub use claims::ClaimTable;
pub use layers::{build_role_layers, EngineOutput};
