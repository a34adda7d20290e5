// Pokedex Schema - Shared type definitions
// This crate contains the wire-facing data shapes that are shared between
// the lookup core and the fetch/cache layer, so that cached API records can
// cross the boundary without either side depending on the other's internals.

// Re-export the main types
pub use entity::*;
pub use learn_method::*;
pub use learn_record::*;

pub mod entity;
pub mod learn_method;
pub mod learn_record;
