//! Configuration types
//!
//! Board-agnostic settings and constants shared by the display crates.

pub mod types;

pub use types::*;
