//! Two-line character display surface for the charger status screens
//!
//! This crate provides:
//! - `DisplaySurface` trait for character displays (HD44780-style LCDs)
//! - `Screen`, an in-memory two-line buffer implementing it
//! - `LcdWrite`, fixed-width text and numeric formatting on any surface
//!
//! # Architecture
//!
//! Renderers only ever move the cursor to the start of a line and emit
//! characters. Every call is fire-and-forget: a surface clips whatever does
//! not fit instead of reporting an error.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod format;
pub mod screen;

// Re-export key types
pub use backend::DisplaySurface;
pub use format::{LcdWrite, OHM_GLYPH};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
