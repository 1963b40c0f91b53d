//! Screens for the charger status display
//!
//! This crate provides:
//! - One renderer per screen layout, each a pure function of the collaborator
//!   readings, the session timer and the blink state
//! - `ScreenDispatcher`, a total mapping from `ScreenId` to its renderer that
//!   advances the shared blink counter once per refresh
//! - `StatusDisplay`, owning the session timer and dispatcher and exposing
//!   the slow-tick and refresh entry points
//!
//! # Architecture
//!
//! Two periodic sources drive everything. The slow interrupt calls
//! [`StatusDisplay::slow_tick`] to accumulate activity time; the display
//! refresh calls [`StatusDisplay::refresh`] with the screen to show. Neither
//! blocks, and the collaborators are only ever read.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dispatcher;
pub mod readings;
pub mod screens;
pub mod session;

#[cfg(test)]
mod fixtures;

// Re-export key types
pub use dispatcher::{draw, ScreenDispatcher};
pub use readings::Readings;
pub use screens::{Frame, ScreenId};
pub use session::StatusDisplay;
