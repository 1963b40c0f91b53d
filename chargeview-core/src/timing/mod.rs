//! Session time bookkeeping
//!
//! Tracks how long the current charge session has been running and how much
//! of it was spent with a power stage or the balancer active.

pub mod tracker;

pub use tracker::{SessionClock, TimeTracker, TimingError};
