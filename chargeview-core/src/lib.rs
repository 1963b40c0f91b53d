//! Board-agnostic core logic for the charger status display
//!
//! This crate contains everything the screens compute that does not depend
//! on a specific charger board:
//!
//! - Collaborator traits (clock, analog inputs, power stages, balancer)
//! - Session time bookkeeping
//! - The shared blink counter
//! - Derived metrics (charge percent, Thevenin resistance, balance bits)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod config;
pub mod metrics;
pub mod timing;
pub mod traits;
