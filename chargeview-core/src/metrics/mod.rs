//! Derived display metrics
//!
//! Pure functions turning live readings and configured limits into the
//! values the screens print. Recomputed on every render, never stored.

pub mod balance;
pub mod charge;
pub mod mode;
pub mod resistance;

pub use balance::{BalanceBits, BalanceMode};
pub use charge::charge_percent;
pub use mode::OperatingMode;
pub use resistance::{calibrated_resistance, resistance, RESISTANCE_SATURATED};
