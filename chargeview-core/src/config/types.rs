//! Configuration type definitions
//!
//! Settings are persisted by the charger's settings store; the display only
//! reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of balance port cells
pub const CELL_COUNT: usize = 6;

/// Period of the slow interrupt that drives time accumulation (ms)
pub const SLOW_INTERRUPT_PERIOD_MS: u32 = 500;

/// Charger-wide user settings read by the screens
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargerSettings {
    /// Input voltage below which charging is refused (mV)
    pub input_voltage_low_mv: u16,
    /// An external temperature probe is fitted and enabled
    pub external_temperature: bool,
}

impl Default for ChargerSettings {
    fn default() -> Self {
        Self {
            input_voltage_low_mv: 10_000,
            external_temperature: false,
        }
    }
}
