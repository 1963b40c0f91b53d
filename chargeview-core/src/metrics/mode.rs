//! Operating mode letter for the status screens

use crate::traits::{Balancer, PowerStage};

/// What the charger is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    Idle,
    Charging,
    Discharging,
    /// Charger and discharger powered together
    Both,
    /// Power stages off, balancer bleeding cells
    Balancing,
}

impl OperatingMode {
    /// Derive the mode from the power stages and the balancer
    ///
    /// Power stages take precedence over balancing.
    pub fn from_stages<S, D, B>(smps: &S, discharger: &D, balancer: &B) -> Self
    where
        S: PowerStage + ?Sized,
        D: PowerStage + ?Sized,
        B: Balancer + ?Sized,
    {
        match (smps.is_on(), discharger.is_on()) {
            (true, true) => OperatingMode::Both,
            (true, false) => OperatingMode::Charging,
            (false, true) => OperatingMode::Discharging,
            (false, false) if balancer.is_working() => OperatingMode::Balancing,
            (false, false) => OperatingMode::Idle,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            OperatingMode::Idle => 'N',
            OperatingMode::Charging => 'C',
            OperatingMode::Discharging => 'D',
            OperatingMode::Both => 'E',
            OperatingMode::Balancing => 'B',
        }
    }
}
