//! Screen renderers
//!
//! Every renderer writes both display lines from a [`Frame`] snapshot and
//! mutates nothing but the surface it is given. Rendering the same frame
//! twice produces the same bytes.

pub mod balance;
pub mod delta;
pub mod measurements;
pub mod resistance;
pub mod start;
pub mod status;
pub mod terminal;

use chargeview_core::blink::Blink;
use chargeview_core::timing::TimeTracker;

use crate::readings::Readings;

/// Display layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    /// Charge, current, mode, session time and pack voltage
    First,
    /// Configured capacity, current and voltage limits
    CapacityLimits,
    /// Session, balancing and charge/discharge times
    Time,
    Temperature,
    /// Voltages of balance cells 1-3
    Balancer1To3,
    /// Voltages of balance cells 4-6
    Balancer4To6,
    /// Thevenin resistance of balance cells 1-3
    Balancer1To3Resistance,
    /// Thevenin resistance of balance cells 4-6
    Balancer4To6Resistance,
    /// Battery, program and charge level before a program starts
    StartInfo,
    /// Battery and wiring resistance
    Resistance,
    OutputVoltage,
    InputVoltage,
    /// Peak output voltage and its latest change
    DeltaVout,
    /// External temperature and its latest change
    DeltaTextern,
    /// First screen with the voltage and temperature deltas
    DeltaFirst,
    ProgramComplete,
    MonitorError,
    ReversedPolarity,
    NotImplemented,
}

impl ScreenId {
    /// Every layout, in menu order
    pub const ALL: [ScreenId; 19] = [
        ScreenId::First,
        ScreenId::CapacityLimits,
        ScreenId::Time,
        ScreenId::Temperature,
        ScreenId::Balancer1To3,
        ScreenId::Balancer4To6,
        ScreenId::Balancer1To3Resistance,
        ScreenId::Balancer4To6Resistance,
        ScreenId::StartInfo,
        ScreenId::Resistance,
        ScreenId::OutputVoltage,
        ScreenId::InputVoltage,
        ScreenId::DeltaVout,
        ScreenId::DeltaTextern,
        ScreenId::DeltaFirst,
        ScreenId::ProgramComplete,
        ScreenId::MonitorError,
        ScreenId::ReversedPolarity,
        ScreenId::NotImplemented,
    ];
}

/// Everything a renderer may read for one refresh
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub readings: &'a Readings<'a>,
    pub timing: &'a TimeTracker,
    pub blink: Blink,
    pub now_ms: u32,
}

impl Frame<'_> {
    /// Session seconds as of this frame
    pub fn elapsed_seconds(&self) -> u16 {
        self.timing.elapsed_seconds(self.now_ms)
    }
}
