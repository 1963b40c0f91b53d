//! Program and battery configuration

use super::analog::Channel;

/// Which configured voltage limit to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoltageLimit {
    /// End-of-charge target
    Charge,
    /// Discharge cutoff
    Discharge,
}

/// Battery chemistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chemistry {
    #[default]
    Unknown,
    NiCd,
    NiMH,
    Pb,
    Life,
    Lilo,
    Lipo,
    Li430,
    Li435,
    NiZn,
}

impl Chemistry {
    /// Lithium packs have a balance port
    pub fn is_lithium(&self) -> bool {
        matches!(
            self,
            Chemistry::Life | Chemistry::Lilo | Chemistry::Lipo | Chemistry::Li430 | Chemistry::Li435
        )
    }
}

/// Program selected for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramType {
    Charge,
    ChargeBalance,
    Balance,
    Discharge,
    FastCharge,
    Storage,
    StorageBalance,
    ChargeNi,
    DischargeNi,
    CycleNi,
    ChargePb,
    DischargePb,
    EditBattery,
    LoadProgram,
}

impl ProgramType {
    /// Two-character code shown on the start screen
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ProgramType::Charge => "Ch",
            ProgramType::ChargeBalance => "CB",
            ProgramType::Balance => "Bl",
            ProgramType::Discharge => "Di",
            ProgramType::FastCharge => "FC",
            ProgramType::Storage => "St",
            ProgramType::StorageBalance => "SB",
            ProgramType::ChargeNi => "Ch",
            ProgramType::DischargeNi => "Di",
            ProgramType::CycleNi => "Cy",
            ProgramType::ChargePb => "Ch",
            ProgramType::DischargePb => "Di",
            ProgramType::EditBattery => "EB",
            ProgramType::LoadProgram => "LP",
        }
    }
}

/// Read-only view of the running program and its battery
pub trait ProgramInfo {
    /// Configured voltage limit in mV
    fn voltage_limit(&self, limit: VoltageLimit) -> i32;

    /// Charge limit in mAh
    fn capacity_limit(&self) -> i32;

    /// Configured charge current in mA
    fn charge_current(&self) -> i32;

    /// Nominal battery capacity in mAh
    fn capacity(&self) -> i32;

    fn chemistry(&self) -> Chemistry;

    fn program_type(&self) -> ProgramType;

    /// Current channel driving the active power stage
    ///
    /// Selects the calibration applied to Thevenin current deltas.
    fn current_channel(&self) -> Channel;

    /// Short chemistry label, e.g. "LiPo"
    fn battery_label(&self) -> &str;

    /// Pack voltage label, e.g. "3S11.1V"
    fn voltage_label(&self) -> &str;

    /// Why the last program stopped; empty when it ran to completion
    fn stop_reason(&self) -> &str;
}
