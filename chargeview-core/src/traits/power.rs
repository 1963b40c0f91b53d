//! Power stage status

/// Read-only view of a power stage (charge SMPS or discharger)
pub trait PowerStage {
    /// Stage is powered up
    fn is_on(&self) -> bool;

    /// Stage is powered up and driving a non-zero output
    fn is_active(&self) -> bool;
}
