//! Balancer and Thevenin transient traits

/// Read-only view of the cell balancer
pub trait Balancer {
    /// Per-cell discharge outputs, bit `i` set while cell `i` is being bled
    fn balancing_mask(&self) -> u8;

    /// Index of the lowest cell, the reference the others are balanced to
    fn min_cell(&self) -> Option<u8>;

    /// Balancer is running
    fn is_working(&self) -> bool;

    /// Cell readings have settled enough to balance against
    fn is_stable(&self) -> bool;

    /// Balancing has reached its target and the reference voltage is saved
    fn is_converged(&self) -> bool;

    /// Presumed open-circuit voltage of a cell in mV
    ///
    /// Compensates for the drop across the balance leads while bleeding.
    fn presumed_voltage(&self, cell: u8) -> i32;
}

/// A voltage step and the current step that caused it
///
/// Captured by the charge loop between two operating points; the ratio is
/// the Thevenin series resistance of whatever sits between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transient {
    /// Voltage delta in mV (sign follows charge direction)
    pub delta_v: i32,
    /// Raw current delta on the program's current channel
    pub delta_i: i32,
}

/// Source of Thevenin transients measured by the charge loop
pub trait TransientSource {
    /// Transient seen at the output terminals
    fn output(&self) -> Transient;

    /// Transient seen on one balance cell
    fn cell(&self, cell: u8) -> Transient;
}
