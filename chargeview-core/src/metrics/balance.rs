//! Balancer state packed for the balance screens

use crate::config::CELL_COUNT;
use crate::traits::Balancer;

const CELL_MASK: u8 = (1 << CELL_COUNT) - 1;

/// Balancer phase shown as the leading character of the balance screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BalanceMode {
    /// Not balancing, readings settled
    Idle,
    /// Not balancing, readings still moving
    Unstable,
    /// Balancing toward the reference cell
    Balancing,
    /// Balancing with the reference voltage reached and held
    Converged,
}

impl BalanceMode {
    pub fn from_balancer<B: Balancer + ?Sized>(balancer: &B) -> Self {
        match (balancer.is_working(), balancer.is_stable(), balancer.is_converged()) {
            (false, true, _) => BalanceMode::Idle,
            (false, false, _) => BalanceMode::Unstable,
            (true, _, false) => BalanceMode::Balancing,
            (true, _, true) => BalanceMode::Converged,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            BalanceMode::Idle => ' ',
            BalanceMode::Unstable => 'm',
            BalanceMode::Balancing => 'b',
            BalanceMode::Converged => 'B',
        }
    }
}

/// Per-cell bleed outputs and the reference cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BalanceBits {
    /// Bit `i` set while cell `i` is being bled
    pub mask: u8,
    /// Lowest cell, balanced against rather than bled
    pub min_cell: Option<u8>,
}

impl BalanceBits {
    pub fn new(mask: u8, min_cell: Option<u8>) -> Self {
        Self {
            mask: mask & CELL_MASK,
            min_cell: min_cell.filter(|&cell| usize::from(cell) < CELL_COUNT),
        }
    }

    pub fn from_balancer<B: Balancer + ?Sized>(balancer: &B) -> Self {
        Self::new(balancer.balancing_mask(), balancer.min_cell())
    }

    pub fn is_bleeding(&self, cell: u8) -> bool {
        usize::from(cell) < CELL_COUNT && self.mask & (1 << cell) != 0
    }

    /// One character per cell in cell order: `_` for the reference cell,
    /// otherwise `1` while bleeding and `0` when not
    pub fn cell_marks(&self) -> [u8; CELL_COUNT] {
        let mut marks = [b'0'; CELL_COUNT];
        for (cell, mark) in marks.iter_mut().enumerate() {
            let cell = cell as u8;
            *mark = if self.min_cell == Some(cell) {
                b'_'
            } else if self.is_bleeding(cell) {
                b'1'
            } else {
                b'0'
            };
        }
        marks
    }
}
