//! Shared blink counter
//!
//! One free-running counter advanced once per display refresh. Every
//! blinking field derives its phase from it, so all blink phases stay locked
//! to the refresh cadence without per-field timers.
//!
//! Bits 0..=2 of the counter form the blink index, each gating one secondary
//! field. Bit 3 is the slower full-field on/off toggle.

/// Number of low counter bits exposed as the blink index
pub const INDEX_BITS: u32 = 3;

const INDEX_MASK: u16 = (1 << INDEX_BITS) - 1;

/// Counter bit driving the full-field on/off toggle
pub const OFF_BIT: u32 = INDEX_BITS;

/// Secondary fields revealed by a blink index bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkField {
    OutputVoltage,
    BalanceVoltage,
    BalancePorts,
}

impl BlinkField {
    /// Index bit gating this field
    pub const fn mask(self) -> u8 {
        match self {
            BlinkField::OutputVoltage => 0b001,
            BlinkField::BalanceVoltage => 0b010,
            BlinkField::BalancePorts => 0b100,
        }
    }
}

/// Blink index for a counter value
pub const fn index_of(counter: u16) -> u8 {
    (counter & INDEX_MASK) as u8
}

/// Full-field off phase for a counter value
pub const fn is_off_at(counter: u16) -> bool {
    counter & (1 << OFF_BIT) != 0
}

/// Blink state, advanced once per refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    counter: u16,
}

impl Blink {
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Advance one refresh
    pub fn tick(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Low counter bits selecting which secondary fields are visible
    pub const fn index(&self) -> u8 {
        index_of(self.counter)
    }

    /// Whether a full-field blink is in its blank phase
    pub const fn is_off(&self) -> bool {
        is_off_at(self.counter)
    }

    /// Whether a secondary field is in its visible phase
    pub const fn shows(&self, field: BlinkField) -> bool {
        self.index() & field.mask() != 0
    }
}
