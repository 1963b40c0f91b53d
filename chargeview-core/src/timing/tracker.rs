//! Session timer and activity accumulators

use crate::config::SLOW_INTERRUPT_PERIOD_MS;

/// Errors from session lifecycle calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Power-off requested while the session clock was already stopped
    AlreadyStopped,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::AlreadyStopped => f.write_str("session clock already stopped"),
        }
    }
}

/// Session clock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionClock {
    /// Session in progress since `started_at_ms`
    Running { started_at_ms: u32 },
    /// Session ended after `elapsed_ms`
    Stopped { elapsed_ms: u32 },
}

impl SessionClock {
    /// Milliseconds elapsed in the session as of `now_ms`
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        match *self {
            SessionClock::Running { started_at_ms } => now_ms.wrapping_sub(started_at_ms),
            SessionClock::Stopped { elapsed_ms } => elapsed_ms,
        }
    }
}

/// Session time tracker
///
/// Mutated only by [`power_on`](Self::power_on), [`power_off`](Self::power_off)
/// and the periodic [`tick`](Self::tick). Missed ticks are not compensated.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeTracker {
    session: SessionClock,
    /// Time with the balancer working (ms)
    balance_ms: u32,
    /// Time with either power stage working (ms)
    charge_discharge_ms: u32,
    /// Period between `tick` calls (ms)
    period_ms: u32,
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeTracker {
    /// Create a stopped tracker ticked at [`SLOW_INTERRUPT_PERIOD_MS`]
    pub const fn new() -> Self {
        Self::with_period(SLOW_INTERRUPT_PERIOD_MS)
    }

    /// Create a stopped tracker ticked every `period_ms`
    pub const fn with_period(period_ms: u32) -> Self {
        Self {
            session: SessionClock::Stopped { elapsed_ms: 0 },
            balance_ms: 0,
            charge_discharge_ms: 0,
            period_ms,
        }
    }

    /// Start a new session at `now_ms`, clearing both accumulators
    pub fn power_on(&mut self, now_ms: u32) {
        self.session = SessionClock::Running {
            started_at_ms: now_ms,
        };
        self.balance_ms = 0;
        self.charge_discharge_ms = 0;
    }

    /// Freeze the session time at `now_ms`
    ///
    /// Stopping a stopped session leaves the frozen time untouched and
    /// returns [`TimingError::AlreadyStopped`].
    pub fn power_off(&mut self, now_ms: u32) -> Result<(), TimingError> {
        match self.session {
            SessionClock::Running { .. } => {
                self.session = SessionClock::Stopped {
                    elapsed_ms: self.session.elapsed_ms(now_ms),
                };
                Ok(())
            }
            SessionClock::Stopped { .. } => Err(TimingError::AlreadyStopped),
        }
    }

    /// Account one slow-interrupt period of activity
    pub fn tick(&mut self, charge_or_discharge_active: bool, balance_active: bool) {
        if charge_or_discharge_active {
            self.charge_discharge_ms = self.charge_discharge_ms.wrapping_add(self.period_ms);
        }
        if balance_active {
            self.balance_ms = self.balance_ms.wrapping_add(self.period_ms);
        }
    }

    /// Whole seconds elapsed in the session, saturating at `u16::MAX`
    pub fn elapsed_seconds(&self, now_ms: u32) -> u16 {
        to_seconds(self.session.elapsed_ms(now_ms))
    }

    /// Whole seconds the balancer has been working
    pub fn balance_seconds(&self) -> u16 {
        to_seconds(self.balance_ms)
    }

    /// Whole seconds either power stage has been working
    pub fn charge_discharge_seconds(&self) -> u16 {
        to_seconds(self.charge_discharge_ms)
    }

    pub fn balance_ms(&self) -> u32 {
        self.balance_ms
    }

    pub fn charge_discharge_ms(&self) -> u32 {
        self.charge_discharge_ms
    }

    pub fn session(&self) -> SessionClock {
        self.session
    }

    pub fn is_running(&self) -> bool {
        matches!(self.session, SessionClock::Running { .. })
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

fn to_seconds(ms: u32) -> u16 {
    u16::try_from(ms / 1000).unwrap_or(u16::MAX)
}
