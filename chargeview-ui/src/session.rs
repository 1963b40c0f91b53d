//! Status display session
//!
//! Ties the session timer to the screen dispatcher. The slow interrupt
//! calls [`StatusDisplay::slow_tick`]; the UI loop calls
//! [`StatusDisplay::refresh`].

use chargeview_core::blink::Blink;
use chargeview_core::timing::{TimeTracker, TimingError};
use chargeview_core::traits::Clock;
use chargeview_display::DisplaySurface;

use crate::dispatcher::ScreenDispatcher;
use crate::readings::Readings;
use crate::screens::ScreenId;

/// Session timer plus screen dispatcher
#[derive(Debug, Clone, Default)]
pub struct StatusDisplay {
    timing: TimeTracker,
    dispatcher: ScreenDispatcher,
}

impl StatusDisplay {
    pub const fn new() -> Self {
        Self {
            timing: TimeTracker::new(),
            dispatcher: ScreenDispatcher::new(),
        }
    }

    /// Display whose slow tick fires every `period_ms`
    pub const fn with_period(period_ms: u32) -> Self {
        Self {
            timing: TimeTracker::with_period(period_ms),
            dispatcher: ScreenDispatcher::new(),
        }
    }

    /// Start a session, clearing the activity totals
    pub fn power_on<C: Clock + ?Sized>(&mut self, clock: &C) {
        let now_ms = clock.now_ms();
        #[cfg(feature = "defmt")]
        defmt::info!("Session start at {} ms", now_ms);
        self.timing.power_on(now_ms);
    }

    /// End the session, freezing its elapsed time
    pub fn power_off<C: Clock + ?Sized>(&mut self, clock: &C) -> Result<(), TimingError> {
        let now_ms = clock.now_ms();
        match self.timing.power_off(now_ms) {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Session end after {} s",
                    self.timing.elapsed_seconds(now_ms)
                );
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Power off ignored: {}", e);
                Err(e)
            }
        }
    }

    /// Account one slow-interrupt period of power stage and balancer activity
    pub fn slow_tick(&mut self, readings: &Readings) {
        let charging = readings.smps.is_active() || readings.discharger.is_active();
        self.timing.tick(charging, readings.balancer.is_working());
    }

    /// Advance the blink counter and draw `screen`
    pub fn refresh<C, S>(&mut self, screen: ScreenId, readings: &Readings, clock: &C, out: &mut S)
    where
        C: Clock + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        self.dispatcher
            .render(screen, readings, &self.timing, clock.now_ms(), out);
    }

    /// Whole seconds into the session
    pub fn elapsed_seconds<C: Clock + ?Sized>(&self, clock: &C) -> u16 {
        self.timing.elapsed_seconds(clock.now_ms())
    }

    pub fn timing(&self) -> &TimeTracker {
        &self.timing
    }

    pub fn blink(&self) -> Blink {
        self.dispatcher.blink()
    }

    /// Screen drawn by the last refresh
    pub fn active_screen(&self) -> Option<ScreenId> {
        self.dispatcher.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{text, FakeCharger, FakeClock, FakeStage};
    use chargeview_display::Screen;

    #[test]
    fn test_idle_session_scenario() {
        let clock = FakeClock::at(0);
        let charger = FakeCharger::new();
        let mut display = StatusDisplay::new();
        let mut out = Screen::new();

        display.power_on(&clock);
        clock.set(5_000);
        assert_eq!(display.elapsed_seconds(&clock), 5);

        display.refresh(ScreenId::First, &charger.readings(), &clock, &mut out);
        assert_eq!(text(&out, 1), "N   0:05  0.000V");
        assert_eq!(display.active_screen(), Some(ScreenId::First));
    }

    #[test]
    fn test_slow_tick_accumulates() {
        let mut charger = FakeCharger::new();
        charger.smps = FakeStage::running();
        charger.balancer_working = true;
        let mut display = StatusDisplay::with_period(500);
        display.power_on(&FakeClock::at(0));

        for _ in 0..4 {
            display.slow_tick(&charger.readings());
        }
        assert_eq!(display.timing().charge_discharge_ms(), 2_000);
        assert_eq!(display.timing().balance_ms(), 2_000);

        charger.balancer_working = false;
        display.slow_tick(&charger.readings());
        assert_eq!(display.timing().charge_discharge_ms(), 2_500);
        assert_eq!(display.timing().balance_ms(), 2_000);
    }

    #[test]
    fn test_stage_on_but_inactive_not_counted() {
        let mut charger = FakeCharger::new();
        charger.discharger = FakeStage { on: true, active: false };
        let mut display = StatusDisplay::new();
        display.power_on(&FakeClock::at(0));

        display.slow_tick(&charger.readings());
        assert_eq!(display.timing().charge_discharge_ms(), 0);

        charger.discharger.active = true;
        display.slow_tick(&charger.readings());
        assert_eq!(display.timing().charge_discharge_ms(), 500);
    }

    #[test]
    fn test_power_on_resets_totals() {
        let mut charger = FakeCharger::new();
        charger.smps = FakeStage::running();
        let clock = FakeClock::at(0);
        let mut display = StatusDisplay::new();

        display.power_on(&clock);
        display.slow_tick(&charger.readings());
        clock.set(10_000);
        display.power_on(&clock);

        assert_eq!(display.timing().charge_discharge_ms(), 0);
        assert_eq!(display.elapsed_seconds(&clock), 0);
    }

    #[test]
    fn test_power_off_freezes_display() {
        let clock = FakeClock::at(1_000);
        let charger = FakeCharger::new();
        let mut display = StatusDisplay::new();
        let mut out = Screen::new();

        display.power_on(&clock);
        clock.set(76_000);
        assert_eq!(display.power_off(&clock), Ok(()));
        clock.set(500_000);

        display.refresh(ScreenId::Time, &charger.readings(), &clock, &mut out);
        assert_eq!(text(&out, 0), "time:       1:15");
        assert_eq!(display.power_off(&clock), Err(TimingError::AlreadyStopped));
    }

    #[test]
    fn test_refresh_advances_blink() {
        let clock = FakeClock::at(0);
        let charger = FakeCharger::new();
        let mut display = StatusDisplay::new();
        let mut out = Screen::new();

        for _ in 0..9 {
            display.refresh(ScreenId::StartInfo, &charger.readings(), &clock, &mut out);
        }
        assert_eq!(display.blink().counter(), 9);
        assert!(display.blink().is_off());
    }
}
