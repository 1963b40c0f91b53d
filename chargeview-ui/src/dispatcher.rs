//! Screen dispatch
//!
//! Maps every [`ScreenId`] to its renderer and owns the blink counter shared
//! by all of them.

use chargeview_core::blink::Blink;
use chargeview_core::timing::TimeTracker;
use chargeview_display::DisplaySurface;

use crate::readings::Readings;
use crate::screens::balance::{cells, CellReading};
use crate::screens::{delta, measurements, resistance, start, status, terminal};
use crate::screens::{Frame, ScreenId};

/// Draw one screen for a frame
pub fn draw<S>(screen: ScreenId, frame: &Frame, out: &mut S)
where
    S: DisplaySurface + ?Sized,
{
    match screen {
        ScreenId::First => status::first(out, frame),
        ScreenId::CapacityLimits => status::capacity_limits(out, frame),
        ScreenId::Time => measurements::time(out, frame),
        ScreenId::Temperature => measurements::temperature(out, frame),
        ScreenId::Balancer1To3 => cells(out, frame, 0, CellReading::Voltage),
        ScreenId::Balancer4To6 => cells(out, frame, 3, CellReading::Voltage),
        ScreenId::Balancer1To3Resistance => cells(out, frame, 0, CellReading::Resistance),
        ScreenId::Balancer4To6Resistance => cells(out, frame, 3, CellReading::Resistance),
        ScreenId::StartInfo => start::start_info(out, frame),
        ScreenId::Resistance => resistance::resistance_screen(out, frame),
        ScreenId::OutputVoltage => measurements::output_voltage(out, frame),
        ScreenId::InputVoltage => measurements::input_voltage(out, frame),
        ScreenId::DeltaVout => delta::delta_vout(out, frame),
        ScreenId::DeltaTextern => delta::delta_textern(out, frame),
        ScreenId::DeltaFirst => delta::delta_first(out, frame),
        ScreenId::ProgramComplete => terminal::program_complete(out, frame),
        ScreenId::MonitorError => terminal::monitor_error(out, frame),
        ScreenId::ReversedPolarity => terminal::reversed_polarity(out),
        ScreenId::NotImplemented => terminal::not_implemented(out),
    }
}

/// Refresh entry point
///
/// Each call advances the blink counter exactly once, then draws the
/// requested screen with the new blink state.
#[derive(Debug, Clone, Default)]
pub struct ScreenDispatcher {
    blink: Blink,
    /// Screen drawn by the last refresh
    active: Option<ScreenId>,
}

impl ScreenDispatcher {
    pub const fn new() -> Self {
        Self {
            blink: Blink::new(),
            active: None,
        }
    }

    pub fn blink(&self) -> Blink {
        self.blink
    }

    pub fn active(&self) -> Option<ScreenId> {
        self.active
    }

    /// Advance the blink counter and draw `screen`
    pub fn render<S>(
        &mut self,
        screen: ScreenId,
        readings: &Readings,
        timing: &TimeTracker,
        now_ms: u32,
        out: &mut S,
    ) where
        S: DisplaySurface + ?Sized,
    {
        self.blink.tick();

        if self.active != Some(screen) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Screen {:?} -> {:?}", self.active, screen);
            self.active = Some(screen);
        }

        let frame = Frame {
            readings,
            timing,
            blink: self.blink,
            now_ms,
        };
        draw(screen, &frame, out);
    }
}
