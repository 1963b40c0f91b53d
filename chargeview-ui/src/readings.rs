//! Collaborator bundle read by the renderers

use chargeview_core::config::ChargerSettings;
use chargeview_core::traits::{
    AnalogInputs, Balancer, Channel, PowerStage, ProgramInfo, TransientSource,
};
use chargeview_display::{DisplaySurface, LcdWrite};

/// Read-only references to everything the screens display
#[derive(Clone, Copy)]
pub struct Readings<'a> {
    pub sensors: &'a dyn AnalogInputs,
    /// Charge converter
    pub smps: &'a dyn PowerStage,
    pub discharger: &'a dyn PowerStage,
    pub balancer: &'a dyn Balancer,
    pub transients: &'a dyn TransientSource,
    pub program: &'a dyn ProgramInfo,
    pub settings: &'a ChargerSettings,
}

impl Readings<'_> {
    pub fn value(&self, channel: Channel) -> i32 {
        self.sensors.real_value(channel)
    }

    pub fn is_connected(&self, channel: Channel) -> bool {
        self.sensors.is_connected(channel)
    }

    /// Print a channel's real value in its own unit
    pub fn print_value<S>(&self, out: &mut S, channel: Channel, width: u8)
    where
        S: DisplaySurface + ?Sized,
    {
        out.print_analog(self.value(channel), channel.quantity(), width);
    }

    /// Print a channel's value, or a `--` placeholder when nothing is wired to it
    pub fn print_connected_value<S>(&self, out: &mut S, channel: Channel, width: u8)
    where
        S: DisplaySurface + ?Sized,
    {
        if self.is_connected(channel) {
            self.print_value(out, channel, width);
        } else {
            print_disconnected(out, width);
        }
    }
}

/// `--` centered in `width` columns
pub fn print_disconnected<S>(out: &mut S, width: u8)
where
    S: DisplaySurface + ?Sized,
{
    let left = width.saturating_sub(2) / 2;
    out.print_spaces(left);
    out.print("--");
    out.print_spaces(width.saturating_sub(2 + left));
}
