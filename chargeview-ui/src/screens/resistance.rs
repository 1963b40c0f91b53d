//! Battery and wiring resistance

use chargeview_core::metrics::{calibrated_resistance, resistance};
use chargeview_core::traits::Channel;
use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;

/// Thevenin resistance of the whole pack from the output transient (mΩ)
pub fn battery_resistance(frame: &Frame) -> u32 {
    let readings = frame.readings;
    let transient = readings.transients.output();
    calibrated_resistance(
        transient.delta_v,
        transient.delta_i,
        readings.program.current_channel(),
        readings.sensors,
    )
}

/// Resistance of the leads between the output and balance connectors (mΩ)
pub fn wire_resistance(frame: &Frame) -> u32 {
    let readings = frame.readings;
    let drop = readings
        .value(Channel::Vout)
        .saturating_sub(readings.value(Channel::Vbalancer));
    // +1 mA keeps an idle output from dividing by zero
    resistance(drop, readings.value(Channel::Iout).saturating_add(1))
}

pub fn resistance_screen<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    out.print("batt. R=");
    out.print_resistance(battery_resistance(frame), 8);
    out.pad_line();

    out.set_cursor(1);
    if frame.readings.is_connected(Channel::Vbalancer) {
        out.print("wires R=");
        out.print_resistance(wire_resistance(frame), 8);
    }
    out.pad_line();
}
