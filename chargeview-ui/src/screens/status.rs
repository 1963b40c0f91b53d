//! Primary status screens

use chargeview_core::metrics::OperatingMode;
use chargeview_core::traits::{Channel, VoltageLimit};
use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;

/// Delivered charge, 9 columns
pub(crate) fn print_charge_field<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.print_charge(frame.readings.value(Channel::Cout), 8);
    out.print_char(' ');
}

/// Mode letter and session time, 9 columns
pub(crate) fn print_mode_and_time<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;
    let mode = OperatingMode::from_stages(readings.smps, readings.discharger, readings.balancer);

    out.print_char(mode.as_char());
    out.print_char(' ');
    out.print_time(frame.elapsed_seconds());
    out.print_char(' ');
}

/// Charge and current; mode, session time and pack voltage
pub fn first<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    print_charge_field(out, frame);
    frame.readings.print_value(out, Channel::Iout, 7);
    out.pad_line();

    out.set_cursor(1);
    print_mode_and_time(out, frame);
    frame.readings.print_value(out, Channel::VoutBalancer, 7);
    out.pad_line();
}

/// Capacity limit and charge current; charge voltage target
pub fn capacity_limits<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let program = frame.readings.program;

    out.set_cursor(0);
    out.print_charge(program.capacity_limit(), 8);
    out.print_char(' ');
    out.print_current(program.charge_current(), 7);
    out.pad_line();

    out.set_cursor(1);
    out.print("Limits: ");
    out.print_voltage(program.voltage_limit(VoltageLimit::Charge), 7);
    out.pad_line();
}
