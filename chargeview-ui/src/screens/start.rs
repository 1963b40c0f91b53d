//! Start-of-session summary
//!
//! Line 2 cycles through its secondary fields on the blink index so a
//! single 16-column row can carry charge level, output voltage, balance
//! voltage and the number of connected balance cells.

use chargeview_core::blink::BlinkField;
use chargeview_core::metrics::charge_percent;
use chargeview_core::traits::{Channel, VoltageLimit};
use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;

/// Charge level from the balancer's view of pack voltage
pub fn start_percent(frame: &Frame) -> u8 {
    let readings = frame.readings;
    charge_percent(
        readings.value(Channel::VoutBalancer),
        readings.program.voltage_limit(VoltageLimit::Charge),
        readings.program.voltage_limit(VoltageLimit::Discharge),
    )
}

/// Battery, voltage and program labels; charge level and blinking readings
pub fn start_info<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;
    let program = readings.program;
    let blink = frame.blink;

    out.set_cursor(0);
    out.print_fixed(program.battery_label(), 4);
    out.print_char(' ');
    out.print_fixed(program.voltage_label(), 8);
    out.print_char(' ');
    out.print(program.program_type().abbreviation());
    out.pad_line();

    out.set_cursor(1);
    let percent = start_percent(frame);
    if percent == 100 && blink.is_off() {
        out.print("FUL ");
    } else {
        out.print_unsigned(u32::from(percent), 2);
        out.print("% ");
    }

    if blink.shows(BlinkField::OutputVoltage) {
        readings.print_value(out, Channel::Vout, 5);
    } else {
        out.print_spaces(5);
    }
    out.print_char(' ');

    if program.chemistry().is_lithium() {
        if blink.shows(BlinkField::BalanceVoltage) {
            readings.print_connected_value(out, Channel::Vbalancer, 5);
        } else {
            out.print_spaces(5);
        }

        if blink.shows(BlinkField::BalancePorts) {
            out.print_digit(readings.sensors.connected_balance_ports());
        } else {
            out.print_char(' ');
        }
    } else {
        // Runs one column past the edge; the `h` is clipped
        out.print_charge(program.capacity(), 7);
    }
    out.pad_line();
}
