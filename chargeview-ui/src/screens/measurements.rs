//! Plain measurement screens

use chargeview_core::traits::Channel;
use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;

/// Session time; balancing and charge/discharge time
pub fn time<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    out.print("time:     ");
    out.print_time(frame.elapsed_seconds());
    out.pad_line();

    out.set_cursor(1);
    out.print("b ");
    out.print_time(frame.timing.balance_seconds());
    out.print("  ");
    out.print_time(frame.timing.charge_discharge_seconds());
    out.pad_line();
}

/// External probe and, when fitted, the internal sensor
pub fn temperature<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;

    out.set_cursor(0);
    out.print("Text=");
    if readings.settings.external_temperature {
        readings.print_value(out, Channel::Textern, 5);
    } else {
        out.print("-");
    }
    out.pad_line();

    out.set_cursor(1);
    #[cfg(feature = "internal-temperature")]
    {
        out.print("Tint=");
        readings.print_value(out, Channel::Tintern, 5);
    }
    out.pad_line();
}

/// Supply voltage and its low limit
pub fn input_voltage<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;

    out.set_cursor(0);
    out.print("Vinput=");
    readings.print_value(out, Channel::Vin, 7);
    out.pad_line();

    out.set_cursor(1);
    out.print(" limit=");
    out.print_voltage(i32::from(readings.settings.input_voltage_low_mv), 7);
    out.pad_line();
}

/// Output terminal and balance port voltage
pub fn output_voltage<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;

    out.set_cursor(0);
    out.print("Vout =");
    readings.print_value(out, Channel::Vout, 7);
    out.pad_line();

    out.set_cursor(1);
    out.print("Vbal.=");
    readings.print_connected_value(out, Channel::Vbalancer, 7);
    out.pad_line();
}
