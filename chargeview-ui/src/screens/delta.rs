//! End-of-charge detection screens
//!
//! Show the output voltage drop and temperature rise the charge terminator
//! watches for.

use chargeview_core::traits::Channel;
use chargeview_display::{DisplaySurface, LcdWrite};

use super::status::{print_charge_field, print_mode_and_time};
use super::Frame;

/// Latest output voltage change in mV
fn print_delta_v<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.print_signed(frame.readings.value(Channel::DeltaVout), 5);
    out.print("mV");
    out.pad_line();
}

/// Latest external temperature change in milli-degrees
fn print_delta_t<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;
    if readings.settings.external_temperature {
        // Channel reads in hundredths of a degree
        let millidegrees = readings.value(Channel::DeltaTextern).saturating_mul(10);
        out.print_signed(millidegrees, 5);
        out.print("mC");
    } else {
        out.print("not used");
    }
    out.pad_line();
}

/// Charge and temperature delta; mode, time and voltage delta
pub fn delta_first<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    print_charge_field(out, frame);
    print_delta_t(out, frame);

    out.set_cursor(1);
    print_mode_and_time(out, frame);
    print_delta_v(out, frame);
}

/// Peak output voltage and the latest change
pub fn delta_vout<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    out.print("maxVout=");
    frame.readings.print_value(out, Channel::DeltaVoutMax, 7);
    out.pad_line();

    out.set_cursor(1);
    out.print("delta V= ");
    print_delta_v(out, frame);
}

/// Reference temperature and the latest change
pub fn delta_textern<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let readings = frame.readings;

    out.set_cursor(0);
    out.print("Text=");
    if readings.settings.external_temperature {
        readings.print_value(out, Channel::DeltaLastT, 9);
    } else {
        out.print("not used");
    }
    out.pad_line();

    out.set_cursor(1);
    out.print("delta T= ");
    print_delta_t(out, frame);
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{render, render_now, session, text, FakeCharger, FakeStage};
    use crate::screens::ScreenId;
    use chargeview_core::blink::Blink;
    use chargeview_core::traits::Channel;

    fn with_probe() -> FakeCharger {
        let mut charger = FakeCharger::new();
        charger.settings.external_temperature = true;
        charger
    }

    #[test]
    fn test_delta_first() {
        let mut charger = with_probe();
        charger.smps = FakeStage::running();
        charger.set(Channel::Cout, 850);
        charger.set(Channel::DeltaTextern, 12);
        charger.set(Channel::DeltaVout, -7);

        let screen = render(ScreenId::DeltaFirst, &charger, &session(), Blink::new(), 90_000);
        assert_eq!(text(&screen, 0), "  850mAh   120mC");
        assert_eq!(text(&screen, 1), "C   1:30    -7mV");
    }

    #[test]
    fn test_delta_vout() {
        let mut charger = FakeCharger::new();
        charger.set(Channel::DeltaVoutMax, 8_412);
        charger.set(Channel::DeltaVout, -12);

        let screen = render_now(ScreenId::DeltaVout, &charger);
        assert_eq!(text(&screen, 0), "maxVout= 8.412V ");
        assert_eq!(text(&screen, 1), "delta V=   -12mV");
    }

    #[test]
    fn test_delta_textern() {
        let mut charger = with_probe();
        charger.set(Channel::DeltaLastT, 2_875);
        charger.set(Channel::DeltaTextern, 5);

        let screen = render_now(ScreenId::DeltaTextern, &charger);
        assert_eq!(text(&screen, 0), "Text=   28.75C  ");
        assert_eq!(text(&screen, 1), "delta T=    50mC");
    }

    #[test]
    fn test_probe_disabled() {
        let mut charger = FakeCharger::new();
        charger.set(Channel::DeltaLastT, 2_875);

        let screen = render_now(ScreenId::DeltaTextern, &charger);
        assert_eq!(text(&screen, 0), "Text=not used   ");
        assert_eq!(text(&screen, 1), "delta T= not use");

        let screen = render_now(ScreenId::DeltaFirst, &charger);
        assert_eq!(text(&screen, 0), "    0mAh not use");
    }
}
