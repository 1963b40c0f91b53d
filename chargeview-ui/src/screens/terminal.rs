//! Static end and fault screens

use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;

/// Title line and the program's stop reason, if it gave one
fn screen_end<S>(out: &mut S, frame: &Frame, title: &str)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    out.print(title);
    out.pad_line();

    out.set_cursor(1);
    let reason = frame.readings.program.stop_reason();
    if !reason.is_empty() {
        out.print("reason: ");
        out.print(reason);
    }
    out.pad_line();
}

/// Fixed two-line message
fn strings<S>(out: &mut S, first: &str, second: &str)
where
    S: DisplaySurface + ?Sized,
{
    out.set_cursor(0);
    out.print(first);
    out.pad_line();
    out.set_cursor(1);
    out.print(second);
    out.pad_line();
}

pub fn program_complete<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    screen_end(out, frame, "program complete");
}

pub fn monitor_error<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    screen_end(out, frame, "monitor error");
}

pub fn reversed_polarity<S>(out: &mut S)
where
    S: DisplaySurface + ?Sized,
{
    strings(out, "REVERSE POLARITY", "");
}

pub fn not_implemented<S>(out: &mut S)
where
    S: DisplaySurface + ?Sized,
{
    strings(out, "Function not", "implemented yet");
}
