//! Balance port detail screens
//!
//! ```text
//! B_10010 1:4.012V
//! 2:4.105V3:4.110V
//! ```
//!
//! The leading character is the balancer phase, followed by one mark per
//! cell (`_` for the reference cell) and three cell readings.

use chargeview_core::metrics::{calibrated_resistance, BalanceBits, BalanceMode};
use chargeview_core::traits::Channel;
use chargeview_display::{DisplaySurface, LcdWrite};

use super::Frame;
use crate::readings::print_disconnected;

/// Cell 1 reads low while the discharger loads the pack through it
pub const B0_DISCHARGE_CORRECTION: bool = cfg!(feature = "b0-discharge-correction");

/// What to show for each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellReading {
    Voltage,
    /// Thevenin resistance of the cell
    Resistance,
}

/// Calibrated Thevenin resistance of one balance cell (mΩ)
pub fn cell_resistance(frame: &Frame, cell: u8) -> u32 {
    let readings = frame.readings;
    let transient = readings.transients.cell(cell);
    calibrated_resistance(
        transient.delta_v,
        transient.delta_i,
        readings.program.current_channel(),
        readings.sensors,
    )
}

/// One cell reading, 6 columns
fn print_cell<S>(out: &mut S, frame: &Frame, cell: u8, reading: CellReading)
where
    S: DisplaySurface + ?Sized,
{
    let connected = Channel::balance_cell(cell).is_some_and(|ch| frame.readings.is_connected(ch));
    if !connected {
        print_disconnected(out, 6);
        return;
    }

    match reading {
        CellReading::Voltage => out.print_voltage(frame.readings.balancer.presumed_voltage(cell), 6),
        CellReading::Resistance => out.print_resistance(cell_resistance(frame, cell), 6),
    }
}

/// Cell number label, e.g. `2:`
fn print_label<S>(out: &mut S, cell: u8)
where
    S: DisplaySurface + ?Sized,
{
    out.print_digit(cell + 1);
    out.print_char(':');
}

/// Balancer phase and cell marks, 8 columns
fn print_balance_state<S>(out: &mut S, frame: &Frame)
where
    S: DisplaySurface + ?Sized,
{
    let balancer = frame.readings.balancer;
    let bits = BalanceBits::from_balancer(balancer);

    out.print_char(BalanceMode::from_balancer(balancer).as_char());
    // Any bleeding cell, or a running balancer even with every output off
    if bits.mask != 0 || balancer.is_working() {
        for mark in bits.cell_marks() {
            out.write_byte(mark);
        }
        out.print_char(' ');
    } else {
        out.print_spaces(7);
    }
}

/// Three cells starting at `first_cell` (0 or 3)
pub fn cells<S>(out: &mut S, frame: &Frame, first_cell: u8, reading: CellReading)
where
    S: DisplaySurface + ?Sized,
{
    render_cells(out, frame, first_cell, reading, B0_DISCHARGE_CORRECTION);
}

fn render_cells<S>(out: &mut S, frame: &Frame, first_cell: u8, reading: CellReading, correct_b0: bool)
where
    S: DisplaySurface + ?Sized,
{
    let discharger = frame.readings.discharger;

    out.set_cursor(0);
    print_balance_state(out, frame);
    print_label(out, first_cell);
    if correct_b0 && first_cell == 0 && discharger.is_on() && discharger.is_active() {
        out.print("n.a.");
    } else {
        print_cell(out, frame, first_cell, reading);
    }
    out.pad_line();

    out.set_cursor(1);
    for cell in first_cell + 1..first_cell + 3 {
        print_label(out, cell);
        print_cell(out, frame, cell, reading);
    }
    out.pad_line();
}
