//! State of charge estimate from pack voltage

/// Upper bound of the estimate
///
/// The floored step can overshoot 100 just below the target, and can also
/// reach it there.
pub const MAX_PERCENT: u8 = 100;

/// Charge percentage of `reading` between the discharge cutoff and the
/// charge target
///
/// All voltages in mV. The window is first divided into hundredths with
/// integer division and the offset is then divided by that step, so results
/// are coarser than a single exact division (a 1150 mV window has 11 mV
/// steps). Windows under 100 mV fall back to a single division.
pub fn charge_percent(reading: i32, charge_limit: i32, discharge_limit: i32) -> u8 {
    if reading >= charge_limit {
        return 100;
    }
    if reading <= discharge_limit {
        return 0;
    }

    let offset = i64::from(reading) - i64::from(discharge_limit);
    let window = i64::from(charge_limit) - i64::from(discharge_limit);
    let step = window / 100;

    let percent = if step == 0 {
        offset * 100 / window
    } else {
        offset / step
    };

    percent.clamp(0, i64::from(MAX_PERCENT)) as u8
}
