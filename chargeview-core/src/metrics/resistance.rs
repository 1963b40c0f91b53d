//! Thevenin series resistance from a voltage/current transient

use crate::traits::{AnalogInputs, Channel};

/// Reported when no current flowed, so no resistance can be inferred
pub const RESISTANCE_SATURATED: u32 = u32::MAX;

/// Resistance in mΩ from a voltage delta (mV) and current (mA)
///
/// The sign of `delta_v` is ignored. Zero or negative current saturates to
/// [`RESISTANCE_SATURATED`].
pub fn resistance(delta_v: i32, current: i32) -> u32 {
    if current <= 0 {
        return RESISTANCE_SATURATED;
    }

    let milliohms = u64::from(delta_v.unsigned_abs()) * 1000 / current as u64;
    u32::try_from(milliohms).unwrap_or(RESISTANCE_SATURATED)
}

/// Resistance in mΩ from a raw current delta measured on `channel`
///
/// The current magnitude goes through the channel's calibration first.
pub fn calibrated_resistance<A>(delta_v: i32, current_raw: i32, channel: Channel, inputs: &A) -> u32
where
    A: AnalogInputs + ?Sized,
{
    let current = inputs.calibrate(channel, current_raw.saturating_abs());
    resistance(delta_v, current)
}
