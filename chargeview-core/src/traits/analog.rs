//! Analog input access
//!
//! Sampling and calibration tables live in the measurement firmware. The
//! display only sees calibrated "real" values in fixed-point units:
//!
//! | Quantity    | Unit       |
//! |-------------|------------|
//! | Voltage     | mV         |
//! | Current     | mA         |
//! | Charge      | mAh        |
//! | Temperature | 0.01 °C    |
//! | Resistance  | mΩ         |

use crate::config::CELL_COUNT;

/// Physical quantity of an analog value, used to pick units when printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Voltage,
    Current,
    Charge,
    Temperature,
    Resistance,
    /// Raw signed value without unit
    Unitless,
}

/// Analog channels read by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Output terminal voltage
    Vout,
    /// Pack voltage as seen by the balancer (best estimate of battery voltage)
    VoutBalancer,
    /// Sum of balance port voltages
    Vbalancer,
    /// Supply input voltage
    Vin,
    /// Output current
    Iout,
    /// Charge converter current
    Ismps,
    /// Discharger current
    Idischarge,
    /// Charge delivered this session
    Cout,
    /// External temperature probe
    Textern,
    /// Internal heatsink temperature
    Tintern,
    /// Output voltage change over the last detection window
    DeltaVout,
    /// Session maximum of the smoothed output voltage
    DeltaVoutMax,
    /// External temperature change over the last detection window
    DeltaTextern,
    /// Temperature at the last detection window
    DeltaLastT,
    Vb1,
    Vb2,
    Vb3,
    Vb4,
    Vb5,
    Vb6,
}

impl Channel {
    /// Balance port channel for a 0-based cell index
    pub fn balance_cell(cell: u8) -> Option<Self> {
        match cell {
            0 => Some(Channel::Vb1),
            1 => Some(Channel::Vb2),
            2 => Some(Channel::Vb3),
            3 => Some(Channel::Vb4),
            4 => Some(Channel::Vb5),
            5 => Some(Channel::Vb6),
            _ => None,
        }
    }

    /// Quantity measured on this channel
    pub fn quantity(self) -> Quantity {
        use Channel::*;

        match self {
            Vout | VoutBalancer | Vbalancer | Vin | DeltaVoutMax => Quantity::Voltage,
            Vb1 | Vb2 | Vb3 | Vb4 | Vb5 | Vb6 => Quantity::Voltage,
            Iout | Ismps | Idischarge => Quantity::Current,
            Cout => Quantity::Charge,
            Textern | Tintern | DeltaLastT => Quantity::Temperature,
            DeltaVout | DeltaTextern => Quantity::Unitless,
        }
    }
}

// Keeps `balance_cell` in step with the cell count used everywhere else.
const _: () = assert!(CELL_COUNT == 6);

/// Read access to calibrated analog inputs
pub trait AnalogInputs {
    /// Calibrated value of a channel in its fixed-point unit
    fn real_value(&self, channel: Channel) -> i32;

    /// Whether something is electrically connected to the channel
    fn is_connected(&self, channel: Channel) -> bool;

    /// Apply the channel's calibration curve to a raw magnitude
    fn calibrate(&self, channel: Channel, raw: i32) -> i32;

    /// Number of balance port cells currently detected
    fn connected_balance_ports(&self) -> u8;
}
