//! Fixed-width text and numeric formatting
//!
//! Numbers are right-aligned in a field of the requested width. Integers
//! never lose digits (the field is a minimum width). Fixed-point analog
//! values drop decimals until they fit and fill the field with `*` when even
//! the integer part does not.

use core::fmt::Write;

use chargeview_core::traits::Quantity;
use heapless::String;

use crate::backend::DisplaySurface;

/// Ω in the HD44780 A00 character ROM
pub const OHM_GLYPH: u8 = 0xF4;

/// Fill used when a value does not fit its field
const OVERFLOW_FILL: u8 = b'*';

/// Longest duration `print_time` fits in three minute digits
const MAX_TIME_SECONDS: u16 = 999 * 60 + 59;

/// Scratch buffer large enough for any i32 with sign and decimal point
type NumBuf = String<16>;

/// Decimal places and unit suffix for a quantity's fixed-point unit
fn unit_of(quantity: Quantity) -> (u32, &'static [u8]) {
    match quantity {
        // mV
        Quantity::Voltage => (3, b"V"),
        // mA
        Quantity::Current => (3, b"A"),
        // mAh
        Quantity::Charge => (0, b"mAh"),
        // 0.01 °C
        Quantity::Temperature => (2, b"C"),
        // mΩ
        Quantity::Resistance => (0, &[b'm', OHM_GLYPH]),
        Quantity::Unitless => (0, b""),
    }
}

/// Render `value / 10^scale` with `decimals` of its `scale` decimal places
fn fixed_point(value: i32, scale: u32, decimals: u32) -> NumBuf {
    let mut text = NumBuf::new();
    let magnitude = value.unsigned_abs() / 10u32.pow(scale - decimals);
    let unit = 10u32.pow(decimals);

    if value < 0 {
        let _ = text.push('-');
    }
    let _ = write!(text, "{}", magnitude / unit);
    if decimals > 0 {
        let _ = write!(text, ".{:0width$}", magnitude % unit, width = decimals as usize);
    }
    text
}

/// Formatting helpers available on every display surface
pub trait LcdWrite: DisplaySurface {
    /// Write text as-is
    fn print(&mut self, text: &str) {
        self.write_str(text);
    }

    /// Write one character, `?` if the display cannot show it
    fn print_char(&mut self, c: char) {
        self.write_byte(if c.is_ascii() { c as u8 } else { b'?' });
    }

    fn print_spaces(&mut self, count: u8) {
        self.write_spaces(count);
    }

    /// Write the last decimal digit of `digit`
    fn print_digit(&mut self, digit: u8) {
        self.write_byte(b'0' + digit % 10);
    }

    /// Write at most `width` characters of `text`, space-padded to `width`
    fn print_fixed(&mut self, text: &str, width: u8) {
        let shown = text.len().min(usize::from(width));
        for &byte in &text.as_bytes()[..shown] {
            self.write_byte(byte);
        }
        self.write_spaces(width - shown as u8);
    }

    /// Unsigned integer, right-aligned in at least `width` columns
    fn print_unsigned(&mut self, value: u32, width: u8) {
        let mut text = NumBuf::new();
        let _ = write!(text, "{}", value);
        print_right_aligned(self, text.as_bytes(), width);
    }

    /// Signed integer, right-aligned in at least `width` columns
    fn print_signed(&mut self, value: i32, width: u8) {
        let mut text = NumBuf::new();
        let _ = write!(text, "{}", value);
        print_right_aligned(self, text.as_bytes(), width);
    }

    /// Duration as `mmm:ss` (6 columns), holding at `999:59`
    fn print_time(&mut self, seconds: u16) {
        let seconds = seconds.min(MAX_TIME_SECONDS);
        self.print_unsigned(u32::from(seconds / 60), 3);
        self.write_byte(b':');
        let secs = (seconds % 60) as u8;
        self.print_digit(secs / 10);
        self.print_digit(secs);
    }

    /// Fixed-point analog value with unit, exactly `width` columns
    fn print_analog(&mut self, value: i32, quantity: Quantity, width: u8) {
        let (scale, unit) = unit_of(quantity);
        let width = usize::from(width);

        if let Some(room) = width.checked_sub(unit.len()) {
            for decimals in (0..=scale).rev() {
                let text = fixed_point(value, scale, decimals);
                if text.len() <= room {
                    for _ in text.len()..room {
                        self.write_byte(b' ');
                    }
                    for &byte in text.as_bytes().iter().chain(unit) {
                        self.write_byte(byte);
                    }
                    return;
                }
            }
        }

        for _ in 0..width {
            self.write_byte(OVERFLOW_FILL);
        }
    }

    fn print_voltage(&mut self, millivolts: i32, width: u8) {
        self.print_analog(millivolts, Quantity::Voltage, width);
    }

    fn print_current(&mut self, milliamps: i32, width: u8) {
        self.print_analog(milliamps, Quantity::Current, width);
    }

    fn print_charge(&mut self, milliamp_hours: i32, width: u8) {
        self.print_analog(milliamp_hours, Quantity::Charge, width);
    }

    fn print_temperature(&mut self, centidegrees: i32, width: u8) {
        self.print_analog(centidegrees, Quantity::Temperature, width);
    }

    /// Resistance in mΩ; values past `i32::MAX` (saturated) overflow the field
    fn print_resistance(&mut self, milliohms: u32, width: u8) {
        let value = i32::try_from(milliohms).unwrap_or(i32::MAX);
        self.print_analog(value, Quantity::Resistance, width);
    }
}

// Blanket implementation for all display surfaces
impl<T: DisplaySurface + ?Sized> LcdWrite for T {}

fn print_right_aligned<S: DisplaySurface + ?Sized>(surface: &mut S, text: &[u8], width: u8) {
    for _ in text.len()..usize::from(width) {
        surface.write_byte(b' ');
    }
    for &byte in text {
        surface.write_byte(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;

    /// Render into row 0 and return its trimmed bytes
    fn render(f: impl FnOnce(&mut Screen)) -> Vec<u8> {
        let mut screen = Screen::new();
        screen.set_cursor(0);
        f(&mut screen);
        let line = screen.line(0).unwrap();
        let end = line.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        line[..end].to_vec()
    }

    #[test]
    fn test_unsigned_min_width() {
        assert_eq!(render(|s| s.print_unsigned(7, 3)), b"  7");
        assert_eq!(render(|s| s.print_unsigned(100, 2)), b"100");
    }

    #[test]
    fn test_signed() {
        assert_eq!(render(|s| s.print_signed(-12, 5)), b"  -12");
        assert_eq!(render(|s| s.print_signed(34, 5)), b"   34");
    }

    #[test]
    fn test_time() {
        assert_eq!(render(|s| s.print_time(0)), b"  0:00");
        assert_eq!(render(|s| s.print_time(3_725)), b" 62:05");
    }

    #[test]
    fn test_time_holds_at_three_minute_digits() {
        assert_eq!(render(|s| s.print_time(59_999)), b"999:59");
        assert_eq!(render(|s| s.print_time(60_000)), b"999:59");
        assert_eq!(render(|s| s.print_time(u16::MAX)), b"999:59");
    }

    #[test]
    fn test_voltage_full_precision() {
        assert_eq!(render(|s| s.print_voltage(12_600, 7)), b"12.600V");
        assert_eq!(render(|s| s.print_voltage(3_700, 7)), b" 3.700V");
    }

    #[test]
    fn test_voltage_drops_decimals_to_fit() {
        assert_eq!(render(|s| s.print_voltage(12_678, 5)), b"12.6V");
        assert_eq!(render(|s| s.print_voltage(3_700, 5)), b"3.70V");
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(render(|s| s.print_current(-1_500, 7)), b"-1.500A");
    }

    #[test]
    fn test_charge_and_temperature() {
        assert_eq!(render(|s| s.print_charge(1_234, 8)), b" 1234mAh");
        assert_eq!(render(|s| s.print_temperature(2_550, 5)), b"25.5C");
        assert_eq!(render(|s| s.print_temperature(2_550, 9)), b"   25.50C");
    }

    #[test]
    fn test_resistance_glyph() {
        assert_eq!(render(|s| s.print_resistance(25, 8)), [b"    25m".as_slice(), &[OHM_GLYPH][..]].concat());
    }

    #[test]
    fn test_overflow_fills_field() {
        assert_eq!(render(|s| s.print_resistance(u32::MAX, 8)), b"********");
        assert_eq!(render(|s| s.print_charge(123_456, 6)), b"******");
    }

    #[test]
    fn test_fixed_pads_and_truncates() {
        assert_eq!(render(|s| { s.print_fixed("LiPo", 6); s.print("|") }), b"LiPo  |");
        assert_eq!(render(|s| s.print_fixed("NiMH-long", 4)), b"NiMH");
    }

    #[test]
    fn test_char_and_digit() {
        assert_eq!(render(|s| { s.print_char('B'); s.print_digit(13) }), b"B3");
        assert_eq!(render(|s| s.print_char('Ω')), b"?");
    }
}
