//! Display surface trait
//!
//! Defines the interface the screen renderers write through.

/// Character display surface
///
/// Provides a hardware-agnostic cursor-and-characters interface. Implementations
/// handle the specifics of the LCD controller or an in-memory buffer.
pub trait DisplaySurface {
    /// Move the cursor to column 0 of `row`
    fn set_cursor(&mut self, row: u8);

    /// Write one character code at the cursor and advance it
    ///
    /// Codes follow the display's character ROM; printable ASCII maps to
    /// itself.
    fn write_byte(&mut self, byte: u8);

    /// Fill the rest of the current row with spaces
    fn pad_line(&mut self);

    /// Write every byte of `text`
    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte);
        }
    }

    /// Write `count` spaces
    fn write_spaces(&mut self, count: u8) {
        for _ in 0..count {
            self.write_byte(b' ');
        }
    }
}
