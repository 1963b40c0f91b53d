//! Screen buffer types
//!
//! Provides a character buffer mirroring a 16x2 text LCD.

use crate::backend::DisplaySurface;

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 16;

/// Screen buffer for text-mode displays
///
/// Behaves like the LCD it mirrors: writes overwrite in place, the cursor
/// never wraps to the next row, and characters past the last column are
/// dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    /// Current display content, one character code per cell
    lines: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    /// Cursor row
    row: usize,
    /// Cursor column, may sit past the last column after clipping
    col: usize,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            lines: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            row: 0,
            col: 0,
            dirty: true,
        }
    }

    /// Blank the entire screen and home the cursor
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            *line = [b' '; SCREEN_COLS];
        }
        self.row = 0;
        self.col = 0;
        self.dirty = true;
    }

    /// Replace a row with `text`, space-filled and truncated to the width
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.set_cursor(row as u8);
            self.write_str(text);
            self.pad_line();
        }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&[u8; SCREEN_COLS]> {
        self.lines.get(row)
    }

    /// Get a row as text if it only holds ASCII
    pub fn line_str(&self, row: usize) -> Option<&str> {
        self.lines
            .get(row)
            .filter(|line| line.is_ascii())
            .and_then(|line| core::str::from_utf8(line).ok())
    }

    /// Get all rows
    pub fn lines(&self) -> impl Iterator<Item = &[u8; SCREEN_COLS]> {
        self.lines.iter()
    }

    /// Cursor position as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after it was pushed to the display)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl DisplaySurface for Screen {
    fn set_cursor(&mut self, row: u8) {
        self.row = usize::from(row).min(SCREEN_ROWS - 1);
        self.col = 0;
    }

    fn write_byte(&mut self, byte: u8) {
        if self.col < SCREEN_COLS {
            let cell = &mut self.lines[self.row][self.col];
            if *cell != byte {
                *cell = byte;
                self.dirty = true;
            }
        }
        self.col = self.col.saturating_add(1);
    }

    fn pad_line(&mut self) {
        while self.col < SCREEN_COLS {
            self.write_byte(b' ');
        }
    }
}

impl core::fmt::Debug for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for line in &self.lines {
            list.entry(&core::str::from_utf8(line).unwrap_or("<glyphs>"));
        }
        list.finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=[u8]:a}", &line[..]);
        }
        defmt::write!(f, "]");
    }
}
