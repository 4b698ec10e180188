use core::fmt;

use crate::buffer::{Attribute, ScreenChar, Surface, ATTRIBUTE, BUFFER_HEIGHT, BUFFER_WIDTH};
use crate::cursor::Cursor;

/// Byte drawn in place of anything the formatted path cannot show
pub const REPLACEMENT_CHAR: u8 = 0xfe;

pub struct Writer<S: Surface> {
    cursor: Cursor,
    attribute: Attribute,
    buffer: S,
}

impl<S: Surface> Writer<S> {
    /// Takes over `buffer` as is. The cursor starts at the top left; nothing is cleared.
    pub fn new(buffer: S) -> Self {
        Writer {
            cursor: Cursor::new(),
            attribute: ATTRIBUTE,
            buffer,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    pub fn cell(&self, row: usize, col: usize) -> ScreenChar {
        self.buffer.read(row, col)
    }

    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            byte => {
                let Cursor { row, col } = self.cursor;
                self.buffer.write(row, col, ScreenChar::new(byte, self.attribute));
                if self.cursor.advance() {
                    self.new_line();
                }
            }
        }
    }

    /// Writes `s` up to its first NUL byte, or all of it if there is none.
    pub fn put_string(&mut self, s: &[u8]) {
        for &byte in s.iter().take_while(|&&b| b != 0) {
            self.put_char(byte);
        }
    }

    /// Moves every row up by one and blanks the bottom row. The cursor is left alone.
    pub fn scroll_up(&mut self) {
        trace!("scrolling console up one row");
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let character = self.buffer.read(row, col);
                self.buffer.write(row - 1, col, character);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
    }

    pub fn clear(&mut self) {
        trace!("clearing console");
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.cursor = Cursor::new();
    }

    fn clear_row(&mut self, row: usize) {
        let blank = ScreenChar::new(b' ', self.attribute);
        for col in 0..BUFFER_WIDTH {
            self.buffer.write(row, col, blank);
        }
    }

    fn new_line(&mut self) {
        if self.cursor.next_line() {
            self.scroll_up();
        }
    }
}

impl<S: Surface> fmt::Write for Writer<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // printable ASCII byte or newline
                0x20..=0x7e | b'\n' => self.put_char(byte),
                // not part of printable ASCII range
                _ => self.put_char(REPLACEMENT_CHAR),
            }
        }
        Ok(())
    }
}
