use crate::buffer::{BUFFER_HEIGHT, BUFFER_WIDTH};

/// Position of the next character written to the screen.
///
/// `col` never rests at `BUFFER_WIDTH` and `row` never exceeds
/// `BUFFER_HEIGHT - 1`; the writer wraps and scrolls eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const fn new() -> Self {
        Cursor { row: 0, col: 0 }
    }

    pub const fn at(row: usize, col: usize) -> Self {
        Cursor { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BUFFER_HEIGHT && self.col < BUFFER_WIDTH
    }

    /// Moves one column right. Returns true if the line is full.
    pub(crate) fn advance(&mut self) -> bool {
        self.col += 1;
        self.col >= BUFFER_WIDTH
    }

    /// Carriage return plus line feed. Returns true if the cursor left the screen
    /// and the caller has to scroll.
    pub(crate) fn next_line(&mut self) -> bool {
        self.col = 0;
        self.row += 1;
        if self.row >= BUFFER_HEIGHT {
            self.row = BUFFER_HEIGHT - 1;
            return true;
        }
        false
    }
}
