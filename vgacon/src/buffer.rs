pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

/// Physical address of the VGA text buffer
pub const VGA_BUFFER_ADDR: usize = 0xb8000;

/// White on black, used for every cell the console touches
pub const ATTRIBUTE: Attribute = Attribute(0x0f);

use volatile::Volatile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Attribute(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub attribute: Attribute,
}

impl ScreenChar {
    pub const fn new(ascii_character: u8, attribute: Attribute) -> Self {
        ScreenChar { ascii_character, attribute }
    }

    pub const fn blank() -> Self {
        Self::new(b' ', ATTRIBUTE)
    }
}

/// Text mode memory layout: row major, character byte then attribute byte.
/// Cell `(row, col)` starts at byte offset `(row * BUFFER_WIDTH + col) * 2`.
#[repr(transparent)]
pub struct Buffer {
    pub chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

assert_eq_size!(ScreenChar, u16);
assert_eq_size!(Buffer, [u8; BUFFER_WIDTH * BUFFER_HEIGHT * 2]);

impl Buffer {
    /// Builds a blank buffer in ordinary memory, for running a console off hardware.
    pub fn blank() -> Self {
        Buffer {
            chars: core::array::from_fn(|_| {
                core::array::from_fn(|_| Volatile::new(ScreenChar::blank()))
            }),
        }
    }

    /// Reinterprets the memory-mapped text buffer.
    ///
    /// # Safety
    /// `VGA_BUFFER_ADDR` must be identity mapped and nothing else may hold a
    /// reference to it for the returned lifetime.
    pub unsafe fn vga() -> &'static mut Buffer {
        &mut *(VGA_BUFFER_ADDR as *mut Buffer)
    }
}

/// Anything the console can render cells into.
pub trait Surface {
    fn read(&self, row: usize, col: usize) -> ScreenChar;
    fn write(&mut self, row: usize, col: usize, cell: ScreenChar);
}

impl Surface for Buffer {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        self.chars[row][col].read()
    }
    fn write(&mut self, row: usize, col: usize, cell: ScreenChar) {
        self.chars[row][col].write(cell)
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        (**self).read(row, col)
    }
    fn write(&mut self, row: usize, col: usize, cell: ScreenChar) {
        (**self).write(row, col, cell)
    }
}
