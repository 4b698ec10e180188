use core::fmt;
use vgacon::{Buffer, Console};

pub type VgaConsole = Console<&'static mut Buffer>;

lazy_static! {
    /// The one console of the kernel. Owns the text buffer and the cursor;
    /// interrupt handlers may only `feed` it.
    pub static ref CONSOLE: VgaConsole = Console::new(unsafe { Buffer::vga() });
}

pub fn print(args: fmt::Arguments) {
    CONSOLE.write_fmt(args);
}

macro_rules! vga_print {
    ($($arg:tt)*) => {
      $crate::bindriver::vga_buffer::print(format_args!($($arg)*))
    };
}

macro_rules! vga_println {
    () => (vga_print!("\n"));
    ($fmt:expr) => (vga_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => (vga_print!(concat!($fmt, "\n"), $($arg)*));
}
