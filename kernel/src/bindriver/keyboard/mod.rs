use x86_64::instructions::port::Port;

use crate::bindriver::vga_buffer::CONSOLE;

/// PS/2 controller data port
const DATA_PORT: u16 = 0x60;

/// Called from the keyboard IRQ. Reads the pending byte, which also acknowledges
/// it to the controller, and queues it for the console owner. The byte is
/// passed on raw; scan codes are not translated.
pub fn handle_interrupt() {
  let mut port: Port<u8> = Port::new(DATA_PORT);
  let byte = unsafe { port.read() };
  // a full queue counts the drop, the next drain reports it
  let _ = CONSOLE.feed(byte);
}
