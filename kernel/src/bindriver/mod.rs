#[macro_use]
pub mod vga_buffer;
#[macro_use]
pub mod serial;
pub mod cpu;
pub mod keyboard;
#[cfg(test)]
pub mod qemu;

pub fn init() {
  crate::bindriver::serial::init();
  debug!("setting up CPU IDT");
  crate::bindriver::cpu::idt::init();
  crate::bindriver::cpu::pic::init();
}

/// Frees every output lock so a fatal path can still print.
pub fn crack_locks() {
  unsafe { crate::bindriver::serial::SERIAL1.force_unlock() }
  unsafe { crate::bindriver::vga_buffer::CONSOLE.force_unlock() }
}
