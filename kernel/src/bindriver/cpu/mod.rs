pub mod idt;
pub mod pic;

/// Unmasks interrupts on this core. Call only once the IDT and the PIC are set up.
pub fn enable_interrupts() {
  debug!("enabling interrupts");
  x86_64::instructions::interrupts::enable();
}
