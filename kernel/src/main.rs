#![feature(abi_x86_interrupt,custom_test_frameworks)]

#![test_runner(crate::test::test_runner)]
#![reexport_test_harness_main = "test_main"]

#![warn(unused_import_braces)]
#![deny(unused_qualifications,keyword_idents,unused_extern_crates,stable_features)]

#![no_std]
#![no_main]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod common;
#[macro_use]
mod bindriver;
mod version;
#[cfg(test)]
mod test;

use crate::bindriver::vga_buffer::CONSOLE;

#[cfg(not(test))]
const STARTUP_MESSAGE: &[u8] = b"Hello World\nHello My Friend\0";

bootloader::entry_point!(kernel_main);

fn kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
  // init drivers for core hardware
  bindriver::init();
  info!("bootcon v{}", version::VERSION);
  CONSOLE.clear();
  #[cfg(test)]
  {
    info!("Running test harness");
    test_main();
    hlt_cpu!();
  }
  #[cfg(not(test))]
  {
    CONSOLE.put_string(STARTUP_MESSAGE);
    debug!("startup message written, cursor at {:?}", CONSOLE.cursor());
    bindriver::cpu::enable_interrupts();
    info!("console ready, echoing keyboard input");
    idle()
  }
}

/// Renders queued keyboard input, sleeping until the next interrupt when there is none.
#[cfg(not(test))]
fn idle() -> ! {
  use x86_64::instructions::interrupts;
  loop {
    let rendered = CONSOLE.drain();
    if rendered > 0 {
      trace!("rendered {} input bytes", rendered);
    }
    interrupts::disable();
    if CONSOLE.has_pending_input() {
      interrupts::enable();
    } else {
      // sti;hlt executes atomically, so an interrupt cannot slip in before the hlt
      interrupts::enable_and_hlt();
    }
  }
}

use core::panic::PanicInfo;

/// This function is called on panic.
#[panic_handler]
pub fn panic(info: &PanicInfo) -> ! {
  x86_64::instructions::interrupts::disable();
  error!("Panic occured: {}", info.message());
  match info.location() {
    Some(s) => error!("Panicked at {}~{}", s.file(), s.line()),
    None => error!("Panic had no stacktrace"),
  }
  bindriver::crack_locks();
  vga_println!("\n\n===== PANIC OCCURED IN KERNEL =====");
  vga_println!("{}", info);
  #[cfg(test)]
  {
    use crate::bindriver::qemu::*;
    exit_qemu(QemuExitCode::Failed);
  }
  hlt_cpu!();
}
