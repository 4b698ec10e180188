use x86_64::instructions::port::Port;

/// Port of the `isa-debug-exit` device configured in Cargo.toml
const DEBUG_EXIT_PORT: u16 = 0xf4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
  Success = 0x10,
  Failed = 0x11,
}

/// QEMU exits with `(code << 1) | 1`, so Success shows up as 33.
pub fn exit_qemu(code: QemuExitCode) {
  let mut port = Port::<u32>::new(DEBUG_EXIT_PORT);
  unsafe { port.write(code as u32) };
}
