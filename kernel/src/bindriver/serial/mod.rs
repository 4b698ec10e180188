use core::fmt;
use log::{LevelFilter, Metadata, Record};
use spin::Mutex;
use uart_16550::SerialPort;

pub type SafeSerialPort = Mutex<SerialPort>;

const COM1: u16 = 0x3F8;

lazy_static! {
    pub static ref SERIAL1: SafeSerialPort = {
        let mut serial_port = unsafe { SerialPort::new(COM1) };
        serial_port.init();
        Mutex::new(serial_port)
    };
}

pub fn init() {
    ::log::set_logger(&SERIAL1).expect("could not setup logging");
    ::log::set_max_level(max_level());
}

/// Highest level compiled in through the `log_*` features, most verbose wins.
fn max_level() -> LevelFilter {
    if cfg!(feature = "log_trace") {
        LevelFilter::Trace
    } else if cfg!(feature = "log_debug") {
        LevelFilter::Debug
    } else if cfg!(feature = "log_info") {
        LevelFilter::Info
    } else if cfg!(feature = "log_error") {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}

impl ::log::Log for SERIAL1 {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= ::log::max_level() && !(false
            // put in blacklisted debug modules here
            //|| metadata.target() == "vgacon::writer"
        )
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            use core::fmt::Write;
            // the logger may run inside an interrupt that cut into another print
            unsafe { self.force_unlock() };
            if let Some(mut port) = self.try_lock() {
                let _ = port.write_fmt(format_args!(
                    "{:6} {:>30}~{:04} - {}\n",
                    record.level(),
                    record
                        .module_path()
                        .unwrap_or("?")
                        .trim_start_matches("bootcon::"),
                    record.line().unwrap_or(0),
                    record.args(),
                ));
            }
        }
    }

    fn flush(&self) {}
}

pub fn print(args: fmt::Arguments) {
    use core::fmt::Write;
    let _ = SERIAL1.lock().write_fmt(args);
}

macro_rules! print {
    ($($arg:tt)*) => {
      $crate::bindriver::vga_buffer::print(format_args!($($arg)*));
      $crate::bindriver::serial::print(format_args!($($arg)*))
    };
}

macro_rules! println {
    () => (print!("\n"));
    ($fmt:expr) => (print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => (print!(concat!($fmt, "\n"), $($arg)*));
}
