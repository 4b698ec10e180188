use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use spin::Mutex;

use crate::buffer::Surface;
use crate::cursor::Cursor;
use crate::queue::{ByteQueue, QueueFull};
use crate::writer::Writer;

///
/// Console is the single owner of the screen and its cursor.
/// Every output operation holds the writer lock for its full duration, so
/// a character or string is never interleaved with another writer.
/// Interrupt handlers must not write through it; they hand bytes to `feed`
/// and the owning task renders them with `drain`.
pub struct Console<S: Surface> {
    writer: Mutex<Writer<S>>,
    input: ByteQueue,
    reported_drops: AtomicU64,
}

impl<S: Surface> Console<S> {
    pub fn new(buffer: S) -> Self {
        Console {
            writer: Mutex::new(Writer::new(buffer)),
            input: ByteQueue::new(),
            reported_drops: AtomicU64::new(0),
        }
    }

    pub fn put_char(&self, byte: u8) {
        self.writer.lock().put_char(byte);
    }

    pub fn put_string(&self, s: &[u8]) {
        self.writer.lock().put_string(s);
    }

    pub fn clear(&self) {
        self.writer.lock().clear();
    }

    pub fn cursor(&self) -> Cursor {
        self.writer.lock().cursor()
    }

    pub fn write_fmt(&self, args: fmt::Arguments) {
        use core::fmt::Write;
        // Writer::write_str never fails
        let _ = self.writer.lock().write_fmt(args);
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut Writer<S>) -> R) -> R {
        let mut writer = self.writer.lock();
        f(&mut *writer)
    }

    /// Queues one raw input byte. Safe to call from interrupt context: it
    /// neither locks, logs nor touches the screen. A full queue only counts
    /// the drop; `drain` reports it.
    pub fn feed(&self, byte: u8) -> Result<(), QueueFull> {
        self.input.push(byte)
    }

    /// Renders all queued input bytes and returns how many were written.
    pub fn drain(&self) -> usize {
        let mut writer = self.writer.lock();
        let mut count = 0;
        while let Some(byte) = self.input.pop() {
            writer.put_char(byte);
            count += 1;
        }
        drop(writer);
        self.report_drops();
        count
    }

    fn report_drops(&self) {
        let dropped = self.input.overflow_count();
        let reported = self.reported_drops.swap(dropped, Ordering::Relaxed);
        if dropped > reported {
            warn!("input queue full, dropped {} bytes ({} total)", dropped - reported, dropped);
        }
    }

    pub fn has_pending_input(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn dropped_input(&self) -> u64 {
        self.input.overflow_count()
    }

    /// Releases the writer lock regardless of who holds it.
    ///
    /// # Safety
    /// Only for paths that will never return to the lock holder, such as
    /// the panic handler or a fatal exception.
    pub unsafe fn force_unlock(&self) {
        self.writer.force_unlock()
    }
}
