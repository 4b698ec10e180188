use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

pub const INPUT_QUEUE_CAPACITY: usize = 256;

/// Returned by `ByteQueue::push` when there is no free slot; carries the dropped byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub u8);

///
/// ByteQueue is a fixed ring of raw input bytes shared between exactly one
/// producer (the keyboard interrupt) and exactly one consumer (whoever drains
/// the console). One slot always stays free to tell full from empty.
pub struct ByteQueue {
    storage: UnsafeCell<[u8; INPUT_QUEUE_CAPACITY]>,
    head: AtomicUsize,
    tail: AtomicUsize,
    overflow: AtomicU64,
}

// head is only stored by the producer, tail only by the consumer
unsafe impl Sync for ByteQueue {}

impl ByteQueue {
    pub const fn new() -> Self {
        ByteQueue {
            storage: UnsafeCell::new([0; INPUT_QUEUE_CAPACITY]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            overflow: AtomicU64::new(0),
        }
    }

    pub fn push(&self, byte: u8) -> Result<(), QueueFull> {
        let head = self.head.load(Ordering::Relaxed);
        let next_head = (head + 1) % INPUT_QUEUE_CAPACITY;
        if next_head == self.tail.load(Ordering::Acquire) {
            // no logging here, the producer may be an interrupt handler
            self.overflow.fetch_add(1, Ordering::Relaxed);
            return Err(QueueFull(byte));
        }
        // slot `head` is not visible to the consumer until head moves past it
        unsafe {
            (*self.storage.get())[head] = byte;
        }
        self.head.store(next_head, Ordering::Release);
        Ok(())
    }

    pub fn pop(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }
        let byte = unsafe { (*self.storage.get())[tail] };
        self.tail.store((tail + 1) % INPUT_QUEUE_CAPACITY, Ordering::Release);
        Some(byte)
    }

    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        (head + INPUT_QUEUE_CAPACITY - tail) % INPUT_QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes dropped because the consumer fell behind.
    pub fn overflow_count(&self) -> u64 {
        self.overflow.load(Ordering::Relaxed)
    }
}

impl Default for ByteQueue {
    fn default() -> Self {
        Self::new()
    }
}
