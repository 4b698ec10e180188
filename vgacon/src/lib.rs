//! Text mode console for the early boot path.
//!
//! Renders a byte stream into the 80x25 VGA text buffer, wrapping at the end
//! of a line and scrolling when output runs off the bottom of the screen.
//! The screen is reached through the `Surface` trait so the same writer runs
//! against ordinary memory in tests.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate static_assertions;
#[macro_use]
extern crate log;

pub mod buffer;
pub mod console;
pub mod cursor;
pub mod queue;
pub mod writer;

pub use crate::buffer::{
    Attribute, Buffer, ScreenChar, Surface, ATTRIBUTE, BUFFER_HEIGHT, BUFFER_WIDTH, VGA_BUFFER_ADDR,
};
pub use crate::console::Console;
pub use crate::cursor::Cursor;
pub use crate::queue::{ByteQueue, QueueFull, INPUT_QUEUE_CAPACITY};
pub use crate::writer::{Writer, REPLACEMENT_CHAR};
