//! Clipboard domain module

mod buffer;
mod event;
mod payload;

pub use buffer::ClipboardBuffer;
pub use event::ClipboardEvent;
pub use payload::{ImageSize, Payload};
