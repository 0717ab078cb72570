//! Clipboard host port interface

use thiserror::Error;

use crate::domain::clipboard::{ClipboardBuffer, Payload};

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {buffer}: {message}")]
    ReadFailed {
        buffer: ClipboardBuffer,
        message: String,
    },

    #[error("Failed to write {buffer}: {message}")]
    WriteFailed {
        buffer: ClipboardBuffer,
        message: String,
    },

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),

    #[error("Unsupported clipboard operation: {0}")]
    Unsupported(&'static str),
}

/// Port onto the host environment's clipboard.
///
/// The host owns the content; implementations hold no authoritative copy
/// and every `read` asks the host again. Calls are synchronous and made
/// from a single thread.
pub trait ClipboardHost {
    /// Current content of `buffer`. A buffer with nothing readable is
    /// `Payload::Empty`, not an error.
    fn read(&self, buffer: ClipboardBuffer) -> Result<Payload, ClipboardError>;

    /// Replace the content of `buffer` with `text`.
    fn write_text(&self, buffer: ClipboardBuffer, text: &str) -> Result<(), ClipboardError>;

    /// Whether this host has a selection buffer. Fixed for the host's lifetime.
    fn supports_selection(&self) -> bool;

    /// Drain change notifications delivered since the last call, oldest
    /// first, one entry per underlying change.
    fn take_changes(&self) -> Vec<ClipboardBuffer>;
}

/// Blanket implementation for boxed host types
impl ClipboardHost for Box<dyn ClipboardHost> {
    fn read(&self, buffer: ClipboardBuffer) -> Result<Payload, ClipboardError> {
        self.as_ref().read(buffer)
    }

    fn write_text(&self, buffer: ClipboardBuffer, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(buffer, text)
    }

    fn supports_selection(&self) -> bool {
        self.as_ref().supports_selection()
    }

    fn take_changes(&self) -> Vec<ClipboardBuffer> {
        self.as_ref().take_changes()
    }
}
