//! In-memory clipboard host
//!
//! Stands in for the system clipboard in tests and headless sessions.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::application::ports::{ClipboardError, ClipboardHost};
use crate::domain::clipboard::{ClipboardBuffer, Payload};

/// Clipboard host holding both buffers in memory.
///
/// Every successful write queues exactly one change notification, as a
/// real host would report its own clipboard ownership changes.
#[derive(Debug, Default)]
pub struct MemoryClipboardHost {
    buffers: RefCell<[Payload; 2]>,
    changes: RefCell<VecDeque<ClipboardBuffer>>,
    selection: bool,
}

impl MemoryClipboardHost {
    /// Create an empty host with or without a selection buffer
    pub fn new(supports_selection: bool) -> Self {
        Self {
            selection: supports_selection,
            ..Default::default()
        }
    }

    /// Replace a buffer's content as another application would.
    ///
    /// Selection content is dropped on hosts without a selection buffer.
    pub fn put(&self, buffer: ClipboardBuffer, payload: Payload) {
        if buffer == ClipboardBuffer::Selection && !self.selection {
            return;
        }
        self.buffers.borrow_mut()[buffer.index()] = payload;
        self.changes.borrow_mut().push_back(buffer);
    }

    /// Clear a buffer
    pub fn clear(&self, buffer: ClipboardBuffer) {
        self.put(buffer, Payload::Empty);
    }

    /// Number of change notifications not yet taken
    pub fn pending_changes(&self) -> usize {
        self.changes.borrow().len()
    }
}

impl ClipboardHost for MemoryClipboardHost {
    fn read(&self, buffer: ClipboardBuffer) -> Result<Payload, ClipboardError> {
        if buffer == ClipboardBuffer::Selection && !self.selection {
            return Ok(Payload::Empty);
        }
        Ok(self.buffers.borrow()[buffer.index()].clone())
    }

    fn write_text(&self, buffer: ClipboardBuffer, text: &str) -> Result<(), ClipboardError> {
        if buffer == ClipboardBuffer::Selection && !self.selection {
            return Err(ClipboardError::Unsupported("selection buffer"));
        }
        self.put(buffer, Payload::Text(text.to_string()));
        Ok(())
    }

    fn supports_selection(&self) -> bool {
        self.selection
    }

    fn take_changes(&self) -> Vec<ClipboardBuffer> {
        self.changes.borrow_mut().drain(..).collect()
    }
}
