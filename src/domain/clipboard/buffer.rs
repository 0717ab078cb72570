//! Clipboard buffer identifiers

use std::fmt;

/// One of the two process-wide buffers owned by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardBuffer {
    /// The standard copy/paste clipboard
    Primary,
    /// The middle-click selection buffer (X11 PRIMARY selection)
    Selection,
}

impl ClipboardBuffer {
    /// Both buffers, primary first
    pub const ALL: [ClipboardBuffer; 2] = [ClipboardBuffer::Primary, ClipboardBuffer::Selection];

    /// Stable slot index, used by adapters that keep per-buffer state in arrays
    pub const fn index(self) -> usize {
        match self {
            ClipboardBuffer::Primary => 0,
            ClipboardBuffer::Selection => 1,
        }
    }
}

impl fmt::Display for ClipboardBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBuffer::Primary => write!(f, "clipboard"),
            ClipboardBuffer::Selection => write!(f, "selection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_distinct() {
        assert_eq!(ClipboardBuffer::Primary.index(), 0);
        assert_eq!(ClipboardBuffer::Selection.index(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(ClipboardBuffer::Primary.to_string(), "clipboard");
        assert_eq!(ClipboardBuffer::Selection.to_string(), "selection");
    }
}
