//! Clipboard change notifications

use std::fmt;

use serde::Serialize;

/// Event re-emitted by the bridge after the host reports a change.
///
/// A primary-buffer change produces `ContentChanged`, then either
/// `ImageChanged` or `TextChanged`, then `HasImageChanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardEvent {
    ContentChanged,
    TextChanged,
    ImageChanged,
    HasImageChanged,
    SelectionChanged,
}

impl fmt::Display for ClipboardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipboardEvent::ContentChanged => "contentChanged",
            ClipboardEvent::TextChanged => "textChanged",
            ClipboardEvent::ImageChanged => "imageChanged",
            ClipboardEvent::HasImageChanged => "hasImageChanged",
            ClipboardEvent::SelectionChanged => "selectionChanged",
        };
        write!(f, "{}", name)
    }
}
