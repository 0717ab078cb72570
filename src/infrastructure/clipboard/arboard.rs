//! Cross-platform clipboard host using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). On Linux the
//! selection buffer maps to the X11 PRIMARY selection.

use std::sync::{Mutex, MutexGuard};

use arboard::Error as ArboardError;
use image::RgbaImage;

use crate::application::ports::{ClipboardError, ClipboardHost};
use crate::domain::clipboard::{ClipboardBuffer, Payload};

const BOTH_BUFFERS: &[ClipboardBuffer] = &ClipboardBuffer::ALL;
const PRIMARY_ONLY: &[ClipboardBuffer] = &[ClipboardBuffer::Primary];

/// Clipboard host backed by a long-lived arboard handle.
///
/// arboard has no change notification, so `take_changes` polls: it
/// compares each buffer's payload fingerprint with the last one seen.
///
/// On Linux the content is served only while the handle lives. A
/// persisting host blocks each write until another client has taken
/// ownership of the buffer, so short-lived processes do not lose it.
pub struct ArboardClipboardHost {
    clipboard: Mutex<arboard::Clipboard>,
    selection: bool,
    persist: bool,
    last_seen: Mutex<[u64; 2]>,
}

impl ArboardClipboardHost {
    /// Open the system clipboard.
    ///
    /// `enable_selection` is honored only where a selection buffer exists.
    /// `persist` makes Linux writes wait for a new owner before returning.
    pub fn new(enable_selection: bool, persist: bool) -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        let host = Self {
            clipboard: Mutex::new(clipboard),
            selection: enable_selection && cfg!(target_os = "linux"),
            persist,
            last_seen: Mutex::new([0; 2]),
        };

        // Baseline, so the first poll only reports real changes
        let baseline = host.fingerprints();
        *host.last_seen()? = baseline.map(|f| f.unwrap_or_default());

        Ok(host)
    }

    fn lock(&self) -> Result<MutexGuard<'_, arboard::Clipboard>, ClipboardError> {
        self.clipboard
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))
    }

    fn last_seen(&self) -> Result<MutexGuard<'_, [u64; 2]>, ClipboardError> {
        self.last_seen
            .lock()
            .map_err(|_| ClipboardError::Unavailable("change tracker poisoned".to_string()))
    }

    fn buffers(&self) -> &'static [ClipboardBuffer] {
        if self.selection {
            BOTH_BUFFERS
        } else {
            PRIMARY_ONLY
        }
    }

    /// Fingerprint per buffer slot; `None` for unsupported or unreadable buffers
    fn fingerprints(&self) -> [Option<u64>; 2] {
        let mut prints = [None; 2];
        for buffer in self.buffers() {
            match self.read(*buffer) {
                Ok(payload) => prints[buffer.index()] = Some(payload.fingerprint()),
                Err(e) => tracing::debug!(%buffer, error = %e, "skipping unreadable buffer"),
            }
        }
        prints
    }

    /// Image first, then text. A clipboard offering both (copied
    /// spreadsheet cells, for one) reads as an image with no text.
    fn read_primary(clipboard: &mut arboard::Clipboard) -> Result<Payload, ClipboardError> {
        match clipboard.get_image() {
            Ok(image) => {
                let width = image.width as u32;
                let height = image.height as u32;
                let rgba = RgbaImage::from_raw(width, height, image.bytes.into_owned())
                    .ok_or_else(|| ClipboardError::ReadFailed {
                        buffer: ClipboardBuffer::Primary,
                        message: format!("malformed {}x{} image", width, height),
                    })?;
                return Ok(Payload::Image(rgba));
            }
            Err(ArboardError::ContentNotAvailable) => {}
            Err(e) => tracing::debug!(error = %e, "clipboard image unreadable, trying text"),
        }

        text_payload(clipboard.get_text(), ClipboardBuffer::Primary)
    }

    #[cfg(target_os = "linux")]
    fn read_selection(clipboard: &mut arboard::Clipboard) -> Result<Payload, ClipboardError> {
        use arboard::{GetExtLinux, LinuxClipboardKind};

        let text = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text();
        text_payload(text, ClipboardBuffer::Selection)
    }

    #[cfg(not(target_os = "linux"))]
    fn read_selection(_clipboard: &mut arboard::Clipboard) -> Result<Payload, ClipboardError> {
        Ok(Payload::Empty)
    }

    #[cfg(target_os = "linux")]
    fn write(
        clipboard: &mut arboard::Clipboard,
        buffer: ClipboardBuffer,
        text: &str,
        persist: bool,
    ) -> Result<(), ArboardError> {
        use arboard::{LinuxClipboardKind, SetExtLinux};

        let kind = match buffer {
            ClipboardBuffer::Primary => LinuxClipboardKind::Clipboard,
            ClipboardBuffer::Selection => LinuxClipboardKind::Primary,
        };
        let set = clipboard.set().clipboard(kind);
        if persist {
            tracing::debug!(%buffer, "waiting for another client to take the clipboard");
            set.wait().text(text)
        } else {
            set.text(text)
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn write(
        clipboard: &mut arboard::Clipboard,
        buffer: ClipboardBuffer,
        text: &str,
        _persist: bool,
    ) -> Result<(), ArboardError> {
        match buffer {
            ClipboardBuffer::Primary => clipboard.set_text(text),
            ClipboardBuffer::Selection => Err(ArboardError::ClipboardNotSupported),
        }
    }
}

/// Compare fresh fingerprints against the last seen ones, recording and
/// returning each buffer whose content moved. `None` slots are skipped.
fn diff_fingerprints(
    last_seen: &mut [u64; 2],
    current: [Option<u64>; 2],
    buffers: &[ClipboardBuffer],
) -> Vec<ClipboardBuffer> {
    let mut changes = Vec::new();
    for buffer in buffers {
        let slot = buffer.index();
        if let Some(print) = current[slot] {
            if print != last_seen[slot] {
                last_seen[slot] = print;
                changes.push(*buffer);
            }
        }
    }
    changes
}

fn text_payload(
    result: Result<String, ArboardError>,
    buffer: ClipboardBuffer,
) -> Result<Payload, ClipboardError> {
    match result {
        Ok(text) => Ok(Payload::Text(text)),
        Err(ArboardError::ContentNotAvailable) => Ok(Payload::Empty),
        Err(e) => Err(ClipboardError::ReadFailed {
            buffer,
            message: e.to_string(),
        }),
    }
}

impl ClipboardHost for ArboardClipboardHost {
    fn read(&self, buffer: ClipboardBuffer) -> Result<Payload, ClipboardError> {
        let mut clipboard = self.lock()?;
        match buffer {
            ClipboardBuffer::Primary => Self::read_primary(&mut clipboard),
            ClipboardBuffer::Selection if self.selection => Self::read_selection(&mut clipboard),
            ClipboardBuffer::Selection => Ok(Payload::Empty),
        }
    }

    fn write_text(&self, buffer: ClipboardBuffer, text: &str) -> Result<(), ClipboardError> {
        if buffer == ClipboardBuffer::Selection && !self.selection {
            return Err(ClipboardError::Unsupported("selection buffer"));
        }

        let mut clipboard = self.lock()?;
        Self::write(&mut clipboard, buffer, text, self.persist).map_err(|e| {
            ClipboardError::WriteFailed {
                buffer,
                message: e.to_string(),
            }
        })
    }

    fn supports_selection(&self) -> bool {
        self.selection
    }

    fn take_changes(&self) -> Vec<ClipboardBuffer> {
        let current = self.fingerprints();
        let Ok(mut last_seen) = self.last_seen() else {
            return Vec::new();
        };

        diff_fingerprints(&mut last_seen, current, self.buffers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u64 = 0xa;
    const B: u64 = 0xb;

    #[test]
    fn unchanged_baseline_reports_nothing() {
        let mut last = [A, B];
        let changes = diff_fingerprints(&mut last, [Some(A), Some(B)], BOTH_BUFFERS);
        assert!(changes.is_empty());
        assert_eq!(last, [A, B]);
    }

    #[test]
    fn one_changed_buffer_is_reported_once() {
        let mut last = [A, B];
        let changes = diff_fingerprints(&mut last, [Some(B), Some(B)], BOTH_BUFFERS);
        assert_eq!(changes, vec![ClipboardBuffer::Primary]);
        assert_eq!(last, [B, B]);

        let again = diff_fingerprints(&mut last, [Some(B), Some(B)], BOTH_BUFFERS);
        assert!(again.is_empty());
    }

    #[test]
    fn both_buffers_change_in_order() {
        let mut last = [0, 0];
        let changes = diff_fingerprints(&mut last, [Some(A), Some(B)], BOTH_BUFFERS);
        assert_eq!(
            changes,
            vec![ClipboardBuffer::Primary, ClipboardBuffer::Selection]
        );
    }

    #[test]
    fn unreadable_slot_is_left_alone() {
        let mut last = [A, B];
        let changes = diff_fingerprints(&mut last, [Some(A), None], BOTH_BUFFERS);
        assert!(changes.is_empty());
        assert_eq!(last, [A, B]);
    }

    #[test]
    fn buffers_outside_the_list_are_ignored() {
        let mut last = [A, A];
        let changes = diff_fingerprints(&mut last, [Some(A), Some(B)], PRIMARY_ONLY);
        assert!(changes.is_empty());
        assert_eq!(last, [A, A]);
    }

    #[test]
    fn change_and_change_back_are_both_reported() {
        let mut last = [A, 0];
        let to_b = diff_fingerprints(&mut last, [Some(B), None], PRIMARY_ONLY);
        let back_to_a = diff_fingerprints(&mut last, [Some(A), None], PRIMARY_ONLY);
        assert_eq!(to_b, vec![ClipboardBuffer::Primary]);
        assert_eq!(back_to_a, vec![ClipboardBuffer::Primary]);
        assert_eq!(last, [A, 0]);
    }
}
