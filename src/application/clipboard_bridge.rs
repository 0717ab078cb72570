//! Observable clipboard bridge
//!
//! Typed view over the host clipboard for the UI layer. Reads always go
//! back to the host; failures degrade to empty results and are logged.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::domain::clipboard::{ClipboardBuffer, ClipboardEvent, Payload};

use super::ports::{ClipboardError, ClipboardHost};

/// Handle returned by [`ClipboardBridge::on_change`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&ClipboardEvent)>;

/// Clipboard bridge over an injected host.
///
/// Single-threaded: observers are plain closures invoked synchronously on
/// the thread that delivers host changes.
pub struct ClipboardBridge<H: ClipboardHost> {
    host: H,
    supports_selection: bool,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: Cell<u64>,
}

impl<H: ClipboardHost> ClipboardBridge<H> {
    /// Create a bridge, querying the selection capability once
    pub fn new(host: H) -> Self {
        let supports_selection = host.supports_selection();
        tracing::debug!(supports_selection, "clipboard bridge created");

        Self {
            host,
            supports_selection,
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        }
    }

    /// The injected host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Text of the primary buffer, empty if it holds no text
    pub fn text(&self) -> String {
        self.read_text(ClipboardBuffer::Primary)
    }

    /// Replace the primary buffer with `text`
    pub fn set_text(&self, text: &str) {
        self.write_text(ClipboardBuffer::Primary, text);
    }

    /// Text of the selection buffer, empty if unsupported or not text
    pub fn selection(&self) -> String {
        if !self.supports_selection {
            return String::new();
        }
        self.read_text(ClipboardBuffer::Selection)
    }

    /// Replace the selection buffer with `text`; no-op if unsupported
    pub fn set_selection(&self, text: &str) {
        if !self.supports_selection {
            tracing::debug!("selection buffer unsupported, ignoring write");
            return;
        }
        self.write_text(ClipboardBuffer::Selection, text);
    }

    /// Primary buffer image encoded as PNG, empty if there is none
    pub fn image(&self) -> Vec<u8> {
        let Some(image) = self.current_image() else {
            return Vec::new();
        };

        match encode_png(&image) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "dropping clipboard image");
                Vec::new()
            }
        }
    }

    /// Decoded primary buffer image, if any
    pub fn current_image(&self) -> Option<RgbaImage> {
        self.read(ClipboardBuffer::Primary).into_image()
    }

    /// Writing images is not supported; the clipboard is left untouched.
    pub fn set_image(&self, _png: &[u8]) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported("setting a clipboard image"))
    }

    /// True iff the primary buffer currently holds an image
    pub fn has_image(&self) -> bool {
        self.read(ClipboardBuffer::Primary).is_image()
    }

    /// Whether a selection buffer exists, fixed at construction
    pub fn supports_selection(&self) -> bool {
        self.supports_selection
    }

    /// Register a callback for clipboard events
    pub fn on_change<F>(&self, callback: F) -> ObserverId
    where
        F: Fn(&ClipboardEvent) + 'static,
    {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Unregister a callback. Returns false if the id was unknown.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Dispatch every change the host has queued. Returns how many were handled.
    pub fn process_host_events(&self) -> usize {
        let changes = self.host.take_changes();
        for buffer in &changes {
            self.handle_host_change(*buffer);
        }
        changes.len()
    }

    /// Re-emit one host change notification to observers.
    ///
    /// A primary change emits `ContentChanged`, then `ImageChanged` or
    /// `TextChanged` for the new content type, then `HasImageChanged`.
    pub fn handle_host_change(&self, buffer: ClipboardBuffer) {
        match buffer {
            ClipboardBuffer::Primary => {
                let specific = if self.has_image() {
                    ClipboardEvent::ImageChanged
                } else {
                    ClipboardEvent::TextChanged
                };
                tracing::trace!(event = %specific, "primary clipboard changed");

                self.emit(ClipboardEvent::ContentChanged);
                self.emit(specific);
                self.emit(ClipboardEvent::HasImageChanged);
            }
            ClipboardBuffer::Selection => {
                tracing::trace!("selection changed");
                self.emit(ClipboardEvent::SelectionChanged);
            }
        }
    }

    fn emit(&self, event: ClipboardEvent) {
        // Snapshot so callbacks may register or remove observers
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        for observer in observers {
            observer(&event);
        }
    }

    fn read(&self, buffer: ClipboardBuffer) -> Payload {
        self.host.read(buffer).unwrap_or_else(|e| {
            tracing::warn!(%buffer, error = %e, "clipboard read failed");
            Payload::Empty
        })
    }

    fn read_text(&self, buffer: ClipboardBuffer) -> String {
        match self.read(buffer) {
            Payload::Text(text) => text,
            _ => String::new(),
        }
    }

    fn write_text(&self, buffer: ClipboardBuffer, text: &str) {
        if let Err(e) = self.host.write_text(buffer, text) {
            tracing::warn!(%buffer, error = %e, "clipboard write failed");
        }
    }
}

/// Encode an RGBA bitmap as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ClipboardError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ClipboardError::EncodeFailed(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    // Mock host with scripted payloads and failures
    struct MockHost {
        primary: RefCell<Result<Payload, ClipboardError>>,
        selection: bool,
        writes: RefCell<Vec<(ClipboardBuffer, String)>>,
        changes: RefCell<VecDeque<ClipboardBuffer>>,
    }

    impl MockHost {
        fn with(primary: Result<Payload, ClipboardError>) -> Self {
            Self {
                primary: RefCell::new(primary),
                selection: true,
                writes: RefCell::new(Vec::new()),
                changes: RefCell::new(VecDeque::new()),
            }
        }
    }

    impl ClipboardHost for MockHost {
        fn read(&self, buffer: ClipboardBuffer) -> Result<Payload, ClipboardError> {
            match buffer {
                ClipboardBuffer::Primary => self.primary.borrow().clone(),
                ClipboardBuffer::Selection => Ok(Payload::Text("sel".to_string())),
            }
        }

        fn write_text(&self, buffer: ClipboardBuffer, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push((buffer, text.to_string()));
            Err(ClipboardError::WriteFailed {
                buffer,
                message: "read-only".to_string(),
            })
        }

        fn supports_selection(&self) -> bool {
            self.selection
        }

        fn take_changes(&self) -> Vec<ClipboardBuffer> {
            self.changes.borrow_mut().drain(..).collect()
        }
    }

    fn image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]))
    }

    #[test]
    fn read_failure_degrades_to_empty() {
        let bridge = ClipboardBridge::new(MockHost::with(Err(ClipboardError::Unavailable(
            "no display".to_string(),
        ))));
        assert_eq!(bridge.text(), "");
        assert!(!bridge.has_image());
        assert!(bridge.image().is_empty());
    }

    #[test]
    fn write_failure_is_swallowed() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Empty)));
        bridge.set_text("x");
        assert_eq!(bridge.host().writes.borrow().len(), 1);
    }

    #[test]
    fn image_is_encoded_as_png() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Image(image(3, 2)))));
        let png = bridge.image();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded, image(3, 2));
    }

    #[test]
    fn text_payload_has_no_image() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Text("hi".into()))));
        assert!(!bridge.has_image());
        assert!(bridge.current_image().is_none());
        assert!(bridge.image().is_empty());
    }

    #[test]
    fn set_image_is_unsupported() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Empty)));
        assert!(matches!(
            bridge.set_image(&[1, 2, 3]),
            Err(ClipboardError::Unsupported(_))
        ));
        assert!(bridge.host().writes.borrow().is_empty());
    }

    #[test]
    fn removed_observer_is_not_called() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Empty)));
        let count = Rc::new(Cell::new(0));

        let seen = Rc::clone(&count);
        let id = bridge.on_change(move |_| seen.set(seen.get() + 1));
        bridge.handle_host_change(ClipboardBuffer::Selection);
        assert!(bridge.remove_observer(id));
        assert!(!bridge.remove_observer(id));
        bridge.handle_host_change(ClipboardBuffer::Selection);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn empty_primary_reports_text_changed() {
        let bridge = ClipboardBridge::new(MockHost::with(Ok(Payload::Empty)));
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        bridge.on_change(move |e| sink.borrow_mut().push(*e));

        bridge.handle_host_change(ClipboardBuffer::Primary);

        assert_eq!(
            *events.borrow(),
            vec![
                ClipboardEvent::ContentChanged,
                ClipboardEvent::TextChanged,
                ClipboardEvent::HasImageChanged,
            ]
        );
    }

    #[test]
    fn process_host_events_drains_queue() {
        let host = MockHost::with(Ok(Payload::Empty));
        host.changes.borrow_mut().extend([
            ClipboardBuffer::Primary,
            ClipboardBuffer::Selection,
        ]);
        let bridge = ClipboardBridge::new(host);

        assert_eq!(bridge.process_host_events(), 2);
        assert_eq!(bridge.process_host_events(), 0);
    }
}
