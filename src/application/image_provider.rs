//! Clipboard image provider
//!
//! Serves the current clipboard image to the UI's image loader under
//! `image://clipboard/<anything>`.

use std::rc::Rc;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::domain::clipboard::ImageSize;

use super::clipboard_bridge::ClipboardBridge;
use super::ports::ClipboardHost;

/// Provider name in `image://<provider>/<id>` sources
pub const PROVIDER_ID: &str = "clipboard";

const IMAGE_SCHEME: &str = "image://";

/// Largest scaled bitmap served, in pixels (256 MiB of RGBA)
pub const MAX_SCALED_PIXELS: u64 = 64 * 1024 * 1024;

/// Image source backed by a shared clipboard bridge
pub struct ClipboardImageProvider<H: ClipboardHost> {
    bridge: Rc<ClipboardBridge<H>>,
}

impl<H: ClipboardHost> ClipboardImageProvider<H> {
    pub fn new(bridge: Rc<ClipboardBridge<H>>) -> Self {
        Self { bridge }
    }

    /// Fetch the clipboard image, scaled to fit `requested` when both of
    /// its dimensions are positive.
    ///
    /// `id` is ignored: there is only one clipboard image. Without an image
    /// the result is an empty 0x0 bitmap, as it is when the scaled bitmap
    /// would exceed [`MAX_SCALED_PIXELS`]. The returned size is always that
    /// of the returned bitmap.
    pub fn request_image(&self, id: &str, requested: ImageSize) -> (RgbaImage, ImageSize) {
        let Some(native) = self.bridge.current_image() else {
            tracing::debug!(id, "no clipboard image to provide");
            return (RgbaImage::new(0, 0), ImageSize::default());
        };

        let native_size = ImageSize::of(&native);
        if !requested.is_valid() {
            return (native, native_size);
        }

        let target = native_size.fit_within(requested);
        if target == native_size {
            return (native, native_size);
        }

        if u64::from(target.width) * u64::from(target.height) > MAX_SCALED_PIXELS {
            tracing::warn!(%native_size, %target, "scaled clipboard image too large");
            return (RgbaImage::new(0, 0), ImageSize::default());
        }

        tracing::debug!(%native_size, %target, "scaling clipboard image");
        let scaled = imageops::resize(&native, target.width, target.height, FilterType::Nearest);
        (scaled, target)
    }
}

/// Image id from an `image://clipboard/<id>` source, or `None` when the
/// source names another scheme or provider.
pub fn parse_image_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix(IMAGE_SCHEME)?;
    match rest.split_once('/') {
        Some((provider, id)) if provider == PROVIDER_ID => Some(id),
        None if rest == PROVIDER_ID => Some(""),
        _ => None,
    }
}
