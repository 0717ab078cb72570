//! Clipboard payload value object

use std::fmt;
use std::hash::Hasher;
use std::str::FromStr;

use image::RgbaImage;
use twox_hash::XxHash64;

use crate::domain::error::ImageSizeParseError;

/// Fingerprint reported for an empty buffer
const EMPTY_FINGERPRINT: u64 = 0;

/// Content currently held by one clipboard buffer.
///
/// Exactly one variant occupies a buffer at a time, so "has image" and
/// "has text" can never both be true.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    Text(String),
    Image(RgbaImage),
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Payload::Image(_))
    }

    /// Text content, if this payload is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Image content, if this payload is an image
    pub fn as_image(&self) -> Option<&RgbaImage> {
        match self {
            Payload::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<RgbaImage> {
        match self {
            Payload::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Content fingerprint used to detect changes on hosts without
    /// native change notifications.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = XxHash64::with_seed(0);
        match self {
            Payload::Empty => return EMPTY_FINGERPRINT,
            Payload::Text(text) => {
                hasher.write_u8(b't');
                hasher.write(text.as_bytes());
            }
            Payload::Image(image) => {
                hasher.write_u8(b'i');
                hasher.write_u32(image.width());
                hasher.write_u32(image.height());
                hasher.write(image.as_raw());
            }
        }
        hasher.finish()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Empty => write!(f, "empty"),
            Payload::Text(text) => write!(f, "text ({} bytes)", text.len()),
            Payload::Image(image) => write!(f, "image ({}x{})", image.width(), image.height()),
        }
    }
}

/// Pixel dimensions. A zero dimension means "unspecified" in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing bitmap
    pub fn of(image: &RgbaImage) -> Self {
        Self::new(image.width(), image.height())
    }

    /// True when both dimensions are positive
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Largest size with this aspect ratio that fits inside `bounds`.
    ///
    /// Integer arithmetic, matching toolkit keep-aspect-ratio scaling.
    /// Each resulting dimension is at least 1.
    pub fn fit_within(&self, bounds: ImageSize) -> ImageSize {
        if !self.is_valid() || !bounds.is_valid() {
            return *self;
        }

        let (w, h) = (self.width as u64, self.height as u64);
        let (bw, bh) = (bounds.width as u64, bounds.height as u64);

        let scaled_width = bh * w / h;
        let (width, height) = if scaled_width <= bw {
            (scaled_width, bh)
        } else {
            (bw, bw * h / w)
        };

        ImageSize::new(width.max(1) as u32, height.max(1) as u32)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ImageSize {
    type Err = ImageSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ImageSizeParseError {
            input: s.to_string(),
        };

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(err)?;
        let width = width.trim().parse().map_err(|_| err())?;
        let height = height.trim().parse().map_err(|_| err())?;

        Ok(ImageSize::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn default_is_empty() {
        let payload = Payload::default();
        assert!(payload.is_empty());
        assert!(!payload.is_image());
        assert!(payload.as_text().is_none());
    }

    #[test]
    fn text_accessors() {
        let payload = Payload::Text("hello".to_string());
        assert_eq!(payload.as_text(), Some("hello"));
        assert!(payload.as_image().is_none());
        assert!(!payload.is_image());
    }

    #[test]
    fn image_accessors() {
        let payload = Payload::Image(image(2, 3));
        assert!(payload.is_image());
        assert!(payload.as_text().is_none());
        assert_eq!(payload.into_image().map(|i| i.dimensions()), Some((2, 3)));
    }

    #[test]
    fn fingerprint_is_stable() {
        let a = Payload::Text("same".to_string());
        let b = Payload::Text("same".to_string());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_distinguishes_content() {
        let text = Payload::Text("a".to_string());
        let other = Payload::Text("b".to_string());
        let img = Payload::Image(image(1, 1));
        assert_ne!(text.fingerprint(), other.fingerprint());
        assert_ne!(text.fingerprint(), img.fingerprint());
        assert_ne!(Payload::Image(image(1, 2)).fingerprint(), img.fingerprint());
    }

    #[test]
    fn empty_fingerprint_is_fixed() {
        assert_eq!(Payload::Empty.fingerprint(), EMPTY_FINGERPRINT);
    }

    #[test]
    fn display() {
        assert_eq!(Payload::Empty.to_string(), "empty");
        assert_eq!(Payload::Text("abc".into()).to_string(), "text (3 bytes)");
        assert_eq!(Payload::Image(image(4, 2)).to_string(), "image (4x2)");
    }

    #[test]
    fn fit_wide_image_into_square() {
        let size = ImageSize::new(400, 200).fit_within(ImageSize::new(100, 100));
        assert_eq!(size, ImageSize::new(100, 50));
    }

    #[test]
    fn fit_tall_image_into_square() {
        let size = ImageSize::new(200, 400).fit_within(ImageSize::new(100, 100));
        assert_eq!(size, ImageSize::new(50, 100));
    }

    #[test]
    fn fit_upscales_small_image() {
        let size = ImageSize::new(10, 5).fit_within(ImageSize::new(100, 100));
        assert_eq!(size, ImageSize::new(100, 50));
    }

    #[test]
    fn fit_never_collapses_to_zero() {
        let size = ImageSize::new(1000, 1).fit_within(ImageSize::new(10, 10));
        assert_eq!(size, ImageSize::new(10, 1));
    }

    #[test]
    fn fit_ignores_unspecified_bounds() {
        let native = ImageSize::new(400, 200);
        assert_eq!(native.fit_within(ImageSize::new(0, 0)), native);
        assert_eq!(native.fit_within(ImageSize::new(100, 0)), native);
    }

    #[test]
    fn parse_size() {
        assert_eq!("100x50".parse::<ImageSize>().unwrap(), ImageSize::new(100, 50));
        assert_eq!(" 3X4 ".parse::<ImageSize>().unwrap(), ImageSize::new(3, 4));
        assert!("100".parse::<ImageSize>().is_err());
        assert!("axb".parse::<ImageSize>().is_err());
        assert!("-1x5".parse::<ImageSize>().is_err());
    }

    #[test]
    fn size_validity() {
        assert!(ImageSize::new(1, 1).is_valid());
        assert!(!ImageSize::new(0, 1).is_valid());
        assert!(!ImageSize::default().is_valid());
    }
}
