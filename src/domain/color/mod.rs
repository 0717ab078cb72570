//! Color domain module

mod hsluv;
mod rgba;

pub use hsluv::hsluv_to_rgb;
pub use rgba::Rgba;
