mod gradient;

pub use gradient::{DEFAULT_GRADIENT, GradientTable, PixelBuffer, segments_lit};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Unlit LED
pub const DARK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale a color by a brightness factor (0-255 = 0.0-1.0)
///
/// Each channel is scaled independently with truncating division,
/// so `255` keeps the color and `0` turns it off.
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale_channel(color.r, scale),
        g: scale_channel(color.g, scale),
        b: scale_channel(color.b, scale),
    }
}

#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn scale_channel(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}
