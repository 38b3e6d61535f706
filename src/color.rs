//! Pixel color type and packed-value helpers.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Create an RGB color from a packed 0xRRGGBB value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Attenuate one channel by a fade factor, truncating toward zero.
///
/// Out-of-range factors saturate at the byte bounds rather than wrapping.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fade_channel(channel: u8, factor: f32) -> u8 {
    (factor * f32::from(channel)) as u8
}

/// Attenuate every channel of a color by a fade factor
pub fn fade_color(color: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: fade_channel(color.r, factor),
        g: fade_channel(color.g, factor),
        b: fade_channel(color.b, factor),
    }
}
