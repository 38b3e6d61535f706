//! Accumulation frame buffer shared by every ripple in a frame.
//!
//! The host clears the buffer once per animation frame, lets each live
//! ripple blend its tail in, then hands the finished frame to an
//! [`OutputDriver`]. Blending is additive with per-channel saturation at
//! 255, never wraparound.

use crate::OutputDriver;
use crate::color::Rgb;

/// Per-segment, per-LED color accumulator.
///
/// `SEGMENTS` and `LEDS` are the lattice dimensions; indices outside them
/// panic via the slice bounds check.
#[derive(Debug)]
pub struct FrameBuffer<const SEGMENTS: usize, const LEDS: usize> {
    pixels: [[Rgb; LEDS]; SEGMENTS],
}

impl<const SEGMENTS: usize, const LEDS: usize> FrameBuffer<SEGMENTS, LEDS> {
    pub fn new() -> Self {
        Self {
            pixels: [[Rgb::default(); LEDS]; SEGMENTS],
        }
    }

    /// Reset every pixel to black. Call once before each frame's
    /// accumulation.
    pub fn clear(&mut self) {
        self.pixels = [[Rgb::default(); LEDS]; SEGMENTS];
    }

    /// Additively blend a color into one pixel, saturating per channel
    pub fn blend_add(&mut self, segment: u8, led: u8, color: Rgb) {
        let pixel = &mut self.pixels[segment as usize][led as usize];
        pixel.r = pixel.r.saturating_add(color.r);
        pixel.g = pixel.g.saturating_add(color.g);
        pixel.b = pixel.b.saturating_add(color.b);
    }

    pub fn get(&self, segment: u8, led: u8) -> Rgb {
        self.pixels[segment as usize][led as usize]
    }

    /// One segment's strip, in LED order
    pub fn segment(&self, segment: u8) -> &[Rgb; LEDS] {
        &self.pixels[segment as usize]
    }

    /// Push the finished frame to a driver, one segment at a time
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_out(&self, driver: &mut impl OutputDriver) {
        for (segment, strip) in self.pixels.iter().enumerate() {
            driver.write(segment as u8, strip);
        }
    }
}

impl<const SEGMENTS: usize, const LEDS: usize> Default for FrameBuffer<SEGMENTS, LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
