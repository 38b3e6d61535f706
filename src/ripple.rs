//! The ripple entity: a short, fading tail of pixels that travels across
//! the lattice one LED per step, choosing its path at every hub through a
//! [`RouteStrategy`].
//!
//! A ripple is owned and driven by the host's frame loop: call
//! [`Ripple::advance`] once per frame with the current instant, blend it
//! into the shared buffer with [`Ripple::render`], and discard it once
//! [`Ripple::is_dead`] reports true. The ripple never destroys itself.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, fade_color, rgb_from_u32};
use crate::frame::FrameBuffer;
use crate::route::RouteStrategy;
use crate::topology::{Direction, Topology};

/// State of one tail pixel. Index 0 of the tail is the head.
#[derive(Debug, Clone, Copy)]
pub struct TailPixel {
    pub direction: Direction,
    pub segment: u8,
    pub led: u8,
    pub color: Rgb,
}

/// Provider returning the same value on every call.
///
/// Convenience for the common case where a color, speed or fade parameter
/// is meant to be constant rather than computed per tick.
pub fn constant<T: Copy>(value: T) -> impl FnMut() -> T {
    move || value
}

/// A moving, fading pulse of `LEN` pixels.
///
/// Behavior is injected as three zero-argument providers, invoked once per
/// logical step: `color` yields a packed 0xRRGGBB value for the new head
/// pixel, `speed` yields the milliseconds one LED of travel takes, and
/// `fade` yields the per-step attenuation factor for the tail (expected in
/// 0.0..=1.0, not enforced).
pub struct Ripple<'t, C, S, F, R, const LEN: usize>
where
    C: FnMut() -> u32,
    S: FnMut() -> u64,
    F: FnMut() -> f32,
    R: RouteStrategy,
{
    topology: Topology<'t>,
    tail: [TailPixel; LEN],
    color: C,
    speed: S,
    fade: F,
    route: R,
    lifetime: Duration,
    life: Duration,
    last_step: Instant,
    dead: bool,
}

impl<'t, C, S, F, R, const LEN: usize> Ripple<'t, C, S, F, R, LEN>
where
    C: FnMut() -> u32,
    S: FnMut() -> u64,
    F: FnMut() -> f32,
    R: RouteStrategy,
{
    /// Create a ripple with every tail pixel set to one starting color.
    ///
    /// The ripple is not placed anywhere useful until [`Self::start`].
    pub fn new(
        topology: Topology<'t>,
        mut color: C,
        speed: S,
        lifetime: Duration,
        fade: F,
        route: R,
    ) -> Self {
        let pixel = TailPixel {
            direction: Direction::Upwards,
            segment: 0,
            led: 0,
            color: rgb_from_u32(color()),
        };

        Self {
            topology,
            tail: [pixel; LEN],
            color,
            speed,
            fade,
            route,
            lifetime,
            life: Duration::from_millis(0),
            last_step: Instant::from_millis(0),
            dead: false,
        }
    }

    /// (Re)arm the ripple at a hub node.
    ///
    /// Resets life and death and routes the head out of `starting_node`
    /// with port 0 excluded. The whole tail collapses onto the starting
    /// position and unfolds again over the next steps. This is the only
    /// transition that brings a dead ripple back.
    pub fn start(&mut self, starting_node: u8) {
        self.life = Duration::from_millis(0);
        self.dead = false;

        let route = self.route.choose(&self.topology, starting_node, 0);
        let led = match route.direction {
            Direction::Upwards => 0,
            Direction::Downwards => self.topology.last_led(),
        };

        for pixel in &mut self.tail {
            pixel.segment = route.segment;
            pixel.direction = route.direction;
            pixel.led = led;
        }
    }

    /// Advance by at most one LED.
    ///
    /// A no-op until one `speed()` interval has passed since the last
    /// step, so calling it more often than the step rate is harmless.
    /// Drift is absorbed silently: a late call still moves one LED only.
    pub fn advance(&mut self, now: Instant) {
        let speed = Duration::from_millis((self.speed)());
        if now < self.last_step + speed {
            return;
        }
        self.last_step = now;

        self.life += speed;
        if self.life >= self.lifetime {
            self.dead = true;
        }

        // Shift the tail. The trailing color at each position is the
        // previous step's color of the pixel ahead, attenuated once.
        let fade = (self.fade)();
        for i in (1..LEN).rev() {
            let ahead = self.tail[i - 1];
            self.tail[i] = TailPixel {
                color: fade_color(ahead.color, fade),
                ..ahead
            };
        }

        let head = self.tail[0];
        self.tail[0].color = rgb_from_u32((self.color)());

        if let Some(led) = self.topology.next_led(head.led, head.direction) {
            self.tail[0].led = led;
        } else {
            // Segment boundary: resolve the hub and the arrival port,
            // then route onward.
            let node = self.topology.node_toward(head.segment, head.direction);
            let arrival = self.topology.entry_port(node, head.segment);
            let route = self.route.choose(&self.topology, node, arrival);

            self.tail[0].direction = route.direction;
            self.tail[0].segment = route.segment;
            self.tail[0].led = match route.direction {
                Direction::Upwards => 0,
                Direction::Downwards => self.topology.last_led(),
            };
        }
    }

    /// Additively blend the tail into the shared frame buffer
    pub fn render<const SEGMENTS: usize, const LEDS: usize>(
        &self,
        frame: &mut FrameBuffer<SEGMENTS, LEDS>,
    ) {
        for pixel in &self.tail {
            frame.blend_add(pixel.segment, pixel.led, pixel.color);
        }
    }

    /// True once accumulated life has reached the configured lifetime
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    pub const fn life(&self) -> Duration {
        self.life
    }

    /// The head pixel
    pub const fn head(&self) -> &TailPixel {
        &self.tail[0]
    }

    /// The whole tail, head first
    pub const fn tail(&self) -> &[TailPixel; LEN] {
        &self.tail
    }
}
