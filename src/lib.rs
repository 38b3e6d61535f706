#![no_std]

pub mod color;
pub mod frame;
pub mod ripple;
pub mod route;
pub mod topology;

pub use color::{Rgb, rgb_from_u32};
pub use frame::FrameBuffer;
pub use ripple::{Ripple, TailPixel, constant};
pub use route::{PerNodeRules, Route, RouteStrategy, RuleIssue, RuleReport, SingleRule};
pub use topology::{Direction, NO_SEGMENT, PORTS_PER_NODE, Topology};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to push finished frames to hardware, one segment
/// strip at a time. The frame buffer is generic over this trait.
pub trait OutputDriver {
    /// Write one segment's colors to its LED strip
    fn write(&mut self, segment: u8, colors: &[Rgb]);
}
