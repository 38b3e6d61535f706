//! Weighted routing with one global rule row.

use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Route, RouteStrategy};
use crate::topology::{Direction, PORTS_PER_NODE, Topology};

/// Routing strategy with a single weight row applied at every hub.
///
/// Unlike [`super::PerNodeRules`], the row is interpreted relative to the
/// incoming port: slot `j` weights the port `j` steps past the port the
/// ripple arrived through. The draw is renormalized at decision time over
/// the ports that are connected and not excluded.
pub struct SingleRule<R> {
    rules: [u8; PORTS_PER_NODE],
    rng: R,
}

impl<R: RngCore> SingleRule<R> {
    pub const fn new(rules: [u8; PORTS_PER_NODE], rng: R) -> Self {
        Self { rules, rng }
    }

    /// Whether a ripple may leave through `port`
    fn port_available(topology: &Topology<'_>, node: u8, excluded_port: u8, port: u8) -> bool {
        port != excluded_port && topology.is_connected(node, port)
    }

    /// Weight sum over the available ports, walked in rotated order
    /// starting at the excluded port.
    #[allow(clippy::cast_possible_truncation)]
    fn sum_available(&self, topology: &Topology<'_>, node: u8, excluded_port: u8) -> u16 {
        let mut sum: u16 = 0;

        for slot in 0..PORTS_PER_NODE as u8 {
            let port = (excluded_port + slot) % PORTS_PER_NODE as u8;
            if Self::port_available(topology, node, excluded_port, port) {
                sum += u16::from(self.rules[slot as usize]);
            }
        }

        sum
    }
}

impl<R: RngCore> RouteStrategy for SingleRule<R> {
    #[allow(clippy::cast_possible_truncation)]
    fn choose(&mut self, topology: &Topology<'_>, node: u8, excluded_port: u8) -> Route {
        let available = self.sum_available(topology, node, excluded_port);
        if available == 0 {
            // Nowhere to go by weight; defensive default.
            return Route {
                segment: 0,
                direction: Direction::Upwards,
            };
        }

        // Inclusive draw with strict comparison below, unlike the
        // per-node variant. The mismatch is inherited and preserved.
        let draw = self.rng.gen_range(1..=available);

        #[cfg(feature = "esp32-log")]
        println!("routing at node {}, arrived through port {}", node, excluded_port);

        let mut sum: u16 = 0;
        for slot in 0..PORTS_PER_NODE as u8 {
            let port = (excluded_port + slot) % PORTS_PER_NODE as u8;
            if !Self::port_available(topology, node, excluded_port, port) {
                continue;
            }

            sum += u16::from(self.rules[slot as usize]);
            if sum > draw {
                #[cfg(feature = "esp32-log")]
                println!("leaving through port {} (rule slot {})", port, slot);

                return Route {
                    segment: topology.segment_at(node, port),
                    direction: Direction::from_port(port),
                };
            }
        }

        // Reached when the draw lands on the full sum; defensive default.
        Route {
            segment: 0,
            direction: Direction::Upwards,
        }
    }
}
