//! Static description of the LED lattice.
//!
//! The lattice is a fixed bidirectional graph: hub nodes expose a fixed
//! number of ports, each port is wired to at most one linear LED segment,
//! and every segment joins two hubs. The tables are owned by the host and
//! borrowed here read-only; they never change for the process lifetime.

/// Number of ports on every hub node.
pub const PORTS_PER_NODE: usize = 6;

/// Sentinel marking an unconnected port in the node table.
pub const NO_SEGMENT: u8 = 255;

/// Direction of travel along a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// LED index increasing.
    Upwards,
    /// LED index decreasing.
    Downwards,
}

impl Direction {
    /// Direction implied by leaving a hub through the given port.
    ///
    /// Ports 0, 1 and 5 are wired to the low-index end of their segment,
    /// so a ripple leaving through them travels upwards; ports 2, 3 and 4
    /// travel downwards. Fixed wiring convention of the six-port hub.
    pub const fn from_port(port: u8) -> Self {
        match port {
            0 | 1 | 5 => Self::Upwards,
            _ => Self::Downwards,
        }
    }

    pub const fn is_upwards(self) -> bool {
        matches!(self, Self::Upwards)
    }
}

/// Borrowed view of the lattice wiring tables.
///
/// `node_ports[node][port]` names the segment on a port (or [`NO_SEGMENT`]),
/// `segment_ends[segment]` names the two hubs a segment joins
/// (end 0 = downward node, end 1 = upward node). The mapping is symmetric:
/// if a node's port names a segment, that segment's matching end names the
/// node back.
#[derive(Debug, Clone, Copy)]
pub struct Topology<'a> {
    node_ports: &'a [[u8; PORTS_PER_NODE]],
    segment_ends: &'a [[u8; 2]],
    leds_per_segment: u8,
}

impl<'a> Topology<'a> {
    pub const fn new(
        node_ports: &'a [[u8; PORTS_PER_NODE]],
        segment_ends: &'a [[u8; 2]],
        leds_per_segment: u8,
    ) -> Self {
        Self {
            node_ports,
            segment_ends,
            leds_per_segment,
        }
    }

    pub const fn node_count(&self) -> usize {
        self.node_ports.len()
    }

    pub const fn segment_count(&self) -> usize {
        self.segment_ends.len()
    }

    pub const fn leds_per_segment(&self) -> u8 {
        self.leds_per_segment
    }

    /// Highest LED index on a segment
    pub const fn last_led(&self) -> u8 {
        self.leds_per_segment - 1
    }

    /// Segment wired to a port of a node, [`NO_SEGMENT`] if none
    pub fn segment_at(&self, node: u8, port: u8) -> u8 {
        self.node_ports[node as usize][port as usize]
    }

    /// Whether a port of a node has a segment wired to it
    pub fn is_connected(&self, node: u8, port: u8) -> bool {
        self.segment_at(node, port) != NO_SEGMENT
    }

    /// Hub entered when a segment runs out in the given travel direction.
    ///
    /// Upward travel runs out at the segment's end-0 node.
    pub fn node_toward(&self, segment: u8, direction: Direction) -> u8 {
        let end = match direction {
            Direction::Upwards => 0,
            Direction::Downwards => 1,
        };
        self.segment_ends[segment as usize][end]
    }

    /// Port of `node` wired to `segment`, i.e. the port a ripple arrives
    /// through. Defaults to port 0 when no port matches.
    #[allow(clippy::cast_possible_truncation)]
    pub fn entry_port(&self, node: u8, segment: u8) -> u8 {
        for (port, &wired) in self.node_ports[node as usize].iter().enumerate() {
            if wired == segment {
                return port as u8;
            }
        }
        0
    }

    /// One-LED step along a segment, `None` when the boundary is reached
    pub fn next_led(&self, led: u8, direction: Direction) -> Option<u8> {
        match direction {
            Direction::Upwards if led + 1 < self.leds_per_segment => Some(led + 1),
            Direction::Downwards if led > 0 => Some(led - 1),
            _ => None,
        }
    }
}
