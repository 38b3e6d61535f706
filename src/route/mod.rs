//! Routing strategies for hub decisions.
//!
//! When a ripple reaches the end of a segment it enters a hub and must
//! leave through some other port. A strategy picks that port
//! stochastically from a weight table; the port it arrived through is
//! never chosen. Two table shapes exist: one weight row per hub node
//! ([`PerNodeRules`]) and a single global row applied everywhere
//! ([`SingleRule`]).
//!
//! The two variants normalize their random draw differently (see each
//! implementation). The asymmetry is inherited behavior and is kept as
//! two separate strategies on purpose.

mod per_node;
mod single_rule;

pub use per_node::{MAX_RULE_ISSUES, PerNodeRules, RuleIssue, RuleReport};
pub use single_rule::SingleRule;

use crate::topology::{Direction, Topology};

/// Outcome of a routing decision at a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub segment: u8,
    pub direction: Direction,
}

/// Policy choosing the outgoing segment when a ripple enters a hub.
pub trait RouteStrategy {
    /// Choose the segment and travel direction to leave `node` by.
    ///
    /// `excluded_port` is the port the ripple arrives through.
    fn choose(&mut self, topology: &Topology<'_>, node: u8, excluded_port: u8) -> Route;
}
