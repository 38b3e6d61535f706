//! Weighted routing with one rule row per hub node.

use heapless::Vec;
use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Route, RouteStrategy};
use crate::topology::{Direction, PORTS_PER_NODE, Topology};

/// Issues retained by a [`RuleReport`]; further ones are dropped.
pub const MAX_RULE_ISSUES: usize = 16;

/// Single finding from validating a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleIssue {
    /// A weight is assigned to a port with no connected segment.
    UnconnectedPort { node: u8, port: u8 },
    /// A node's weights do not sum to 100 percent.
    BadWeightSum { node: u8, sum: u16 },
}

/// Advisory validation result.
///
/// Issues never prevent use of the table; a ripple routed by an invalid
/// table keeps running with whatever the table yields.
#[derive(Debug, Default)]
pub struct RuleReport {
    issues: Vec<RuleIssue, MAX_RULE_ISSUES>,
}

impl RuleReport {
    pub fn issues(&self) -> &[RuleIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, issue: RuleIssue) {
        let _ = self.issues.push(issue);
    }
}

/// Routing strategy with a weight row per hub node.
///
/// `rules[node][port]` is a percentage weight in 0..=100; weights on
/// disabled ports must be 0 and each row must sum to exactly 100. The
/// table is validated at construction, but only advisorily.
pub struct PerNodeRules<'r, R> {
    rules: &'r [[u8; PORTS_PER_NODE]],
    rng: R,
}

impl<'r, R: RngCore> PerNodeRules<'r, R> {
    /// Create the strategy and validate the table against the topology.
    ///
    /// Findings are logged when the `esp32-log` feature is on and are
    /// otherwise discarded; use [`Self::check`] to inspect them directly.
    pub fn new(rules: &'r [[u8; PORTS_PER_NODE]], topology: &Topology<'_>, rng: R) -> Self {
        let strategy = Self { rules, rng };
        let report = strategy.check(topology);

        #[cfg(feature = "esp32-log")]
        for issue in report.issues() {
            match *issue {
                RuleIssue::UnconnectedPort { node, port } => {
                    println!("rule for unconnected port {} at node {}", port, node);
                }
                RuleIssue::BadWeightSum { node, sum } => {
                    println!("weight sum of node {} is {}, not 100", node, sum);
                }
            }
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = report;

        strategy
    }

    /// Validate the rule table against the wired topology.
    #[allow(clippy::cast_possible_truncation)]
    pub fn check(&self, topology: &Topology<'_>) -> RuleReport {
        let mut report = RuleReport::default();

        for (node, weights) in self.rules.iter().enumerate() {
            let node = node as u8;
            let mut sum: u16 = 0;

            for (port, &weight) in weights.iter().enumerate() {
                let port = port as u8;
                sum += u16::from(weight);
                if weight != 0 && !topology.is_connected(node, port) {
                    report.push(RuleIssue::UnconnectedPort { node, port });
                }
            }

            if sum != 100 {
                report.push(RuleIssue::BadWeightSum { node, sum });
            }
        }

        report
    }
}

impl<R: RngCore> RouteStrategy for PerNodeRules<'_, R> {
    #[allow(clippy::cast_possible_truncation)]
    fn choose(&mut self, topology: &Topology<'_>, node: u8, excluded_port: u8) -> Route {
        let weights = &self.rules[node as usize];
        let excluded_weight = u16::from(weights[excluded_port as usize]);

        // The draw range only discounts the excluded port's own weight,
        // biasing toward the remaining ports rather than renormalizing.
        let draw = self.rng.gen_range(0..=100u16.saturating_sub(excluded_weight));

        let mut sum: u16 = 0;
        for port in 0..PORTS_PER_NODE as u8 {
            if port == excluded_port {
                continue;
            }

            sum += u16::from(weights[port as usize]);
            if draw <= sum {
                return Route {
                    segment: topology.segment_at(node, port),
                    direction: Direction::from_port(port),
                };
            }
        }

        // Unreachable with a valid table; defensive default.
        Route {
            segment: topology.segment_at(node, 0),
            direction: Direction::from_port(0),
        }
    }
}
