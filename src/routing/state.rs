//! Per-run search state shared by all strategies.

use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::Distance;

/// Frontier entry for use in a `BinaryHeap`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: Distance,
    /// Monotone insertion counter; ties resolve to the earliest insertion
    /// so expansion order is reproducible across runs.
    pub(crate) seq: u64,
    pub(crate) node: NodeIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

// Min-heap by priority (reversed from standard Rust BinaryHeap), then by
// insertion order.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A node whose scratch state changed during one step.
///
/// `via` is the node it was relaxed from (`None` for the expanded node
/// itself); the renderer draws the `via -> node` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepUpdate {
    pub node: NodeIndex,
    pub via: Option<NodeIndex>,
}

/// Mutable per-node search scratch, the only state `reset` touches.
///
/// Indexed by `NodeIndex`, sized once per graph. The backward fields are
/// written by the bidirectional strategy only.
#[derive(Debug, Clone)]
pub struct SearchScratch {
    pub(crate) cost: Vec<Distance>,
    pub(crate) cost_back: Vec<Distance>,
    pub(crate) heuristic: Vec<Distance>,
    pub(crate) parent: Vec<Option<NodeIndex>>,
    pub(crate) parent_back: Vec<Option<NodeIndex>>,
    pub(crate) visited: FixedBitSet,
    pub(crate) visited_back: FixedBitSet,
    pub(crate) in_frontier: FixedBitSet,
}

impl SearchScratch {
    pub(crate) fn new(node_count: usize) -> Self {
        SearchScratch {
            cost: vec![Distance::INFINITY; node_count],
            cost_back: vec![Distance::INFINITY; node_count],
            heuristic: vec![0.0; node_count],
            parent: vec![None; node_count],
            parent_back: vec![None; node_count],
            visited: FixedBitSet::with_capacity(node_count),
            visited_back: FixedBitSet::with_capacity(node_count),
            in_frontier: FixedBitSet::with_capacity(node_count),
        }
    }

    /// Restores every field to its construction default.
    pub(crate) fn reset(&mut self) {
        self.cost.fill(Distance::INFINITY);
        self.cost_back.fill(Distance::INFINITY);
        self.heuristic.fill(0.0);
        self.parent.fill(None);
        self.parent_back.fill(None);
        self.visited.clear();
        self.visited_back.clear();
        self.in_frontier.clear();
    }

    /// Accumulated forward cost, infinite while undiscovered.
    pub fn cost(&self, node: NodeIndex) -> Distance {
        self.cost[node.index()]
    }

    pub fn heuristic(&self, node: NodeIndex) -> Distance {
        self.heuristic[node.index()]
    }

    /// Predecessor on the best known path from the start.
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parent[node.index()]
    }

    /// Successor-side predecessor written by the backward frontier.
    pub fn parent_back(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parent_back[node.index()]
    }

    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.contains(node.index())
    }

    pub fn is_in_frontier(&self, node: NodeIndex) -> bool {
        self.in_frontier.contains(node.index())
    }
}
