//! Single-frontier strategies: Dijkstra, Greedy and A*.

use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

use crate::Distance;
use crate::model::RoadGraph;
use crate::model::geometry::haversine_distance;
use crate::routing::state::{FrontierEntry, SearchScratch, StepUpdate};
use crate::routing::strategy::Strategy;

/// Incremental single-frontier search.
///
/// Each `next_step` call expands exactly one frontier entry; an empty
/// update list means the run is finished.
#[derive(Debug)]
pub(crate) struct UniSearch {
    strategy: Strategy,
    goal: NodeIndex,
    frontier: BinaryHeap<FrontierEntry>,
    seq: u64,
    finished: bool,
}

impl UniSearch {
    /// Clears prior scratch state, seeds the frontier with the start node
    /// at cost zero and arms the run.
    pub(crate) fn start(
        graph: &RoadGraph,
        scratch: &mut SearchScratch,
        strategy: Strategy,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Self {
        debug_assert!(
            !matches!(strategy, Strategy::Bidirectional),
            "bidirectional search uses its own engine"
        );
        scratch.reset();
        scratch.cost[start.index()] = 0.0;

        let mut search = UniSearch {
            strategy,
            goal,
            frontier: BinaryHeap::new(),
            seq: 0,
            finished: false,
        };
        if search.uses_heuristic() {
            scratch.heuristic[start.index()] = estimate(graph, start, goal);
        }
        let priority = search.priority(scratch, start);
        search.push(scratch, start, priority);
        search
    }

    pub(crate) fn finished(&self) -> bool {
        self.finished
    }

    fn uses_heuristic(&self) -> bool {
        matches!(self.strategy, Strategy::Greedy | Strategy::AStar)
    }

    fn priority(&self, scratch: &SearchScratch, node: NodeIndex) -> Distance {
        let i = node.index();
        match self.strategy {
            Strategy::Dijkstra => scratch.cost[i],
            Strategy::Greedy => scratch.heuristic[i],
            Strategy::AStar => scratch.cost[i] + scratch.heuristic[i],
            Strategy::Bidirectional => unreachable!(),
        }
    }

    fn push(&mut self, scratch: &mut SearchScratch, node: NodeIndex, priority: Distance) {
        self.frontier.push(FrontierEntry {
            priority,
            seq: self.seq,
            node,
        });
        self.seq += 1;
        scratch.in_frontier.insert(node.index());
    }

    /// Expands one frontier entry and relaxes its outgoing edges, returning
    /// every node whose scratch state changed. Empty once the goal is
    /// popped or the frontier runs dry.
    pub(crate) fn next_step(
        &mut self,
        graph: &RoadGraph,
        scratch: &mut SearchScratch,
    ) -> Vec<StepUpdate> {
        if self.finished {
            return Vec::new();
        }

        // Skip entries superseded by a later relaxation.
        let current = loop {
            match self.frontier.pop() {
                Some(entry) if scratch.visited.contains(entry.node.index()) => {}
                Some(entry) => break entry.node,
                None => {
                    self.finished = true;
                    return Vec::new();
                }
            }
        };

        scratch.visited.insert(current.index());
        scratch.in_frontier.set(current.index(), false);

        if current == self.goal {
            self.finished = true;
            return Vec::new();
        }

        let mut updates = vec![StepUpdate {
            node: current,
            via: None,
        }];
        let current_cost = scratch.cost[current.index()];

        for (next, weight) in graph.neighbors_out(current) {
            let i = next.index();
            if scratch.visited.contains(i) {
                continue;
            }
            let candidate = current_cost + weight;
            if candidate < scratch.cost[i] {
                scratch.cost[i] = candidate;
                scratch.parent[i] = Some(current);
                if self.uses_heuristic() {
                    scratch.heuristic[i] = estimate(graph, next, self.goal);
                }
                let priority = self.priority(scratch, next);
                self.push(scratch, next, priority);
                updates.push(StepUpdate {
                    node: next,
                    via: Some(current),
                });
            }
        }

        updates
    }

    /// Parent-chain walk from the goal back to the start; `None` when the
    /// goal was never reached.
    pub(crate) fn path(
        &self,
        scratch: &SearchScratch,
        start: NodeIndex,
    ) -> Option<Vec<NodeIndex>> {
        if !scratch.cost[self.goal.index()].is_finite() {
            return None;
        }
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while current != start {
            current = scratch.parent[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn path_cost(&self, scratch: &SearchScratch) -> Option<Distance> {
        let cost = scratch.cost[self.goal.index()];
        cost.is_finite().then_some(cost)
    }
}

/// Straight-line distance to the goal. Never overestimates the true
/// remaining road distance, which keeps A* optimal.
fn estimate(graph: &RoadGraph, node: NodeIndex, goal: NodeIndex) -> Distance {
    haversine_distance(graph.node(node).geometry, graph.node(goal).geometry)
}
