//! Bidirectional uniform-cost search: a forward frontier from the start
//! and a backward frontier expanding reversed edges from the goal.

use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

use crate::Distance;
use crate::model::RoadGraph;
use crate::routing::state::{FrontierEntry, SearchScratch, StepUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

/// Incremental bidirectional search.
///
/// Each `next_step` advances both frontiers by one expansion. The run ends
/// when a node has been expanded by both sides; the joined path goes
/// through the best meeting candidate seen so far, the node minimizing
/// forward cost plus backward cost.
#[derive(Debug)]
pub(crate) struct BiSearch {
    start: NodeIndex,
    goal: NodeIndex,
    forward: BinaryHeap<FrontierEntry>,
    backward: BinaryHeap<FrontierEntry>,
    seq: u64,
    best_meeting: Option<(NodeIndex, Distance)>,
    finished: bool,
}

impl BiSearch {
    pub(crate) fn start(scratch: &mut SearchScratch, start: NodeIndex, goal: NodeIndex) -> Self {
        scratch.reset();
        scratch.cost[start.index()] = 0.0;
        scratch.cost_back[goal.index()] = 0.0;

        let mut search = BiSearch {
            start,
            goal,
            forward: BinaryHeap::new(),
            backward: BinaryHeap::new(),
            seq: 0,
            best_meeting: None,
            finished: false,
        };
        search.push(scratch, Side::Forward, start, 0.0);
        search.push(scratch, Side::Backward, goal, 0.0);
        search
    }

    pub(crate) fn finished(&self) -> bool {
        self.finished
    }

    fn push(
        &mut self,
        scratch: &mut SearchScratch,
        side: Side,
        node: NodeIndex,
        priority: Distance,
    ) {
        let heap = match side {
            Side::Forward => &mut self.forward,
            Side::Backward => &mut self.backward,
        };
        heap.push(FrontierEntry {
            priority,
            seq: self.seq,
            node,
        });
        self.seq += 1;
        scratch.in_frontier.insert(node.index());
    }

    /// Records `node` as a meeting candidate once both sides have assigned
    /// it a finite cost.
    fn note_candidate(&mut self, scratch: &SearchScratch, node: NodeIndex) {
        let i = node.index();
        let total = scratch.cost[i] + scratch.cost_back[i];
        if !total.is_finite() {
            return;
        }
        match self.best_meeting {
            Some((_, best)) if best <= total => {}
            _ => self.best_meeting = Some((node, total)),
        }
    }

    pub(crate) fn next_step(
        &mut self,
        graph: &RoadGraph,
        scratch: &mut SearchScratch,
    ) -> Vec<StepUpdate> {
        if self.finished {
            return Vec::new();
        }

        let mut updates = Vec::new();
        let mut met = self.expand(graph, scratch, Side::Forward, &mut updates);
        met |= self.expand(graph, scratch, Side::Backward, &mut updates);

        if met || updates.is_empty() {
            self.finished = true;
        }
        updates
    }

    /// Expands one entry of the given side's frontier. Returns true when the
    /// expanded node has now been visited by both sides.
    fn expand(
        &mut self,
        graph: &RoadGraph,
        scratch: &mut SearchScratch,
        side: Side,
        updates: &mut Vec<StepUpdate>,
    ) -> bool {
        let current = loop {
            let heap = match side {
                Side::Forward => &mut self.forward,
                Side::Backward => &mut self.backward,
            };
            let Some(entry) = heap.pop() else {
                return false;
            };
            let seen = match side {
                Side::Forward => scratch.visited.contains(entry.node.index()),
                Side::Backward => scratch.visited_back.contains(entry.node.index()),
            };
            if !seen {
                break entry.node;
            }
        };

        let i = current.index();
        match side {
            Side::Forward => scratch.visited.insert(i),
            Side::Backward => scratch.visited_back.insert(i),
        }
        scratch.in_frontier.set(i, false);
        self.note_candidate(scratch, current);
        updates.push(StepUpdate {
            node: current,
            via: None,
        });

        match side {
            Side::Forward => {
                let current_cost = scratch.cost[i];
                for (next, weight) in graph.neighbors_out(current) {
                    let j = next.index();
                    if scratch.visited.contains(j) {
                        continue;
                    }
                    let candidate = current_cost + weight;
                    if candidate < scratch.cost[j] {
                        scratch.cost[j] = candidate;
                        scratch.parent[j] = Some(current);
                        self.push(scratch, Side::Forward, next, candidate);
                        self.note_candidate(scratch, next);
                        updates.push(StepUpdate {
                            node: next,
                            via: Some(current),
                        });
                    }
                }
            }
            Side::Backward => {
                let current_cost = scratch.cost_back[i];
                for (next, weight) in graph.neighbors_in(current) {
                    let j = next.index();
                    if scratch.visited_back.contains(j) {
                        continue;
                    }
                    let candidate = current_cost + weight;
                    if candidate < scratch.cost_back[j] {
                        scratch.cost_back[j] = candidate;
                        scratch.parent_back[j] = Some(current);
                        self.push(scratch, Side::Backward, next, candidate);
                        self.note_candidate(scratch, next);
                        updates.push(StepUpdate {
                            node: next,
                            via: Some(current),
                        });
                    }
                }
            }
        }

        scratch.visited.contains(i) && scratch.visited_back.contains(i)
    }

    /// Forward half-path to the meeting node joined with the reversed
    /// backward half; `None` when the frontiers never met.
    pub(crate) fn path(&self, scratch: &SearchScratch) -> Option<Vec<NodeIndex>> {
        let (meeting, _) = self.best_meeting?;

        let mut path = Vec::new();
        let mut current = meeting;
        while current != self.start {
            path.push(current);
            current = scratch.parent[current.index()]?;
        }
        path.push(self.start);
        path.reverse();

        let mut current = meeting;
        while current != self.goal {
            current = scratch.parent_back[current.index()]?;
            path.push(current);
        }
        Some(path)
    }

    pub(crate) fn path_cost(&self) -> Option<Distance> {
        self.best_meeting.map(|(_, total)| total)
    }
}
