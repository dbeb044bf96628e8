//! One resumable search over one loaded graph.

use log::debug;
use petgraph::graph::NodeIndex;

use crate::model::RoadGraph;
use crate::routing::bidirectional::BiSearch;
use crate::routing::state::{SearchScratch, StepUpdate};
use crate::routing::strategy::Strategy;
use crate::routing::unidirectional::UniSearch;
use crate::{Distance, Error};

#[derive(Debug)]
enum Engine {
    Uni(UniSearch),
    Bi(BiSearch),
}

/// Owns one road graph, its per-run scratch state and the active strategy
/// engine.
///
/// Steps within a session are strictly sequential; re-arming via `start_*`
/// or cancelling via `reset` is always safe because all run state lives in
/// the session-owned scratch. Sessions are independently constructible, so
/// tests and embedders can hold several at once.
#[derive(Debug)]
pub struct SearchSession {
    graph: RoadGraph,
    scratch: SearchScratch,
    engine: Option<Engine>,
    run_start: Option<NodeIndex>,
    finished: bool,
}

impl SearchSession {
    /// Rejects empty graphs up front so a run can never be started on one.
    pub fn new(graph: RoadGraph) -> Result<Self, Error> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let scratch = SearchScratch::new(graph.node_count());
        Ok(SearchSession {
            graph,
            scratch,
            engine: None,
            run_start: None,
            finished: false,
        })
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn scratch(&self) -> &SearchScratch {
        &self.scratch
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Starts a run between the graph's designated endpoints.
    pub fn start(&mut self, strategy: Strategy) -> Result<(), Error> {
        let start = self.graph.start_node().ok_or(Error::EndpointsNotSet)?;
        let end = self.graph.end_node().ok_or(Error::EndpointsNotSet)?;
        self.start_between(start, end, strategy);
        Ok(())
    }

    /// Starts a run between explicit endpoints, re-arming any prior run.
    pub fn start_between(&mut self, from: NodeIndex, to: NodeIndex, strategy: Strategy) {
        self.finished = false;
        self.run_start = Some(from);
        debug!(
            "starting {strategy:?} search {} -> {}",
            self.graph.node(from).id,
            self.graph.node(to).id
        );
        self.engine = Some(match strategy {
            Strategy::Bidirectional => Engine::Bi(BiSearch::start(&mut self.scratch, from, to)),
            _ => Engine::Uni(UniSearch::start(
                &self.graph,
                &mut self.scratch,
                strategy,
                from,
                to,
            )),
        });
    }

    /// One bounded unit of work. Latches `finished` when the engine reports
    /// done or has nothing left to update.
    pub fn next_step(&mut self) -> Vec<StepUpdate> {
        debug_assert!(self.engine.is_some(), "next_step called before start");
        let Some(engine) = self.engine.as_mut() else {
            return Vec::new();
        };
        let updates = match engine {
            Engine::Uni(search) => search.next_step(&self.graph, &mut self.scratch),
            Engine::Bi(search) => search.next_step(&self.graph, &mut self.scratch),
        };
        let engine_finished = match engine {
            Engine::Uni(search) => search.finished(),
            Engine::Bi(search) => search.finished(),
        };
        if engine_finished || updates.is_empty() {
            self.finished = true;
        }
        updates
    }

    /// Node chain of the found path. `None` while still running, and `None`
    /// after finishing when the goal was unreachable, which is a normal
    /// terminal outcome rather than an error.
    pub fn path(&self) -> Option<Vec<NodeIndex>> {
        if !self.finished {
            return None;
        }
        match self.engine.as_ref()? {
            Engine::Uni(search) => search.path(&self.scratch, self.run_start?),
            Engine::Bi(search) => search.path(&self.scratch),
        }
    }

    /// Accumulated cost of the found path.
    pub fn path_cost(&self) -> Option<Distance> {
        if !self.finished {
            return None;
        }
        match self.engine.as_ref()? {
            Engine::Uni(search) => search.path_cost(&self.scratch),
            Engine::Bi(search) => search.path_cost(),
        }
    }

    /// Synchronous cancel: discards the run and restores every scratch
    /// field to its default. Adjacency survives for the next run.
    pub fn reset(&mut self) {
        self.finished = false;
        self.engine = None;
        self.run_start = None;
        self.scratch.reset();
    }

    pub fn into_graph(self) -> RoadGraph {
        self.graph
    }
}
