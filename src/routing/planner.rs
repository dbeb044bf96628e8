//! Multi-segment route planning over an ordered waypoint list.

use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::model::geometry::planar_distance;
use crate::model::{RoadGraph, Waypoint};
use crate::routing::session::SearchSession;
use crate::routing::strategy::Strategy;
use crate::routing::trace::{SegmentTrace, TraceEdge, TraceKind};
use crate::{Distance, Error, NodeId, TRACE_TIME_SCALE};

/// Animation pacing knobs.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Steps-per-tick rate the renderer drives at. Route trace-back edges
    /// play back `log2(speed)` times slower than exploration edges so the
    /// final path stays readable at high speeds.
    pub speed: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig { speed: 5.0 }
    }
}

impl PlannerConfig {
    fn route_multiplier(&self) -> f64 {
        self.speed.log2().max(1.0)
    }
}

/// Resolved endpoints and outcome of one planned segment, fed back to the
/// caller for re-planning.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedSegment {
    pub from_id: NodeId,
    pub to_id: NodeId,
    /// Dwell time at the segment's destination waypoint, minutes.
    pub stop_time: Option<f64>,
    /// Path cost in meters, `None` when the destination was unreachable.
    pub cost: Option<Distance>,
    pub reached: bool,
}

/// Full multi-segment timeline plus per-segment resolution results.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub trace: Vec<TraceEdge>,
    pub total_duration: f64,
    pub segments: Vec<PlannedSegment>,
}

/// Plans a route through an ordered waypoint list by driving one search
/// session per consecutive pair and stitching the per-segment traces into
/// one continuous timeline.
#[derive(Debug)]
pub struct RoutePlanner {
    session: SearchSession,
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(graph: RoadGraph, config: PlannerConfig) -> Result<Self, Error> {
        Ok(RoutePlanner {
            session: SearchSession::new(graph)?,
            config,
        })
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Plans the whole waypoint list with one strategy.
    ///
    /// Every waypoint resolves to its nearest graph node before planning; a
    /// failed resolution aborts with an error rather than silently skipping
    /// the segment. An unreachable destination does not abort: the segment
    /// is recorded with `reached = false` and planning continues from its
    /// resolved node.
    pub fn plan_route(
        &mut self,
        waypoints: &[Waypoint],
        strategy: Strategy,
    ) -> Result<RoutePlan, Error> {
        if waypoints.len() < 2 {
            return Err(Error::TooFewWaypoints(waypoints.len()));
        }

        let resolved = waypoints
            .iter()
            .map(|waypoint| {
                self.session
                    .graph()
                    .find_nearest_node(waypoint.lat, waypoint.lon)
                    .ok_or(Error::EmptyGraph)
            })
            .collect::<Result<Vec<NodeIndex>, Error>>()?;

        info!(
            "planning {} segments with {strategy:?}",
            resolved.len() - 1
        );

        let mut trace: Vec<TraceEdge> = Vec::new();
        let mut clock = 0.0;
        let mut segments = Vec::with_capacity(resolved.len() - 1);

        for (i, (&from, &to)) in resolved.iter().tuple_windows().enumerate() {
            let (segment_trace, cost) = self.run_segment(from, to, strategy);
            let from_id = self.session.graph().node(from).id;
            let to_id = self.session.graph().node(to).id;
            if cost.is_none() {
                warn!("segment {from_id} -> {to_id} is unreachable");
            }
            debug!(
                "segment {from_id} -> {to_id}: {} trace edges, duration {:.0}",
                segment_trace.edges.len(),
                segment_trace.duration
            );

            for edge in &segment_trace.edges {
                trace.push(TraceEdge {
                    start_time: edge.start_time + clock,
                    end_time: edge.end_time + clock,
                    ..*edge
                });
            }
            clock += segment_trace.duration;

            segments.push(PlannedSegment {
                from_id,
                to_id,
                stop_time: waypoints[i + 1].stop_time,
                cost,
                reached: cost.is_some(),
            });
        }

        // Degenerate runs can finish without a single route-tagged edge;
        // relabel so the renderer always has a traceable path.
        if !trace.iter().any(|edge| edge.kind == TraceKind::Route) {
            warn!("no route edges in the stitched trace, relabeling all edges");
            for edge in &mut trace {
                edge.kind = TraceKind::Route;
            }
        }

        info!(
            "planned route: {} trace edges, total duration {clock:.0}",
            trace.len()
        );

        Ok(RoutePlan {
            trace,
            total_duration: clock,
            segments,
        })
    }

    /// Runs one segment to exhaustion, recording explored edges in
    /// expansion order followed by the reconstructed route edges, on a
    /// segment-local clock starting at zero.
    fn run_segment(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        strategy: Strategy,
    ) -> (SegmentTrace, Option<Distance>) {
        self.session.start_between(from, to, strategy);

        let mut segment_trace = SegmentTrace::default();
        while !self.session.finished() {
            for update in self.session.next_step() {
                let Some(via) = update.via else { continue };
                let from_point = self.session.graph().node(via).geometry;
                let to_point = self.session.graph().node(update.node).geometry;
                let duration = planar_distance(from_point, to_point) * TRACE_TIME_SCALE;
                segment_trace.push(from_point, to_point, duration, TraceKind::Explored);
            }
        }

        let cost = self.session.path_cost();
        if let Some(path) = self.session.path() {
            let multiplier = self.config.route_multiplier();
            for (&a, &b) in path.iter().tuple_windows() {
                let from_point = self.session.graph().node(a).geometry;
                let to_point = self.session.graph().node(b).geometry;
                let duration =
                    planar_distance(from_point, to_point) * TRACE_TIME_SCALE * multiplier;
                segment_trace.push(from_point, to_point, duration, TraceKind::Route);
            }
        }

        (segment_trace, cost)
    }
}
