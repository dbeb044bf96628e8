//! Convenience re-exports of the engine surface.

pub use crate::algo::tsp::{
    DEFAULT_TWO_OPT_ITERATIONS, TourPoint, nearest_neighbor_solution, point_distance,
    route_distance, two_opt_solution,
};
pub use crate::error::Error;
pub use crate::model::{RoadGraph, RoadNode, Waypoint};
pub use crate::routing::planner::{PlannedSegment, PlannerConfig, RoutePlan, RoutePlanner};
pub use crate::routing::session::SearchSession;
pub use crate::routing::state::StepUpdate;
pub use crate::routing::strategy::Strategy;
pub use crate::routing::trace::{SegmentTrace, TraceEdge, TraceKind, trace_to_geojson};
pub use crate::{Distance, NodeId, TRACE_TIME_SCALE};
