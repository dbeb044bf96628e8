//! Incremental search strategies, the session state machine and the
//! multi-segment route planner.

mod bidirectional;
pub mod planner;
pub mod session;
pub mod state;
pub mod strategy;
pub mod trace;
mod unidirectional;

pub use planner::{PlannedSegment, PlannerConfig, RoutePlan, RoutePlanner};
pub use session::SearchSession;
pub use state::{SearchScratch, StepUpdate};
pub use strategy::Strategy;
pub use trace::{SegmentTrace, TraceEdge, TraceKind, trace_to_geojson};
