//! Incremental path search and multi-waypoint route planning over
//! geographic road graphs.
//!
//! The search engine is a resumable state machine: every call to
//! [`routing::SearchSession::next_step`] performs one bounded unit of
//! frontier expansion and reports exactly the nodes it touched, so an
//! external renderer can animate progress at its own pace. Four strategies
//! (Dijkstra, Greedy, A*, Bidirectional) share the same step contract.
//! [`routing::RoutePlanner`] chains searches across an ordered waypoint
//! list into one continuous, time-stamped trace, and [`algo::tsp`] provides
//! pure traveling-salesman heuristics for reordering intermediate stops
//! before planning.

pub mod algo;
pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Stable external identifier of a road node (e.g. an OSM node id).
pub type NodeId = i64;

/// Path cost / edge weight, meters.
pub type Distance = f64;

/// Scale factor turning planar degree-space edge lengths into trace
/// timeline units.
pub const TRACE_TIME_SCALE: f64 = 50_000.0;
