//! Road network data model
//!
//! Contains the immutable-adjacency road graph plus the planner input
//! types. All per-run search state lives in the routing layer.

pub mod components;
pub mod geometry;
pub mod graph;

pub use components::{RoadNode, Waypoint};
pub use graph::RoadGraph;
