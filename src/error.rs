use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Node {0} not found in the loaded graph")]
    NodeNotFound(NodeId),
    #[error("Graph contains no nodes")]
    EmptyGraph,
    #[error("Invalid waypoint: {0}")]
    InvalidWaypoint(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Start and end nodes are not set on the graph")]
    EndpointsNotSet,
    #[error("Route planning needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),
}
