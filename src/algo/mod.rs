//! Graph-independent route optimization heuristics.

pub mod tsp;

pub use tsp::{
    TourPoint, nearest_neighbor_solution, point_distance, route_distance, two_opt_solution,
};
