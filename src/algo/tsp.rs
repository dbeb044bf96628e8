//! Traveling-salesman heuristics for reordering intermediate stops.
//!
//! Pure distance-space functions over raw coordinates; the road graph is
//! never consulted. The fixed start and end never move, only the relative
//! order of intermediate points changes.

use geo::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::geometry::haversine_distance;

/// Default iteration cap for [`two_opt_solution`].
pub const DEFAULT_TWO_OPT_ITERATIONS: usize = 100;

/// A stop candidate in distance space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TourPoint {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
}

impl TourPoint {
    pub fn new(id: u64, lat: f64, lon: f64) -> Self {
        TourPoint { id, lat, lon }
    }

    fn geometry(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Great-circle distance between two points, meters.
pub fn point_distance(a: &TourPoint, b: &TourPoint) -> f64 {
    haversine_distance(a.geometry(), b.geometry())
}

/// Total route length as the sum of consecutive legs.
pub fn route_distance(route: &[TourPoint]) -> f64 {
    route
        .iter()
        .tuple_windows()
        .map(|(a, b)| point_distance(a, b))
        .sum()
}

/// Orders intermediates by always extending the route with the unvisited
/// point nearest to the current tail; `end` is appended last unless it is
/// the same stop as `start`. O(n²).
pub fn nearest_neighbor_solution(
    points: &[TourPoint],
    start: &TourPoint,
    end: &TourPoint,
) -> Vec<TourPoint> {
    let mut remaining = points.to_vec();
    let mut route = Vec::with_capacity(points.len() + 2);
    route.push(*start);

    let mut current = *start;
    while !remaining.is_empty() {
        // First-encountered wins on exact ties, keeping the result stable.
        let mut nearest = 0;
        let mut nearest_distance = point_distance(&current, &remaining[0]);
        for (i, point) in remaining.iter().enumerate().skip(1) {
            let distance = point_distance(&current, point);
            if distance < nearest_distance {
                nearest = i;
                nearest_distance = distance;
            }
        }
        current = remaining.remove(nearest);
        route.push(current);
    }

    if end.id != start.id {
        route.push(*end);
    }
    route
}

/// Improves the nearest-neighbor tour with first-improvement 2-opt moves:
/// reverse a contiguous stretch of intermediates, keep it if the total
/// length strictly drops, and restart the scan after every accepted move,
/// until no improving move exists or `max_iterations` is reached.
pub fn two_opt_solution(
    points: &[TourPoint],
    start: &TourPoint,
    end: &TourPoint,
    max_iterations: usize,
) -> Vec<TourPoint> {
    if points.len() < 3 {
        return nearest_neighbor_solution(points, start, end);
    }

    let mut route = nearest_neighbor_solution(points, start, end);
    let mut best_distance = route_distance(&route);
    let mut improved = true;
    let mut iterations = 0;

    while improved && iterations < max_iterations {
        improved = false;
        iterations += 1;

        'scan: for i in 1..route.len() - 2 {
            for j in i + 1..route.len() - 1 {
                let mut candidate = route.clone();
                candidate[i..=j].reverse();
                let candidate_distance = route_distance(&candidate);
                if candidate_distance < best_distance {
                    route = candidate;
                    best_distance = candidate_distance;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    log::debug!("2-opt settled after {iterations} iterations at {best_distance:.1} m");
    route
}
