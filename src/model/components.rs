//! Road network components and planner inputs.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Error, NodeId};

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Stable id from the source graph (e.g. OSM)
    pub id: NodeId,
    /// Node coordinates, x = lon, y = lat
    pub geometry: Point<f64>,
}

/// Externally supplied stop on a requested route.
///
/// Validated once at construction and resolved to a concrete graph node by
/// the planner; holds no search state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    /// Optional dwell time at this stop, minutes.
    pub stop_time: Option<f64>,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(Error::InvalidWaypoint(format!(
                "non-finite coordinates ({lat}, {lon})"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidWaypoint(format!(
                "coordinates out of range ({lat}, {lon})"
            )));
        }
        Ok(Waypoint {
            lat,
            lon,
            stop_time: None,
        })
    }

    pub fn with_stop_time(lat: f64, lon: f64, stop_time: f64) -> Result<Self, Error> {
        let mut waypoint = Self::new(lat, lon)?;
        waypoint.stop_time = Some(stop_time);
        Ok(waypoint)
    }

    pub fn geometry(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(Waypoint::new(f64::NAN, 0.0).is_err());
        assert!(Waypoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Waypoint::new(91.0, 0.0).is_err());
        assert!(Waypoint::new(0.0, -181.0).is_err());
        assert!(Waypoint::new(51.5, -0.12).is_ok());
    }
}
