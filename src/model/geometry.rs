//! Coordinate helpers shared by the search heuristic, nearest-node lookup
//! and the TSP distance functions.

use geo::Point;

/// Earth radius used for great-circle distances, meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle (haversine) distance between two points, meters.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let phi1 = a.y().to_radians();
    let phi2 = b.y().to_radians();
    let delta_phi = (b.y() - a.y()).to_radians();
    let delta_lambda = (b.x() - a.x()).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS * h.sqrt().asin()
}

/// Planar squared distance in degree space. Good enough for nearest-node
/// ranking at city radius; not geodesically exact.
pub fn planar_distance_sq(a: Point<f64>, b: Point<f64>) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Planar distance in degree space, used for trace edge durations.
pub fn planar_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    planar_distance_sq(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_zero_for_identical_points() {
        let p = Point::new(-0.1278, 51.5074);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn haversine_london_paris() {
        let london = Point::new(-0.1278, 51.5074);
        let paris = Point::new(2.3522, 48.8566);
        let d = haversine_distance(london, paris);
        assert!((340_000.0..348_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn planar_distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(planar_distance(a, b), 5.0);
        assert_eq!(planar_distance(b, a), 5.0);
    }
}
