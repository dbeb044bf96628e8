use waytrace::prelude::*;

fn ids(route: &[TourPoint]) -> Vec<u64> {
    route.iter().map(|point| point.id).collect()
}

fn sorted_ids(route: &[TourPoint]) -> Vec<u64> {
    let mut ids = ids(route);
    ids.sort_unstable();
    ids
}

/// Intermediates whose nearest-neighbor tour crosses itself; one reversal
/// of the middle pair fixes it.
fn crossing_set() -> (Vec<TourPoint>, TourPoint, TourPoint) {
    let start = TourPoint::new(0, 0.0, 0.0);
    let end = TourPoint::new(9, 0.0, 3.0);
    let points = vec![
        TourPoint::new(1, 0.1, 1.0),
        TourPoint::new(2, -0.1, 2.0),
        TourPoint::new(3, 1.0, 0.5),
    ];
    (points, start, end)
}

#[test]
fn colinear_points_keep_their_order() {
    let start = TourPoint::new(0, 0.0, 0.0);
    let end = TourPoint::new(4, 0.0, 4.0);
    let points = vec![
        TourPoint::new(1, 0.0, 1.0),
        TourPoint::new(2, 0.0, 2.0),
        TourPoint::new(3, 0.0, 3.0),
    ];

    let nn = nearest_neighbor_solution(&points, &start, &end);
    assert_eq!(ids(&nn), vec![0, 1, 2, 3, 4]);

    // Already optimal, so no reversal may fire.
    let two_opt = two_opt_solution(&points, &start, &end, DEFAULT_TWO_OPT_ITERATIONS);
    assert_eq!(ids(&two_opt), ids(&nn));
}

#[test]
fn two_opt_untangles_the_nearest_neighbor_crossing() {
    let (points, start, end) = crossing_set();

    let nn = nearest_neighbor_solution(&points, &start, &end);
    let two_opt = two_opt_solution(&points, &start, &end, DEFAULT_TWO_OPT_ITERATIONS);

    assert!(route_distance(&two_opt) < route_distance(&nn));
}

#[test]
fn two_opt_never_exceeds_nearest_neighbor() {
    let (points, start, end) = crossing_set();
    let nn = nearest_neighbor_solution(&points, &start, &end);
    let two_opt = two_opt_solution(&points, &start, &end, DEFAULT_TWO_OPT_ITERATIONS);
    assert!(route_distance(&two_opt) <= route_distance(&nn));
}

#[test]
fn solutions_are_permutations_of_the_same_stops() {
    let (points, start, end) = crossing_set();

    let nn = nearest_neighbor_solution(&points, &start, &end);
    let two_opt = two_opt_solution(&points, &start, &end, DEFAULT_TWO_OPT_ITERATIONS);

    assert_eq!(nn.len(), points.len() + 2);
    assert_eq!(two_opt.len(), nn.len());
    assert_eq!(sorted_ids(&nn), sorted_ids(&two_opt));
    assert_eq!(nn.first().unwrap().id, start.id);
    assert_eq!(nn.last().unwrap().id, end.id);
    assert_eq!(two_opt.first().unwrap().id, start.id);
    assert_eq!(two_opt.last().unwrap().id, end.id);
}

#[test]
fn round_trip_skips_the_duplicate_end() {
    let start = TourPoint::new(0, 0.0, 0.0);
    let points = vec![
        TourPoint::new(1, 0.0, 1.0),
        TourPoint::new(2, 0.0, 2.0),
    ];

    let route = nearest_neighbor_solution(&points, &start, &start);
    assert_eq!(ids(&route), vec![0, 1, 2]);
}

#[test]
fn zero_iterations_returns_the_seed_tour() {
    let (points, start, end) = crossing_set();
    let nn = nearest_neighbor_solution(&points, &start, &end);
    let two_opt = two_opt_solution(&points, &start, &end, 0);
    assert_eq!(ids(&two_opt), ids(&nn));
}

#[test]
fn route_distance_of_trivial_routes_is_zero() {
    assert_eq!(route_distance(&[]), 0.0);
    assert_eq!(route_distance(&[TourPoint::new(1, 51.5, -0.1)]), 0.0);
}

#[test]
fn point_distance_is_great_circle_meters() {
    let london = TourPoint::new(1, 51.5074, -0.1278);
    let paris = TourPoint::new(2, 48.8566, 2.3522);
    let d = point_distance(&london, &paris);
    assert!((340_000.0..348_000.0).contains(&d), "got {d}");
}
