#![allow(dead_code)]

use waytrace::model::RoadGraph;
use waytrace::model::geometry::haversine_distance;

/// Four corners of a roughly one-kilometer square in central London, sides
/// weighted by their haversine length, no diagonal.
///
/// Ids: 1 = SW, 2 = SE, 3 = NE, 4 = NW.
pub fn square_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_node(1, 51.500, -0.100);
    graph.add_node(2, 51.500, -0.090);
    graph.add_node(3, 51.509, -0.090);
    graph.add_node(4, 51.509, -0.100);
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
        let weight = side_length(&graph, a, b);
        graph.add_edge_bidirectional(a, b, weight).unwrap();
    }
    graph
}

fn side_length(graph: &RoadGraph, a: i64, b: i64) -> f64 {
    haversine_distance(
        graph.get_node(a).unwrap().geometry,
        graph.get_node(b).unwrap().geometry,
    )
}

/// Side lengths of the square fixture: (east-west, north-south).
pub fn square_sides() -> (f64, f64) {
    let graph = square_graph();
    (side_length(&graph, 1, 2), side_length(&graph, 2, 3))
}

/// A trap for greedy search: the geographically closest neighbor of the
/// start leads onto an expensive edge, while a detour costs almost nothing.
/// Ids: 1 = start, 2 = trap, 3 = detour, 4 = goal. Directed edges.
pub fn greedy_trap_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_node(1, 51.500, -0.100);
    graph.add_node(2, 51.5005, -0.0905);
    graph.add_node(3, 51.510, -0.110);
    graph.add_node(4, 51.500, -0.090);
    graph.add_edge(1, 2, 10.0).unwrap();
    graph.add_edge(2, 4, 1000.0).unwrap();
    graph.add_edge(1, 3, 1.0).unwrap();
    graph.add_edge(3, 4, 1.0).unwrap();
    graph
}

/// Straight one-way chain 1 -> 2 -> 3 on the equator with round planar
/// offsets, for exact trace-timestamp arithmetic.
pub fn one_way_chain() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_node(1, 0.0, 0.0);
    graph.add_node(2, 0.0, 0.002);
    graph.add_node(3, 0.0, 0.003);
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph
}
