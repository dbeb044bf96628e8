use criterion::{Criterion, criterion_group, criterion_main};

use waytrace::model::RoadGraph;
use waytrace::model::geometry::haversine_distance;
use waytrace::prelude::*;

/// n x n four-connected street grid with haversine edge weights.
fn grid_graph(n: i64) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for row in 0..n {
        for col in 0..n {
            graph.add_node(row * n + col, 51.45 + row as f64 * 0.001, -0.15 + col as f64 * 0.001);
        }
    }
    for row in 0..n {
        for col in 0..n {
            let id = row * n + col;
            for neighbor in [id + 1, id + n] {
                let valid = (neighbor == id + 1 && col + 1 < n) || (neighbor == id + n && row + 1 < n);
                if valid {
                    let weight = haversine_distance(
                        graph.get_node(id).unwrap().geometry,
                        graph.get_node(neighbor).unwrap().geometry,
                    );
                    graph.add_edge_bidirectional(id, neighbor, weight).unwrap();
                }
            }
        }
    }
    graph
}

fn bench_search(c: &mut Criterion) {
    let n = 40;
    for strategy in [Strategy::Dijkstra, Strategy::AStar, Strategy::Bidirectional] {
        let mut session = SearchSession::new(grid_graph(n)).unwrap();
        let start = session.graph().node_index(0).unwrap();
        let goal = session.graph().node_index(n * n - 1).unwrap();
        c.bench_function(&format!("grid_{n}x{n}_{strategy:?}"), |b| {
            b.iter(|| {
                session.start_between(start, goal, strategy);
                while !session.finished() {
                    session.next_step();
                }
                session.path_cost()
            });
        });
    }
}

fn bench_planner(c: &mut Criterion) {
    let n = 20;
    c.bench_function("plan_three_waypoints", |b| {
        b.iter(|| {
            let mut planner =
                RoutePlanner::new(grid_graph(n), PlannerConfig::default()).unwrap();
            let waypoints = [
                Waypoint::new(51.45, -0.15).unwrap(),
                Waypoint::new(51.46, -0.14).unwrap(),
                Waypoint::new(51.469, -0.131).unwrap(),
            ];
            planner.plan_route(&waypoints, Strategy::AStar).unwrap()
        });
    });
}

criterion_group!(benches, bench_search, bench_planner);
criterion_main!(benches);
