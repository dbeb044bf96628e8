//! Road graph storage: immutable adjacency plus designated endpoints.

use geo::{Point, Rect, coord};
use hashbrown::HashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::model::components::RoadNode;
use crate::model::geometry::planar_distance_sq;
use crate::{Distance, Error, NodeId};

/// Directed road graph for one loaded map area.
///
/// Built wholesale by the graph provider whenever the search area changes
/// and replaced wholesale on the next change; adjacency is never mutated
/// after construction. Per-run search state lives outside this type, so the
/// same graph can back any number of consecutive runs.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    pub(crate) graph: DiGraph<RoadNode, Distance>,
    id_index: HashMap<NodeId, NodeIndex>,
    start_node: Option<NodeIndex>,
    end_node: Option<NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its index. Re-adding an existing id returns
    /// the original index and leaves its coordinates untouched.
    pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) -> NodeIndex {
        if let Some(&index) = self.id_index.get(&id) {
            return index;
        }
        let index = self.graph.add_node(RoadNode {
            id,
            geometry: Point::new(lon, lat),
        });
        self.id_index.insert(id, index);
        index
    }

    /// Adds a one-way edge between existing nodes. Weights are non-negative
    /// meters.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<(), Error> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidData(format!(
                "edge weight {weight} must be finite and non-negative"
            )));
        }
        let from_index = self.node_index(from).ok_or(Error::NodeNotFound(from))?;
        let to_index = self.node_index(to).ok_or(Error::NodeNotFound(to))?;
        self.graph.add_edge(from_index, to_index, weight);
        Ok(())
    }

    /// Adds the edge in both directions with the same weight.
    pub fn add_edge_bidirectional(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Distance,
    ) -> Result<(), Error> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Direct id lookup; `None` signals a stale or invalid id.
    pub fn get_node(&self, id: NodeId) -> Option<&RoadNode> {
        self.node_index(id).map(|index| &self.graph[index])
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    pub fn node(&self, index: NodeIndex) -> &RoadNode {
        &self.graph[index]
    }

    /// Nearest node to the given coordinates by planar squared distance.
    ///
    /// Linear scan; ties resolve to the first node in insertion order, which
    /// keeps repeated lookups deterministic. Returns `None` only for an
    /// empty graph.
    pub fn find_nearest_node(&self, lat: f64, lon: f64) -> Option<NodeIndex> {
        let target = Point::new(lon, lat);
        let mut best: Option<(NodeIndex, f64)> = None;
        for index in self.graph.node_indices() {
            let distance = planar_distance_sq(self.graph[index].geometry, target);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Designates the endpoints a plain `start(strategy)` run will use.
    pub fn set_endpoints(&mut self, start: NodeId, end: NodeId) -> Result<(), Error> {
        self.start_node = Some(self.node_index(start).ok_or(Error::NodeNotFound(start))?);
        self.end_node = Some(self.node_index(end).ok_or(Error::NodeNotFound(end))?);
        Ok(())
    }

    pub fn start_node(&self) -> Option<NodeIndex> {
        self.start_node
    }

    pub fn end_node(&self) -> Option<NodeIndex> {
        self.end_node
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Outgoing neighbors with edge weights.
    pub(crate) fn neighbors_out(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Distance)> + '_ {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (edge.target(), *edge.weight()))
    }

    /// Incoming neighbors with edge weights, for reversed-edge expansion by
    /// the backward frontier.
    pub(crate) fn neighbors_in(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Distance)> + '_ {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|edge| (edge.source(), *edge.weight()))
    }

    /// Bounding rectangle of all node coordinates, for viewport fitting.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let mut nodes = self.graph.node_weights();
        let first = nodes.next()?.geometry;
        let (mut min_x, mut min_y, mut max_x, mut max_y) =
            (first.x(), first.y(), first.x(), first.y());
        for node in nodes {
            min_x = min_x.min(node.geometry.x());
            min_y = min_y.min(node.geometry.y());
            max_x = max_x.max(node.geometry.x());
            max_y = max_y.max(node.geometry.y());
        }
        Some(Rect::new(
            coord! { x: min_x, y: min_y },
            coord! { x: max_x, y: max_y },
        ))
    }
}
