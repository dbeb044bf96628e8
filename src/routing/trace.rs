//! Replayable animation timeline handed to the renderer.
//!
//! The renderer scrubs, plays and pauses by mapping a clock value onto the
//! `[start_time, end_time]` windows of the stitched edge list.

use geo::Point;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// How an edge participated in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// Frontier expansion touched this edge.
    Explored,
    /// The edge lies on the final reconstructed path.
    Route,
}

/// One timed edge of the animation timeline. Coordinates are `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceEdge {
    pub from_coord: [f64; 2],
    pub to_coord: [f64; 2],
    pub start_time: f64,
    pub end_time: f64,
    pub kind: TraceKind,
}

impl TraceEdge {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Timeline of one planned segment, clock starting at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentTrace {
    pub edges: Vec<TraceEdge>,
    /// Local clock value at the end of the last edge.
    pub duration: f64,
}

impl SegmentTrace {
    pub(crate) fn push(&mut self, from: Point<f64>, to: Point<f64>, duration: f64, kind: TraceKind) {
        self.edges.push(TraceEdge {
            from_coord: [from.x(), from.y()],
            to_coord: [to.x(), to.y()],
            start_time: self.duration,
            end_time: self.duration + duration,
            kind,
        });
        self.duration += duration;
    }
}

/// Converts a stitched timeline to a GeoJSON feature collection, one
/// `LineString` per edge with its playback window in the properties.
pub fn trace_to_geojson(edges: &[TraceEdge]) -> FeatureCollection {
    let features = edges
        .iter()
        .map(|edge| {
            let geometry = Geometry::new(Value::LineString(vec![
                edge.from_coord.to_vec(),
                edge.to_coord.to_vec(),
            ]));
            let properties = json!({
                "kind": match edge.kind {
                    TraceKind::Explored => "explored",
                    TraceKind::Route => "route",
                },
                "start_time": edge.start_time,
                "end_time": edge.end_time,
            });
            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: properties.as_object().cloned(),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
