use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::NodeKind;

use super::config::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a node landed. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePlacement {
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Longest-path rank, 0 for nodes without dependencies
    pub layer: usize,
    /// Index within the layer after crossing reduction
    pub order: usize,
}

impl NodePlacement {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Routed path of one edge, from the source anchor to the target anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRoute {
    pub source: String,
    pub target: String,
    pub waypoints: Vec<Point>,
}

/// Output of one layout pass over a graph snapshot.
///
/// Never patched after the fact: a changed graph gets a whole new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Graph revision this layout was computed from
    pub revision: u64,
    pub direction: Direction,
    pub nodes: BTreeMap<String, NodePlacement>,
    pub edges: Vec<EdgeRoute>,
    /// Bounding box of the drawing, margins included
    pub width: f64,
    pub height: f64,
}

impl LayoutResult {
    pub fn empty(revision: u64, direction: Direction) -> Self {
        Self {
            revision,
            direction,
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn placement(&self, id: &str) -> Option<&NodePlacement> {
        self.nodes.get(id)
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.get(id).map(NodePlacement::position)
    }

    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).map(|p| p.layer)
    }

    /// Node ids grouped by layer, each layer in its final order
    pub fn layers(&self) -> Vec<Vec<&str>> {
        let mut layers: Vec<Vec<(usize, &str)>> = Vec::new();
        for (id, placement) in &self.nodes {
            if layers.len() <= placement.layer {
                layers.resize_with(placement.layer + 1, Vec::new);
            }
            layers[placement.layer].push((placement.order, id.as_str()));
        }

        layers
            .into_iter()
            .map(|mut layer| {
                layer.sort();
                layer.into_iter().map(|(_, id)| id).collect()
            })
            .collect()
    }
}
