//! Render-ready scene
//!
//! A scene is the merge of one layout and one status snapshot. It is built
//! on demand, never cached and never patched; a new layout or a new status
//! revision means a new scene.
//!
//! ## Module Organization
//!
//! - `indicators`: colored status glyphs
//! - `render`: layered text rendering for the terminal

mod indicators;
mod render;


use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::execution::StatusSnapshot;
use crate::layout::{Direction, LayoutResult, Point};
use crate::models::{NodeKind, RunStatus};

pub use indicators::status_indicator;
pub use render::{legend, render_scene};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layer: usize,
    pub order: usize,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneEdge {
    pub source: String,
    pub target: String,
    pub waypoints: Vec<Point>,
    /// Source node is currently running
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Graph revision the layout was computed from
    pub graph_revision: u64,
    pub status_revision: u64,
    pub direction: Direction,
    pub width: f64,
    pub height: f64,
    /// In id order
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes
            .binary_search_by(|node| node.id.as_str().cmp(id))
            .ok()
            .map(|index| &self.nodes[index])
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene")
    }
}

/// Merge a layout with a status snapshot.
///
/// Nodes the snapshot does not know about are shown as pending. Statuses
/// for nodes absent from the layout are dropped.
pub fn project(layout: &LayoutResult, status: &StatusSnapshot) -> Scene {
    let status_of = |id: &str| status.get(id).unwrap_or_default();

    let nodes = layout
        .nodes
        .iter()
        .map(|(id, placement)| SceneNode {
            id: id.clone(),
            kind: placement.kind,
            label: placement.label.clone(),
            x: placement.x,
            y: placement.y,
            width: placement.width,
            height: placement.height,
            layer: placement.layer,
            order: placement.order,
            status: status_of(id.as_str()),
            metadata: placement.metadata.clone(),
        })
        .collect();

    let edges = layout
        .edges
        .iter()
        .map(|route| SceneEdge {
            source: route.source.clone(),
            target: route.target.clone(),
            waypoints: route.waypoints.clone(),
            animated: status_of(route.source.as_str()) == RunStatus::Running,
        })
        .collect();

    Scene {
        graph_revision: layout.revision,
        status_revision: status.revision(),
        direction: layout.direction,
        width: layout.width,
        height: layout.height,
        nodes,
        edges,
    }
}
