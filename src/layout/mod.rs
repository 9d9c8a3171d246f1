//! Layered workflow layout
//!
//! A pure function from a graph snapshot and a configuration to node
//! positions and edge routes. It keeps no state between calls, so the same
//! input always yields the same `LayoutResult`, and concurrent calls on
//! different snapshots are independent.
//!
//! ## Module Organization
//!
//! - `layers`: longest-path rank assignment
//! - `ordering`: barycenter crossing reduction within ranks
//! - `coords`: rank/order to x/y for the configured direction
//! - `routing`: edge waypoints between node anchors

mod config;
mod coords;
mod layers;
mod ordering;
mod routing;
mod types;


use tracing::debug;

use crate::error::WorkflowResult;
use crate::graph::GraphSnapshot;

pub use config::{Direction, EdgeRouting, LayoutConfig, NodeSize};
pub use ordering::count_crossings;
pub use types::{EdgeRoute, LayoutResult, NodePlacement, Point};

/// Lay out a graph snapshot.
///
/// An empty snapshot yields an empty result. A cyclic snapshot, which the
/// graph model never produces, fails with `CyclicInput`.
pub fn compute_layout(
    snapshot: &GraphSnapshot,
    config: &LayoutConfig,
) -> WorkflowResult<LayoutResult> {
    if snapshot.is_empty() {
        return Ok(LayoutResult::empty(snapshot.revision(), config.direction));
    }

    let ranks = layers::assign_layers(snapshot)?;
    let grouped = layers::group_by_layer(&ranks);
    let ordered = ordering::order_layers(snapshot, grouped, config.ordering_passes);
    let coordinates = coords::assign_coordinates(snapshot, &ordered, config);
    let edges = routing::route_edges(snapshot, &coordinates.nodes, config);

    debug!(
        revision = snapshot.revision(),
        nodes = coordinates.nodes.len(),
        edges = edges.len(),
        layers = ordered.len(),
        "layout computed"
    );

    Ok(LayoutResult {
        revision: snapshot.revision(),
        direction: config.direction,
        nodes: coordinates.nodes,
        edges,
        width: coordinates.width,
        height: coordinates.height,
    })
}

/// Ordered node ids per layer, straight from the layout's placements.
///
/// Convenience for callers that only need the ranking, e.g. crossing counts.
pub fn layer_groups(layout: &LayoutResult) -> Vec<Vec<String>> {
    layout
        .layers()
        .into_iter()
        .map(|layer| layer.into_iter().map(String::from).collect())
        .collect()
}
