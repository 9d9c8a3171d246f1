//! Coordinate assignment.
//!
//! Positions are first computed in abstract (cross, rank) space, where rank
//! grows with the layer index and cross runs along a layer, then mapped onto
//! x/y for the configured direction. Each layer is centred on the widest one.

use std::collections::BTreeMap;

use crate::graph::GraphSnapshot;

use super::config::{LayoutConfig, NodeSize};
use super::types::NodePlacement;

/// Placements for every node plus the overall drawing size
pub struct Coordinates {
    pub nodes: BTreeMap<String, NodePlacement>,
    pub width: f64,
    pub height: f64,
}

pub fn assign_coordinates(
    snapshot: &GraphSnapshot,
    layers: &[Vec<String>],
    config: &LayoutConfig,
) -> Coordinates {
    let horizontal = config.direction.is_horizontal();

    // (cross, rank) extent of a node for this direction
    let extent = |id: &str| -> (f64, f64) {
        let size = snapshot
            .node(id)
            .map(|node| config.size_of(node.kind))
            .unwrap_or(NodeSize {
                width: 0.0,
                height: 0.0,
            });
        if horizontal {
            (size.height, size.width)
        } else {
            (size.width, size.height)
        }
    };

    let thickness: Vec<f64> = layers
        .iter()
        .map(|layer| layer.iter().map(|id| extent(id.as_str()).1).fold(0.0, f64::max))
        .collect();
    let breadth: Vec<f64> = layers
        .iter()
        .map(|layer| {
            let sizes: f64 = layer.iter().map(|id| extent(id.as_str()).0).sum();
            sizes + config.node_spacing * layer.len().saturating_sub(1) as f64
        })
        .collect();

    let max_breadth = breadth.iter().copied().fold(0.0, f64::max);
    let total_rank = thickness.iter().sum::<f64>()
        + config.rank_spacing * layers.len().saturating_sub(1) as f64;

    let mut nodes = BTreeMap::new();
    let mut rank_offset = config.margin;

    for (layer_index, layer) in layers.iter().enumerate() {
        let mut cross = config.margin + (max_breadth - breadth[layer_index]) / 2.0;

        for (order, id) in layer.iter().enumerate() {
            let Some(node) = snapshot.node(id) else {
                continue;
            };
            let (cross_size, rank_size) = extent(id.as_str());
            let mut rank = rank_offset + (thickness[layer_index] - rank_size) / 2.0;
            if config.direction.is_reversed() {
                rank = 2.0 * config.margin + total_rank - rank - rank_size;
            }

            let (x, y, width, height) = if horizontal {
                (rank, cross, rank_size, cross_size)
            } else {
                (cross, rank, cross_size, rank_size)
            };

            nodes.insert(
                id.clone(),
                NodePlacement {
                    kind: node.kind,
                    label: node.label.clone(),
                    metadata: node.metadata.clone(),
                    x,
                    y,
                    width,
                    height,
                    layer: layer_index,
                    order,
                },
            );
            cross += cross_size + config.node_spacing;
        }

        rank_offset += thickness[layer_index] + config.rank_spacing;
    }

    let cross_total = max_breadth + 2.0 * config.margin;
    let rank_total = total_rank + 2.0 * config.margin;
    let (width, height) = if horizontal {
        (rank_total, cross_total)
    } else {
        (cross_total, rank_total)
    };

    Coordinates {
        nodes,
        width,
        height,
    }
}
