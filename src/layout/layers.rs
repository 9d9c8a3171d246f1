//! Rank assignment.
//!
//! A node's layer is the length of the longest path reaching it from any node
//! without dependencies, so every edge points to a strictly higher layer.

use std::collections::HashMap;

use crate::error::WorkflowResult;
use crate::graph::GraphSnapshot;

/// Compute the layer of every node. Fails with `CyclicInput` on a cyclic snapshot.
pub fn assign_layers(snapshot: &GraphSnapshot) -> WorkflowResult<HashMap<String, usize>> {
    let order = snapshot.topological_order()?;

    let mut layers: HashMap<String, usize> = HashMap::with_capacity(order.len());
    for id in &order {
        let level = snapshot
            .predecessors(id)
            .iter()
            .filter_map(|dep| layers.get(*dep))
            .map(|level| level + 1)
            .max()
            .unwrap_or(0);
        layers.insert(id.clone(), level);
    }

    Ok(layers)
}

/// Group node ids by layer, each group in id order
pub fn group_by_layer(layers: &HashMap<String, usize>) -> Vec<Vec<String>> {
    let depth = layers.values().max().map_or(0, |max| max + 1);
    let mut grouped: Vec<Vec<String>> = vec![Vec::new(); depth];
    for (id, layer) in layers {
        grouped[*layer].push(id.clone());
    }
    for group in &mut grouped {
        group.sort();
    }
    grouped
}
