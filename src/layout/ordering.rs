//! Crossing reduction with the barycenter heuristic.
//!
//! Each pass sweeps down (ordering a layer by the mean position of its
//! dependencies) and then up (by the mean position of its dependents). Nodes
//! without neighbours on the reference side keep their current position as
//! their key. Ties break by node id, so the result depends only on the input.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::graph::GraphSnapshot;

/// Reorder nodes within each layer. Stops early once a pass changes nothing.
pub fn order_layers(
    snapshot: &GraphSnapshot,
    mut layers: Vec<Vec<String>>,
    max_passes: usize,
) -> Vec<Vec<String>> {
    if layers.len() < 2 {
        return layers;
    }

    let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in snapshot.edges() {
        predecessors
            .entry(edge.target.as_str())
            .or_default()
            .push(edge.source.as_str());
        successors
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut positions = index_positions(&layers);

    for _ in 0..max_passes {
        let mut changed = false;

        for layer in 1..layers.len() {
            changed |= reorder_layer(&mut layers[layer], &predecessors, &mut positions);
        }
        for layer in (0..layers.len() - 1).rev() {
            changed |= reorder_layer(&mut layers[layer], &successors, &mut positions);
        }

        if !changed {
            break;
        }
    }

    layers
}

fn index_positions(layers: &[Vec<String>]) -> HashMap<String, usize> {
    layers
        .iter()
        .flat_map(|layer| layer.iter().enumerate().map(|(i, id)| (id.clone(), i)))
        .collect()
}

/// Sort one layer by barycenter. Returns whether the order changed.
fn reorder_layer(
    layer: &mut Vec<String>,
    neighbours: &HashMap<&str, Vec<&str>>,
    positions: &mut HashMap<String, usize>,
) -> bool {
    let mut keyed: Vec<(f64, String)> = layer
        .iter()
        .enumerate()
        .map(|(current, id)| {
            let key = neighbours
                .get(id.as_str())
                .and_then(|adjacent| barycenter(adjacent, positions))
                .unwrap_or(current as f64);
            (key, id.clone())
        })
        .collect();

    keyed.sort_by(|a, b| match a.0.total_cmp(&b.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        other => other,
    });

    let reordered: Vec<String> = keyed.into_iter().map(|(_, id)| id).collect();
    if reordered == *layer {
        return false;
    }

    for (index, id) in reordered.iter().enumerate() {
        positions.insert(id.clone(), index);
    }
    *layer = reordered;
    true
}

fn barycenter(adjacent: &[&str], positions: &HashMap<String, usize>) -> Option<f64> {
    let placed: Vec<usize> = adjacent
        .iter()
        .filter_map(|id| positions.get(*id).copied())
        .collect();
    if placed.is_empty() {
        return None;
    }
    Some(placed.iter().sum::<usize>() as f64 / placed.len() as f64)
}

/// Number of edge crossings between consecutive layers.
///
/// Only edges spanning exactly one layer are counted; longer edges have no
/// well-defined crossing without intermediate waypoints.
pub fn count_crossings(snapshot: &GraphSnapshot, layers: &[Vec<String>]) -> usize {
    let positions = index_positions(layers);
    let layer_of: HashMap<&str, usize> = layers
        .iter()
        .enumerate()
        .flat_map(|(l, ids)| ids.iter().map(move |id| (id.as_str(), l)))
        .collect();

    let mut crossings = 0;
    for upper in 0..layers.len().saturating_sub(1) {
        let spans: Vec<(usize, usize)> = snapshot
            .edges()
            .iter()
            .filter(|e| {
                layer_of.get(e.source.as_str()) == Some(&upper)
                    && layer_of.get(e.target.as_str()) == Some(&(upper + 1))
            })
            .filter_map(|e| Some((*positions.get(&e.source)?, *positions.get(&e.target)?)))
            .collect();

        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                if (a.0 < b.0 && a.1 > b.1) || (a.0 > b.0 && a.1 < b.1) {
                    crossings += 1;
                }
            }
        }
    }
    crossings
}
