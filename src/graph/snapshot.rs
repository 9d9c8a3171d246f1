//! Immutable graph snapshots handed to downstream consumers

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{WorkflowError, WorkflowResult};
use crate::models::{Edge, Node};

use super::connection::{check_connection, ConnectionCheck};

/// A frozen copy of the workflow graph at one revision.
///
/// Nodes and edges are kept in ordered collections so every iteration over a
/// snapshot, and everything derived from it, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    revision: u64,
    nodes: BTreeMap<String, Node>,
    edges: BTreeSet<Edge>,
}

impl GraphSnapshot {
    /// Assemble a snapshot from raw parts.
    ///
    /// Endpoints are checked, acyclicity is not: a snapshot built this way
    /// may contain a cycle, which the layout engine refuses with `CyclicInput`.
    pub fn from_parts(
        revision: u64,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> WorkflowResult<Self> {
        let nodes: BTreeMap<String, Node> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        let edges: BTreeSet<Edge> = edges.into_iter().collect();

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !nodes.contains_key(endpoint) {
                    return Err(WorkflowError::UnknownNode(endpoint.clone()));
                }
            }
        }

        Ok(Self {
            revision,
            nodes,
            edges,
        })
    }

    /// Endpoints are already guaranteed by the graph's mutation checks
    pub(super) fn from_checked_parts(
        revision: u64,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        Self {
            revision,
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            edges: edges.into_iter().collect(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Edges in (source, target) order
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct dependencies of `id`, in id order
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.target == id)
            .map(|e| e.source.as_str())
            .collect()
    }

    /// Direct dependents of `id`, in id order
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.target.as_str())
            .collect()
    }

    /// Kahn's algorithm with an ordered ready set, so ties resolve by id.
    pub fn topological_order(&self) -> WorkflowResult<Vec<String>> {
        let mut in_degree: BTreeMap<&str, usize> =
            self.nodes.keys().map(|id| (id.as_str(), 0)).collect();
        for edge in &self.edges {
            if let Some(degree) = in_degree.get_mut(edge.target.as_str()) {
                *degree += 1;
            }
        }

        let mut ready: BTreeSet<&str> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(id, _)| *id)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = ready.pop_first() {
            order.push(id.to_string());
            for edge in self.edges.iter().filter(|e| e.source == id) {
                if let Some(degree) = in_degree.get_mut(edge.target.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(edge.target.as_str());
                    }
                }
            }
        }

        if order.len() != self.nodes.len() {
            return Err(WorkflowError::CyclicInput {
                remaining: self.nodes.len() - order.len(),
            });
        }

        Ok(order)
    }

    /// Edges whose endpoint kinds break the agent/task alternation rule
    pub fn invalid_connections(&self) -> Vec<(&Edge, String)> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let source = self.nodes.get(&edge.source)?;
                let target = self.nodes.get(&edge.target)?;
                match check_connection(source.kind, target.kind) {
                    ConnectionCheck::Valid => None,
                    ConnectionCheck::Invalid { reason } => Some((edge, reason.to_string())),
                }
            })
            .collect()
    }
}
