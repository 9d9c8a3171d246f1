//! Workflow graph: agents and tasks linked by dependency edges
//!
//! The graph is acyclic at all times. Every edge insertion is preceded by a
//! reachability check, and a rejected mutation leaves the graph untouched.

mod connection;
mod cycle;
mod snapshot;


use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::error::{WorkflowError, WorkflowResult};
use crate::models::{Edge, Node};

pub use connection::{check_connection, ConnectionCheck};
pub use snapshot::GraphSnapshot;

/// Mutable workflow graph owned by a single editing actor
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    /// Map from node ID to node
    nodes: HashMap<String, Node>,
    /// Adjacency list: node_id -> nodes that depend on it
    outgoing: HashMap<String, BTreeSet<String>>,
    /// Reverse adjacency: node_id -> its dependencies
    incoming: HashMap<String, BTreeSet<String>>,
    edge_count: usize,
    revision: u64,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped by every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Direct dependencies of a node, in id order
    pub fn predecessors(&self, id: &str) -> WorkflowResult<Vec<&str>> {
        self.incoming
            .get(id)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .ok_or_else(|| WorkflowError::UnknownNode(id.to_string()))
    }

    /// Direct dependents of a node, in id order
    pub fn successors(&self, id: &str) -> WorkflowResult<Vec<&str>> {
        self.outgoing
            .get(id)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .ok_or_else(|| WorkflowError::UnknownNode(id.to_string()))
    }

    pub fn add_node(&mut self, node: Node) -> WorkflowResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(WorkflowError::DuplicateId(node.id));
        }

        debug!(node = %node.id, kind = %node.kind, "adding node");
        self.outgoing.insert(node.id.clone(), BTreeSet::new());
        self.incoming.insert(node.id.clone(), BTreeSet::new());
        self.nodes.insert(node.id.clone(), node);
        self.revision += 1;
        Ok(())
    }

    /// Add a dependency edge `source -> target`.
    ///
    /// Fails with `CycleDetected` when `source` is already reachable from
    /// `target`; the reported path closes the would-be cycle.
    pub fn add_edge(&mut self, source: &str, target: &str) -> WorkflowResult<()> {
        for endpoint in [source, target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(WorkflowError::UnknownNode(endpoint.to_string()));
            }
        }

        if self.has_edge(source, target) {
            return Err(WorkflowError::DuplicateEdge {
                source_id: source.to_string(),
                target_id: target.to_string(),
            });
        }

        if let Some(mut path) = cycle::find_path(&self.outgoing, target, source) {
            path.push(target.to_string());
            debug!(source, target, "rejecting cycle-closing edge");
            return Err(WorkflowError::CycleDetected { path });
        }

        debug!(source, target, "adding edge");
        self.outgoing
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
        self.incoming
            .entry(target.to_string())
            .or_default()
            .insert(source.to_string());
        self.edge_count += 1;
        self.revision += 1;
        Ok(())
    }

    /// Remove an edge. Returns `false` if the endpoints exist but are not linked.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> WorkflowResult<bool> {
        for endpoint in [source, target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(WorkflowError::UnknownNode(endpoint.to_string()));
            }
        }

        let removed = self
            .outgoing
            .get_mut(source)
            .is_some_and(|targets| targets.remove(target));
        if !removed {
            return Ok(false);
        }

        if let Some(sources) = self.incoming.get_mut(target) {
            sources.remove(source);
        }
        debug!(source, target, "removed edge");
        self.edge_count -= 1;
        self.revision += 1;
        Ok(true)
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: &str) -> WorkflowResult<Node> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| WorkflowError::UnknownNode(id.to_string()))?;

        let dependents = self.outgoing.remove(id).unwrap_or_default();
        let dependencies = self.incoming.remove(id).unwrap_or_default();

        for dependent in &dependents {
            if let Some(sources) = self.incoming.get_mut(dependent) {
                sources.remove(id);
            }
        }
        for dependency in &dependencies {
            if let Some(targets) = self.outgoing.get_mut(dependency) {
                targets.remove(id);
            }
        }

        let cascaded = dependents.len() + dependencies.len();
        debug!(node = id, cascaded, "removed node");
        self.edge_count -= cascaded;
        self.revision += 1;
        Ok(node)
    }

    /// Immutable copy of the current nodes and edges
    pub fn snapshot(&self) -> GraphSnapshot {
        let edges = self.outgoing.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| Edge::new(source.clone(), target.clone()))
        });

        GraphSnapshot::from_checked_parts(self.revision, self.nodes.values().cloned(), edges)
    }
}
