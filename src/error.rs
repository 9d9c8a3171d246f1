//! Domain error taxonomy for graph, layout and execution-state operations.
//!
//! Every variant is a caller-side validation failure reported synchronously by
//! the operation that detected it. None of them are transient.

use thiserror::Error;

use crate::models::RunStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Node already exists: {0}")]
    DuplicateId(String),

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Edge already exists: {source_id} -> {target_id}")]
    DuplicateEdge { source_id: String, target_id: String },

    #[error("Circular dependency detected: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Layout input contains a cycle ({remaining} nodes could not be ranked)")]
    CyclicInput { remaining: usize },

    #[error("Cannot start a run with no nodes")]
    EmptyRun,

    #[error("Invalid status transition for '{node}': {from} -> {to}")]
    InvalidTransition {
        node: String,
        from: RunStatus,
        to: RunStatus,
    },
}

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;
