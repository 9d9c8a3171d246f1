//! Advisory agent/task connection rules.
//!
//! Workflows read best when agents and tasks alternate. These rules are
//! reported by `check`; the graph model itself accepts any acyclic edge.

use crate::models::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionCheck {
    Valid,
    Invalid { reason: &'static str },
}

impl ConnectionCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, ConnectionCheck::Valid)
    }
}

pub fn check_connection(source: NodeKind, target: NodeKind) -> ConnectionCheck {
    match (source, target) {
        (NodeKind::Agent, NodeKind::Task) | (NodeKind::Task, NodeKind::Agent) => {
            ConnectionCheck::Valid
        }
        (NodeKind::Agent, NodeKind::Agent) => ConnectionCheck::Invalid {
            reason: "Agents cannot connect directly. Use a Task between them.",
        },
        (NodeKind::Task, NodeKind::Task) => ConnectionCheck::Invalid {
            reason: "Tasks cannot connect directly. Use an Agent between them.",
        },
    }
}
