//! Per-node run status for the current execution

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use crate::error::{WorkflowError, WorkflowResult};
use crate::models::RunStatus;

use super::event::StatusEvent;

/// What applying a status event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The node moved to a new status
    Applied { from: RunStatus, to: RunStatus },
    /// Re-delivery of the status the node already has
    Unchanged,
    /// The node is not part of the current run
    Ignored,
}

/// Status counts over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub pending: usize,
    pub running: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    fn count(&mut self, status: RunStatus) {
        self.total += 1;
        match status {
            RunStatus::Pending => self.pending += 1,
            RunStatus::Running => self.running += 1,
            RunStatus::Succeeded => self.succeeded += 1,
            RunStatus::Failed => self.failed += 1,
            RunStatus::Skipped => self.skipped += 1,
        }
    }

    /// Every node reached a terminal status
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.pending == 0 && self.running == 0
    }
}

/// Immutable copy of the status mapping at one status revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    revision: u64,
    statuses: BTreeMap<String, RunStatus>,
}

impl StatusSnapshot {
    /// Build a snapshot directly, e.g. from statuses persisted elsewhere
    pub fn from_statuses(
        revision: u64,
        statuses: impl IntoIterator<Item = (String, RunStatus)>,
    ) -> Self {
        Self {
            revision,
            statuses: statuses.into_iter().collect(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<RunStatus> {
        self.statuses.get(id).copied()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, RunStatus)> {
        self.statuses.iter().map(|(id, status)| (id.as_str(), *status))
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for status in self.statuses.values() {
            summary.count(*status);
        }
        summary
    }
}

/// Tracks run status keyed by node id.
///
/// Structure-agnostic: it never consults the graph, so editing the graph
/// mid-run neither resets nor invalidates it. Statuses for nodes that have
/// since been removed are simply never projected.
#[derive(Debug, Clone, Default)]
pub struct ExecutionTracker {
    statuses: HashMap<String, RunStatus>,
    execution_id: Option<String>,
    started_at: Option<DateTime<Utc>>,
    revision: u64,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run: every listed node becomes `Pending`.
    ///
    /// Replaces any previous run. Duplicate ids collapse into one entry.
    pub fn start_run<I, S>(&mut self, node_ids: I) -> WorkflowResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let statuses: HashMap<String, RunStatus> = node_ids
            .into_iter()
            .map(|id| (id.into(), RunStatus::Pending))
            .collect();

        if statuses.is_empty() {
            return Err(WorkflowError::EmptyRun);
        }

        let execution_id = uuid::Uuid::new_v4().to_string();
        info!(execution = %execution_id, nodes = statuses.len(), "run started");

        self.statuses = statuses;
        self.execution_id = Some(execution_id);
        self.started_at = Some(Utc::now());
        self.revision += 1;
        Ok(())
    }

    /// Apply one status change reported by the execution backend.
    ///
    /// Unknown nodes are ignored, since events from a torn-down or older
    /// workflow may still be in flight. Re-delivery of the current status is
    /// a no-op. Anything else must be a valid state-machine transition.
    pub fn apply_status_event(
        &mut self,
        node_id: &str,
        new_status: RunStatus,
    ) -> WorkflowResult<EventOutcome> {
        let Some(current) = self.statuses.get_mut(node_id) else {
            debug!(node = node_id, status = %new_status, "ignoring status for unknown node");
            return Ok(EventOutcome::Ignored);
        };

        if *current == new_status {
            debug!(node = node_id, status = %new_status, "duplicate status event");
            return Ok(EventOutcome::Unchanged);
        }

        if !current.can_transition_to(&new_status) {
            return Err(WorkflowError::InvalidTransition {
                node: node_id.to_string(),
                from: *current,
                to: new_status,
            });
        }

        let from = *current;
        *current = new_status;
        self.revision += 1;
        debug!(node = node_id, %from, to = %new_status, "status applied");
        Ok(EventOutcome::Applied {
            from,
            to: new_status,
        })
    }

    /// Apply a decoded backend event
    pub fn apply(&mut self, event: &StatusEvent) -> WorkflowResult<EventOutcome> {
        if let (Some(expected), Some(actual)) = (&self.execution_id, &event.execution_id) {
            if expected != actual {
                debug!(
                    node = %event.node,
                    execution = %actual,
                    "ignoring event from another execution"
                );
                return Ok(EventOutcome::Ignored);
            }
        }
        self.apply_status_event(&event.node, event.status)
    }

    pub fn current_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            revision: self.revision,
            statuses: self
                .statuses
                .iter()
                .map(|(id, status)| (id.clone(), *status))
                .collect(),
        }
    }

    pub fn status_of(&self, node_id: &str) -> Option<RunStatus> {
        self.statuses.get(node_id).copied()
    }

    /// Bumped whenever a status actually changes or a run starts/clears
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn execution_id(&self) -> Option<&str> {
        self.execution_id.as_deref()
    }

    /// Adopt an externally assigned execution id for the current run
    pub fn set_execution_id(&mut self, execution_id: impl Into<String>) {
        self.execution_id = Some(execution_id.into());
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn is_running(&self) -> bool {
        !self.statuses.is_empty()
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for status in self.statuses.values() {
            summary.count(*status);
        }
        summary
    }

    /// Forget the current run entirely
    pub fn clear(&mut self) {
        if self.statuses.is_empty() && self.execution_id.is_none() {
            return;
        }
        self.statuses.clear();
        self.execution_id = None;
        self.started_at = None;
        self.revision += 1;
    }
}
