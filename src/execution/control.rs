//! Boundary to the execution backend that actually runs a crew

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::info;

use super::event::StatusEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionHandle {
    pub execution_id: String,
    pub project_id: String,
    pub started_at: DateTime<Utc>,
}

/// Start/stop control over an execution backend plus its status feed.
///
/// Events may be delivered late, twice, or for nodes that no longer exist;
/// the tracker consuming them is responsible for tolerating that.
pub trait ExecutionControl {
    fn start(&mut self, project_id: &str) -> Result<ExecutionHandle>;

    fn stop(&mut self, execution_id: &str) -> Result<()>;

    /// Drain events emitted since the previous poll
    fn poll_events(&mut self) -> Vec<StatusEvent>;
}

/// Backend that replays a recorded event log instead of running anything.
///
/// A log recorded under an execution id is replayed under that same id, so
/// its events still match the run they came from.
#[derive(Debug, Clone)]
pub struct ReplayBackend {
    pending: VecDeque<StatusEvent>,
    batch_size: usize,
    recorded_id: Option<String>,
    active: Option<ExecutionHandle>,
}

impl ReplayBackend {
    /// `batch_size` bounds how many events one poll returns (minimum 1)
    pub fn new(events: Vec<StatusEvent>, batch_size: usize) -> Self {
        let recorded_id = events.iter().find_map(|e| e.execution_id.clone());
        Self {
            recorded_id,
            pending: events.into(),
            batch_size: batch_size.max(1),
            active: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn active(&self) -> Option<&ExecutionHandle> {
        self.active.as_ref()
    }
}

impl ExecutionControl for ReplayBackend {
    fn start(&mut self, project_id: &str) -> Result<ExecutionHandle> {
        if let Some(active) = &self.active {
            bail!(
                "Execution {} is already running for project {}",
                active.execution_id,
                active.project_id
            );
        }

        let handle = ExecutionHandle {
            execution_id: self
                .recorded_id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            project_id: project_id.to_string(),
            started_at: Utc::now(),
        };
        info!(execution = %handle.execution_id, project = project_id, events = self.pending.len(), "replay started");
        self.active = Some(handle.clone());
        Ok(handle)
    }

    fn stop(&mut self, execution_id: &str) -> Result<()> {
        match &self.active {
            Some(active) if active.execution_id == execution_id => {
                info!(execution = execution_id, dropped = self.pending.len(), "replay stopped");
                self.active = None;
                self.pending.clear();
                Ok(())
            }
            Some(active) => bail!(
                "Execution {execution_id} is not running (active: {})",
                active.execution_id
            ),
            None => bail!("Execution {execution_id} is not running"),
        }
    }

    fn poll_events(&mut self) -> Vec<StatusEvent> {
        let Some(active) = &self.active else {
            return Vec::new();
        };

        let take = self.batch_size.min(self.pending.len());
        self.pending
            .drain(..take)
            .map(|mut event| {
                if event.execution_id.is_none() {
                    event.execution_id = Some(active.execution_id.clone());
                }
                event
            })
            .collect()
    }
}
