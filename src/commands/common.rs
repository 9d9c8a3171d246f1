//! Helpers shared by the subcommands

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::execution::{
    read_event_log, recorded_execution_id, ExecutionTracker, StatusEvent, StatusSnapshot,
};
use crate::layout::{compute_layout, Direction, EdgeRouting, LayoutConfig, LayoutResult};
use crate::workflow::{load_workflow, LoadedWorkflow};

/// Command-line overrides on top of the `[layout]` config section
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOverrides {
    pub direction: Option<Direction>,
    pub routing: Option<EdgeRouting>,
}

impl LayoutOverrides {
    pub fn apply(&self, base: &LayoutConfig) -> LayoutConfig {
        let mut config = base.clone();
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(routing) = self.routing {
            config.routing = routing;
        }
        config
    }
}

/// Honor `[display] color` unless the terminal already disabled colors
pub fn apply_display(config: &Config) {
    if !config.display.color {
        colored::control::set_override(false);
    }
}

pub fn load(path: &Path) -> Result<LoadedWorkflow> {
    let loaded = load_workflow(path)?;
    info!(
        workflow = %path.display(),
        agents = loaded.document.agents.len(),
        tasks = loaded.document.tasks.len(),
        "workflow loaded"
    );
    Ok(loaded)
}

pub fn layout_for(loaded: &LoadedWorkflow, config: &LayoutConfig) -> Result<LayoutResult> {
    compute_layout(&loaded.graph.snapshot(), config).context("Failed to lay out workflow")
}

/// Start a run over every node of the workflow
pub fn start_tracker(loaded: &LoadedWorkflow) -> Result<ExecutionTracker> {
    let mut tracker = ExecutionTracker::new();
    tracker
        .start_run(loaded.graph.snapshot().node_ids())
        .context("Failed to start run")?;
    Ok(tracker)
}

/// Status snapshot after applying a whole event log in one go.
///
/// The run takes the execution id the log was recorded under. Events that
/// break the state machine are skipped with a warning so a partially
/// corrupt log still produces a picture of the run.
pub fn statuses_from_log(loaded: &LoadedWorkflow, path: &Path) -> Result<StatusSnapshot> {
    let events = read_event_log(path)?;
    let mut tracker = start_tracker(loaded)?;
    if let Some(execution_id) = recorded_execution_id(&events)
        .with_context(|| format!("Invalid event log: {}", path.display()))?
    {
        tracker.set_execution_id(execution_id);
    }
    apply_all(&mut tracker, &events);
    Ok(tracker.current_status())
}

/// Apply events in order; returns how many were rejected
pub fn apply_all(tracker: &mut ExecutionTracker, events: &[StatusEvent]) -> usize {
    let mut rejected = 0;
    for event in events {
        if let Err(e) = tracker.apply(event) {
            warn!("{e}");
            rejected += 1;
        }
    }
    rejected
}
