//! Execution state tracking
//!
//! The tracker holds one status per node for the current run and is fed by
//! an execution backend through status events. It never looks at the graph:
//! dependency gating belongs to the backend, and structural edits neither
//! reset nor invalidate the statuses it holds.
//!
//! ## Module Organization
//!
//! - `tracker`: the per-node status map and its transition rules
//! - `event`: status events and the JSON Lines event log
//! - `control`: the backend boundary and a replaying backend

mod control;
mod event;
mod tracker;


pub use control::{ExecutionControl, ExecutionHandle, ReplayBackend};
pub use event::{parse_event_log, read_event_log, recorded_execution_id, StatusEvent};
pub use tracker::{EventOutcome, ExecutionTracker, RunSummary, StatusSnapshot};
