//! Status events emitted by an execution backend, one JSON object per line

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::RunStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Run the event belongs to; events from other runs are ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(alias = "node_id")]
    pub node: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl StatusEvent {
    pub fn new(node: impl Into<String>, status: RunStatus) -> Self {
        Self {
            execution_id: None,
            node: node.into(),
            status,
            timestamp: None,
        }
    }
}

/// Parse a JSON Lines event log. Blank lines and `#` comments are skipped.
pub fn parse_event_log(content: &str) -> Result<Vec<StatusEvent>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str::<StatusEvent>(line.trim())
                .with_context(|| format!("Invalid status event on line {}", index + 1))
        })
        .collect()
}

/// Execution id the log was recorded under, if any event carries one.
///
/// A log mixing several execution ids is rejected, since only one of the
/// runs could be overlaid on the workflow.
pub fn recorded_execution_id(events: &[StatusEvent]) -> Result<Option<String>> {
    let mut recorded: Option<&str> = None;
    for event in events {
        let Some(id) = event.execution_id.as_deref() else {
            continue;
        };
        match recorded {
            None => recorded = Some(id),
            Some(first) if first != id => {
                bail!("Event log mixes executions {first} and {id}")
            }
            Some(_) => {}
        }
    }
    Ok(recorded.map(str::to_string))
}

pub fn read_event_log(path: &Path) -> Result<Vec<StatusEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event log: {}", path.display()))?;
    parse_event_log(&content)
}
