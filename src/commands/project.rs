//! `crewgraph project`: inspect and edit the project section of a workflow

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::execution::read_event_log;
use crate::models::{CreateProjectRequest, Project, UpdateProjectRequest};
use crate::workflow::{parse_workflow, parse_workflow_content, to_yaml};

/// Print the project with its counts as JSON.
///
/// Each event log passed counts as one past execution; the latest event
/// timestamp becomes `last_execution_at`.
pub fn show(workflow: &Path, event_logs: &[PathBuf]) -> Result<()> {
    let document = parse_workflow(workflow)?;
    let project = Project::new(document.project.clone());

    let mut last_execution_at: Option<DateTime<Utc>> = None;
    for log in event_logs {
        let latest = read_event_log(log)?
            .into_iter()
            .filter_map(|event| event.timestamp)
            .max();
        last_execution_at = last_execution_at.max(latest);
    }

    let stats = document.stats(project, event_logs.len(), last_execution_at);
    let json = serde_json::to_string_pretty(&stats).context("Failed to serialize project")?;
    println!("{json}");
    Ok(())
}

/// Apply a partial update to the project section and rewrite the file
pub fn update(workflow: &Path, update: UpdateProjectRequest) -> Result<()> {
    if update.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }

    let mut document = parse_workflow(workflow)?;
    let mut project = Project::new(document.project.clone());
    project.apply_update(update);
    document.project = CreateProjectRequest::from(&project);

    let yaml = to_yaml(&document)?;
    // Re-validate before touching the file
    parse_workflow_content(&yaml)?;
    std::fs::write(workflow, yaml)
        .with_context(|| format!("Failed to write workflow file: {}", workflow.display()))?;

    println!(
        "{} Updated project {} in {}",
        "✓".green().bold(),
        project.name.bold(),
        workflow.display()
    );
    Ok(())
}
