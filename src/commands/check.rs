//! `crewgraph check`: validate a workflow and summarize its structure

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::workflow::extract_variables;

use super::common::load;

/// Validate `workflow`.
///
/// Connection rules are advisory: they are listed, and only fail the check
/// when `strict` is set.
pub fn execute(workflow: &Path, strict: bool) -> Result<()> {
    let loaded = load(workflow)?;
    let snapshot = loaded.graph.snapshot();
    let order = snapshot
        .topological_order()
        .context("Workflow graph is not acyclic")?;
    let project = &loaded.document.project;

    println!(
        "{} {} ({})",
        "Workflow:".bold(),
        project.name.bold().blue(),
        workflow.display()
    );
    println!(
        "  Provider: {} / {}   Language: {}",
        project.model_provider,
        project.model_name,
        project.language.display_name()
    );
    println!(
        "  Agents: {}   Tasks: {}   Dependencies: {}",
        loaded.document.agents.len(),
        loaded.document.tasks.len(),
        snapshot.edges().len()
    );

    println!("\n{}", "Execution order:".bold());
    for (index, id) in order.iter().enumerate() {
        let label = snapshot.node(id).map(|n| n.label.as_str()).unwrap_or_default();
        println!("  {:>2}. {} {}", index + 1, id, label.dimmed());
    }

    let mut variables: Vec<String> = Vec::new();
    for task in &loaded.document.tasks {
        for variable in extract_variables(&task.description) {
            if !variables.contains(&variable) {
                variables.push(variable);
            }
        }
    }
    if !variables.is_empty() {
        println!("\n{} {}", "Template variables:".bold(), variables.join(", "));
    }

    let notes = snapshot.invalid_connections();
    if !notes.is_empty() {
        println!("\n{}", "Connection notes:".bold());
        for (edge, reason) in &notes {
            println!("  {} {edge}: {reason}", "⚠".yellow().bold());
        }
        if strict {
            bail!(
                "{} connection(s) break the agent/task alternation rule",
                notes.len()
            );
        }
    }

    println!("\n{} Workflow is valid", "✓".green().bold());
    Ok(())
}
