//! Turning a validated document into a workflow graph

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::graph::WorkflowGraph;
use crate::models::Node;

use super::schema::{AgentDefinition, TaskDefinition, WorkflowDocument};

/// Longest task description shown as a node label before truncation
pub const TASK_LABEL_CHARS: usize = 50;

pub fn agent_node_id(agent_id: &str) -> String {
    format!("agent-{agent_id}")
}

pub fn task_node_id(task_id: &str) -> String {
    format!("task-{task_id}")
}

/// First line of the description, truncated on a char boundary
pub fn task_label(description: &str) -> String {
    let line = description.trim().lines().next().unwrap_or_default();
    if line.chars().count() <= TASK_LABEL_CHARS {
        return line.to_string();
    }
    let head: String = line.chars().take(TASK_LABEL_CHARS).collect();
    format!("{}...", head.trim_end())
}

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid regex pattern"))
}

/// `{name}` placeholders in order of first appearance, without duplicates
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for capture in variable_pattern().captures_iter(text) {
        let name = capture[1].trim();
        if !name.is_empty() && !variables.iter().any(|v| v == name) {
            variables.push(name.to_string());
        }
    }
    variables
}

fn agent_node(agent: &AgentDefinition) -> Node {
    let mut node = Node::agent(agent_node_id(&agent.id), agent.name.clone())
        .with_metadata("role", agent.role.clone())
        .with_metadata("goal", agent.goal.clone());
    if !agent.tools.is_empty() {
        node = node.with_metadata("tools", agent.tools.join(","));
    }
    node
}

fn task_node(task: &TaskDefinition) -> Node {
    let mut node = Node::task(task_node_id(&task.id), task_label(&task.description))
        .with_metadata("agent", task.agent.clone());
    if !task.expected_output.is_empty() {
        node = node.with_metadata("expected_output", task.expected_output.clone());
    }
    if task.async_execution {
        node = node.with_metadata("async_execution", "true");
    }
    if let Some(output_file) = &task.output_file {
        node = node.with_metadata("output_file", output_file.clone());
    }
    let variables = extract_variables(&task.description);
    if !variables.is_empty() {
        node = node.with_metadata("variables", variables.join(","));
    }
    node
}

/// Build the graph for a document.
///
/// Agents come first, then tasks, then an agent -> task edge per task and a
/// context -> task edge per context entry. A context cycle surfaces as the
/// graph's cycle error.
pub fn build_graph(document: &WorkflowDocument) -> Result<WorkflowGraph> {
    let mut graph = WorkflowGraph::new();

    for agent in &document.agents {
        graph
            .add_node(agent_node(agent))
            .with_context(|| format!("Failed to add agent '{}'", agent.id))?;
    }
    for task in &document.tasks {
        graph
            .add_node(task_node(task))
            .with_context(|| format!("Failed to add task '{}'", task.id))?;
    }

    for task in &document.tasks {
        let target = task_node_id(&task.id);
        graph
            .add_edge(&agent_node_id(&task.agent), &target)
            .with_context(|| format!("Failed to assign agent '{}' to task '{}'", task.agent, task.id))?;
        for dep in &task.context {
            graph
                .add_edge(&task_node_id(dep), &target)
                .with_context(|| format!("Failed to add context '{dep}' to task '{}'", task.id))?;
        }
    }

    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "workflow graph built"
    );
    Ok(graph)
}
