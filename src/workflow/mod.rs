//! Workflow documents
//!
//! A workflow YAML file describes one project: its settings, its agents and
//! the tasks they perform. Loading validates the whole document up front and
//! then builds the dependency graph the layout and execution layers consume.
//!
//! ```yaml
//! project:
//!   name: Content crew
//!   model_provider: openai
//!   language: en
//! agents:
//!   - id: researcher
//!     name: Researcher
//!     role: Senior analyst
//!     goal: Find sources
//! tasks:
//!   - id: research
//!     agent: researcher
//!     description: Research {topic}
//!   - id: write
//!     agent: researcher
//!     description: Write the report
//!     context: [research]
//! ```

mod build;
mod parser;
mod schema;
mod validation;

#[cfg(test)]
mod tests;

use anyhow::Result;
use std::path::Path;

use crate::graph::WorkflowGraph;

pub use build::{agent_node_id, build_graph, extract_variables, task_label, task_node_id};
pub use parser::{parse_workflow, parse_workflow_content, to_yaml};
pub use schema::{AgentDefinition, TaskDefinition, ValidationError, WorkflowDocument};
pub use validation::validate;

/// A parsed document together with its graph
#[derive(Debug, Clone)]
pub struct LoadedWorkflow {
    pub document: WorkflowDocument,
    pub graph: WorkflowGraph,
}

/// Read, validate and build a workflow file
pub fn load_workflow(path: &Path) -> Result<LoadedWorkflow> {
    let document = parse_workflow(path)?;
    let graph = build_graph(&document)?;
    Ok(LoadedWorkflow { document, graph })
}
