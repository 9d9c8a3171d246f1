//! Workflow document types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CreateProjectRequest, Project, ProjectStats};

/// One project with its crew, as written in a workflow YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowDocument {
    pub project: CreateProjectRequest,
    #[serde(default)]
    pub agents: Vec<AgentDefinition>,
    #[serde(default)]
    pub tasks: Vec<TaskDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    pub role: String,
    pub goal: String,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default = "default_true")]
    pub verbose: bool,
    #[serde(default)]
    pub memory: bool,
    #[serde(default)]
    pub allow_delegation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDefinition {
    pub id: String,
    /// Id of the agent that performs this task
    pub agent: String,
    pub description: String,
    #[serde(default)]
    pub expected_output: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub async_execution: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    /// Tasks whose output feeds this one; each becomes a dependency edge
    #[serde(default)]
    pub context: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// A single problem found while validating a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// `agent 'x'` or `task 'y'` when the problem is local to one entry
    pub location: Option<String>,
}

impl ValidationError {
    pub fn global(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    pub fn agent(id: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Some(format!("Agent '{id}'")),
        }
    }

    pub fn task(id: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Some(format!("Task '{id}'")),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl WorkflowDocument {
    pub fn agent(&self, id: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Stats view of `project` with counts taken from this document
    pub fn stats(
        &self,
        project: Project,
        executions_count: usize,
        last_execution_at: Option<DateTime<Utc>>,
    ) -> ProjectStats {
        ProjectStats {
            project,
            agents_count: self.agents.len(),
            tasks_count: self.tasks.len(),
            executions_count,
            last_execution_at,
        }
    }
}
