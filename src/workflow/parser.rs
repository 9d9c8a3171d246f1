//! Workflow YAML loading

use anyhow::{bail, Context, Result};
use std::path::Path;

use super::schema::WorkflowDocument;
use super::validation::validate;

pub fn parse_workflow(path: &Path) -> Result<WorkflowDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow file: {}", path.display()))?;

    parse_workflow_content(&content)
        .with_context(|| format!("Invalid workflow file: {}", path.display()))
}

/// Parse and validate workflow YAML (for testing without file system)
pub fn parse_workflow_content(content: &str) -> Result<WorkflowDocument> {
    let document: WorkflowDocument =
        serde_yaml::from_str(content).context("Failed to parse workflow YAML")?;

    if let Err(errors) = validate(&document) {
        let error_messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Validation errors:\n  - {}", error_messages.join("\n  - "));
    }

    Ok(document)
}

/// Serialize a document back to YAML
pub fn to_yaml(document: &WorkflowDocument) -> Result<String> {
    serde_yaml::to_string(document).context("Failed to serialize workflow YAML")
}
