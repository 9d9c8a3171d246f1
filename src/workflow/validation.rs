//! Workflow document validation
//!
//! Every problem is collected before reporting so a broken file can be fixed
//! in one pass.

use std::collections::HashSet;

use crate::validation::{validate_id, validate_name};

use super::schema::{ValidationError, WorkflowDocument};

pub fn validate(document: &WorkflowDocument) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_name("Project name", &document.project.name) {
        errors.push(ValidationError::global(e.to_string()));
    }

    if document.tasks.is_empty() {
        errors.push(ValidationError::global("No tasks defined"));
    }

    let mut agent_ids = HashSet::new();
    for agent in &document.agents {
        if let Err(e) = validate_id(&agent.id) {
            errors.push(ValidationError::agent(&agent.id, e.to_string()));
        }
        if !agent_ids.insert(agent.id.as_str()) {
            errors.push(ValidationError::agent(&agent.id, "duplicate agent id"));
        }
        for (field, value) in [("name", &agent.name), ("role", &agent.role), ("goal", &agent.goal)] {
            if let Err(e) = validate_name(field, value) {
                errors.push(ValidationError::agent(&agent.id, e.to_string()));
            }
        }
    }

    let task_ids: HashSet<&str> = document.tasks.iter().map(|t| t.id.as_str()).collect();
    let mut seen_tasks = HashSet::new();
    for task in &document.tasks {
        if let Err(e) = validate_id(&task.id) {
            errors.push(ValidationError::task(&task.id, e.to_string()));
        }
        if !seen_tasks.insert(task.id.as_str()) {
            errors.push(ValidationError::task(&task.id, "duplicate task id"));
        }
        if task.description.trim().is_empty() {
            errors.push(ValidationError::task(&task.id, "description cannot be empty"));
        }
        if !agent_ids.contains(task.agent.as_str()) {
            errors.push(ValidationError::task(
                &task.id,
                format!("unknown agent '{}'", task.agent),
            ));
        }
        let mut seen_context = HashSet::new();
        for dep in &task.context {
            if !seen_context.insert(dep.as_str()) {
                errors.push(ValidationError::task(
                    &task.id,
                    format!("duplicate context task '{dep}'"),
                ));
            } else if dep == &task.id {
                errors.push(ValidationError::task(&task.id, "task cannot depend on itself"));
            } else if !task_ids.contains(dep.as_str()) {
                errors.push(ValidationError::task(
                    &task.id,
                    format!("unknown context task '{dep}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
