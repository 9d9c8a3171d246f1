//! Validation of user-supplied identifiers and names in workflow documents.

use anyhow::{bail, Result};

/// Maximum allowed length for agent, task and project ids
pub const MAX_ID_LENGTH: usize = 128;

/// Maximum allowed length for names and role strings
pub const MAX_NAME_LENGTH: usize = 200;

/// Validates an agent or task id.
///
/// Ids become part of node ids (`agent-<id>`, `task-<id>`), so they are kept
/// to ASCII letters, digits, dashes and underscores.
///
/// ```
/// use crewgraph::validation::validate_id;
///
/// assert!(validate_id("researcher").is_ok());
/// assert!(validate_id("task_02").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("write report").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    Ok(())
}

/// Validates a required human-readable field such as a project or agent name
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} cannot be empty");
    }

    let length = value.chars().count();
    if length > MAX_NAME_LENGTH {
        bail!("{field} too long: {length} characters (max {MAX_NAME_LENGTH})");
    }

    Ok(())
}
