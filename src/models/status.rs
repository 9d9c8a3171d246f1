use serde::{Deserialize, Serialize};

/// Execution status of a single node within a run.
///
/// State machine transitions:
/// - `Pending` -> `Running` (the backend picked the node up)
/// - `Pending` -> `Skipped` (an upstream dependency failed)
/// - `Running` -> `Succeeded` | `Failed`
/// - `Succeeded`, `Failed` and `Skipped` are terminal
///
/// The aliases accept the vocabulary used by execution backends that report
/// `created`/`completed`/`error` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    #[serde(alias = "created")]
    Pending,
    Running,
    #[serde(alias = "completed")]
    Succeeded,
    #[serde(alias = "error")]
    Failed,
    Skipped,
}

impl RunStatus {
    /// Check if transitioning from the current status to `new_status` is valid.
    ///
    /// Re-applying the current status is always valid and treated as a no-op,
    /// which absorbs duplicated event delivery.
    pub fn can_transition_to(&self, new_status: &RunStatus) -> bool {
        if self == new_status {
            return true;
        }

        match self {
            RunStatus::Pending => matches!(new_status, RunStatus::Running | RunStatus::Skipped),
            RunStatus::Running => matches!(new_status, RunStatus::Succeeded | RunStatus::Failed),
            RunStatus::Succeeded | RunStatus::Failed | RunStatus::Skipped => false,
        }
    }

    /// Returns the list of statuses this status can move to.
    pub fn valid_transitions(&self) -> Vec<RunStatus> {
        match self {
            RunStatus::Pending => vec![RunStatus::Running, RunStatus::Skipped],
            RunStatus::Running => vec![RunStatus::Succeeded, RunStatus::Failed],
            RunStatus::Succeeded | RunStatus::Failed | RunStatus::Skipped => vec![],
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Succeeded | RunStatus::Failed | RunStatus::Skipped
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Succeeded => "succeeded",
            RunStatus::Failed => "failed",
            RunStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Pending => write!(f, "Pending"),
            RunStatus::Running => write!(f, "Running"),
            RunStatus::Succeeded => write!(f, "Succeeded"),
            RunStatus::Failed => write!(f, "Failed"),
            RunStatus::Skipped => write!(f, "Skipped"),
        }
    }
}
