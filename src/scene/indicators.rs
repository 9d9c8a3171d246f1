//! Status indicators for scene display

use colored::{ColoredString, Colorize};

use crate::models::RunStatus;

pub fn status_indicator(status: RunStatus) -> ColoredString {
    match status {
        RunStatus::Succeeded => "✓".green().bold(),
        RunStatus::Running => "●".blue().bold(),
        RunStatus::Pending => "○".white().dimmed(),
        RunStatus::Failed => "✗".red().bold(),
        RunStatus::Skipped => "⊘".white().dimmed().strikethrough(),
    }
}
