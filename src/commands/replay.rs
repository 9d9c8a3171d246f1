//! `crewgraph replay`: feed a recorded event log through the tracker

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::execution::{
    read_event_log, recorded_execution_id, EventOutcome, ExecutionControl, ReplayBackend,
    RunSummary,
};
use crate::scene::{project, render_scene, status_indicator};

use super::common::{layout_for, load, start_tracker};

pub fn execute(workflow: &Path, events: &Path, config: &Config, batch_size: usize) -> Result<()> {
    let loaded = load(workflow)?;
    let layout = layout_for(&loaded, &config.layout)?;

    let recorded = read_event_log(events)?;
    recorded_execution_id(&recorded)
        .with_context(|| format!("Invalid event log: {}", events.display()))?;
    let mut backend = ReplayBackend::new(recorded, batch_size);
    let mut tracker = start_tracker(&loaded)?;
    let handle = backend.start(&loaded.document.project.name)?;
    tracker.set_execution_id(handle.execution_id.clone());

    println!(
        "{} {} ({} events)",
        "Replaying".bold(),
        events.display(),
        backend.remaining()
    );

    let mut rejected = 0;
    let mut ignored = 0;
    let mut poll = 0;
    loop {
        let batch = backend.poll_events();
        if batch.is_empty() {
            break;
        }
        poll += 1;
        println!("\n{}", format!("Poll {poll}:").dimmed());

        for event in &batch {
            match tracker.apply(event) {
                Ok(EventOutcome::Applied { from, to }) => {
                    println!("  {} {} {from} -> {to}", status_indicator(to), event.node);
                }
                Ok(EventOutcome::Unchanged) => {}
                Ok(EventOutcome::Ignored) => ignored += 1,
                Err(e) => {
                    rejected += 1;
                    println!("  {} {e}", "⚠".yellow().bold());
                }
            }
        }
    }
    backend.stop(&handle.execution_id)?;

    let scene = project(&layout, &tracker.current_status());
    println!();
    print!("{}", render_scene(&scene));
    print_summary(&tracker.summary(), ignored, rejected);

    Ok(())
}

fn print_summary(summary: &RunSummary, ignored: usize, rejected: usize) {
    println!(
        "{} {} succeeded, {} failed, {} skipped, {} running, {} pending",
        "Summary:".bold(),
        summary.succeeded.to_string().green(),
        summary.failed.to_string().red(),
        summary.skipped,
        summary.running.to_string().blue(),
        summary.pending
    );
    if ignored > 0 {
        println!("  {ignored} event(s) for unknown nodes ignored");
    }
    if rejected > 0 {
        println!("  {rejected} event(s) rejected as invalid transitions");
    }
    if summary.is_finished() {
        println!("{} Run finished", "✓".green().bold());
    }
}
