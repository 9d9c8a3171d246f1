//! Replaying recorded event logs over a loaded workflow

use crewgraph::commands::common::{start_tracker, statuses_from_log};
use crewgraph::commands::replay;
use crewgraph::config::Config;
use crewgraph::execution::{
    read_event_log, EventOutcome, ExecutionControl, ExecutionTracker, ReplayBackend,
};
use crewgraph::layout::{compute_layout, LayoutConfig};
use crewgraph::models::RunStatus;
use crewgraph::scene::project;
use crewgraph::workflow::load_workflow;

use super::helpers::{event_log, write_file, write_sibling, NEWSLETTER};

#[test]
fn test_replay_full_run_finishes() {
    let (dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let log = event_log(&[
        ("task-research", "running"),
        ("task-research", "completed"),
        ("task-draft-intro", "running"),
        ("task-draft-body", "running"),
        ("task-draft-intro", "completed"),
        ("task-draft-body", "error"),
        ("task-review", "skipped"),
        ("agent-researcher", "skipped"),
        ("agent-writer", "skipped"),
        ("agent-reviewer", "skipped"),
    ]);
    let events_path = write_sibling(dir.path(), "run.jsonl", &log);

    let loaded = load_workflow(&workflow).unwrap();
    let mut tracker = ExecutionTracker::new();
    tracker.start_run(loaded.graph.snapshot().node_ids()).unwrap();

    let mut backend = ReplayBackend::new(read_event_log(&events_path).unwrap(), 4);
    let handle = backend.start("newsletter").unwrap();
    tracker.set_execution_id(handle.execution_id.clone());

    let mut applied = 0;
    loop {
        let batch = backend.poll_events();
        if batch.is_empty() {
            break;
        }
        for event in &batch {
            if let EventOutcome::Applied { .. } = tracker.apply(event).unwrap() {
                applied += 1;
            }
        }
    }
    backend.stop(&handle.execution_id).unwrap();

    assert_eq!(applied, 10);
    let summary = tracker.summary();
    assert!(summary.is_finished());
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.skipped, 4);
}

#[test]
fn test_overlay_mid_run_animates_running_sources() {
    let (_dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let loaded = load_workflow(&workflow).unwrap();
    let layout = compute_layout(&loaded.graph.snapshot(), &LayoutConfig::default()).unwrap();

    let mut tracker = ExecutionTracker::new();
    tracker.start_run(loaded.graph.snapshot().node_ids()).unwrap();
    tracker
        .apply_status_event("task-research", RunStatus::Running)
        .unwrap();

    let scene = project(&layout, &tracker.current_status());
    let mut animated: Vec<&str> = scene
        .edges
        .iter()
        .filter(|edge| edge.animated)
        .map(|edge| edge.target.as_str())
        .collect();
    animated.sort();
    assert_eq!(animated, vec!["task-draft-body", "task-draft-intro"]);
}

#[test]
fn test_out_of_order_terminal_event_is_rejected_not_fatal() {
    let (_dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let loaded = load_workflow(&workflow).unwrap();
    let mut tracker = ExecutionTracker::new();
    tracker.start_run(loaded.graph.snapshot().node_ids()).unwrap();

    // "completed" arrives before "running"
    assert!(tracker
        .apply_status_event("task-research", RunStatus::Succeeded)
        .is_err());
    tracker
        .apply_status_event("task-research", RunStatus::Running)
        .unwrap();
    tracker
        .apply_status_event("task-research", RunStatus::Succeeded)
        .unwrap();
    assert_eq!(
        tracker.status_of("task-research"),
        Some(RunStatus::Succeeded)
    );
}

/// A log as written by a real backend: every line names its run
const RECORDED_RUN: &str = r#"{"execution_id": "exec-42", "node": "task-research", "status": "running"}
{"execution_id": "exec-42", "node": "task-research", "status": "completed"}
{"execution_id": "exec-42", "node": "task-draft-intro", "status": "running"}
"#;

#[test]
fn test_overlay_applies_log_recorded_under_its_own_execution() {
    let (dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let events_path = write_sibling(dir.path(), "run.jsonl", RECORDED_RUN);
    let loaded = load_workflow(&workflow).unwrap();

    let statuses = statuses_from_log(&loaded, &events_path).unwrap();

    assert_eq!(statuses.get("task-research"), Some(RunStatus::Succeeded));
    assert_eq!(statuses.get("task-draft-intro"), Some(RunStatus::Running));
    assert_eq!(statuses.get("task-review"), Some(RunStatus::Pending));
}

#[test]
fn test_replay_backend_keeps_recorded_execution_id() {
    let (dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let events_path = write_sibling(dir.path(), "run.jsonl", RECORDED_RUN);
    let loaded = load_workflow(&workflow).unwrap();

    let mut backend = ReplayBackend::new(read_event_log(&events_path).unwrap(), 2);
    let mut tracker = start_tracker(&loaded).unwrap();
    let handle = backend.start("newsletter").unwrap();
    tracker.set_execution_id(handle.execution_id.clone());
    assert_eq!(handle.execution_id, "exec-42");

    loop {
        let batch = backend.poll_events();
        if batch.is_empty() {
            break;
        }
        for event in &batch {
            assert!(matches!(
                tracker.apply(event).unwrap(),
                EventOutcome::Applied { .. }
            ));
        }
    }

    assert_eq!(tracker.status_of("task-research"), Some(RunStatus::Succeeded));
    assert_eq!(tracker.summary().running, 1);
}

#[test]
fn test_log_mixing_executions_is_rejected() {
    let (dir, workflow) = write_file("newsletter.yaml", NEWSLETTER);
    let mixed = format!(
        "{RECORDED_RUN}{{\"execution_id\": \"exec-7\", \"node\": \"task-review\", \"status\": \"running\"}}\n"
    );
    let events_path = write_sibling(dir.path(), "run.jsonl", &mixed);
    let loaded = load_workflow(&workflow).unwrap();

    let err = statuses_from_log(&loaded, &events_path).unwrap_err();
    assert!(format!("{err:#}").contains("mixes executions exec-42 and exec-7"));
    assert!(replay::execute(&workflow, &events_path, &Config::default(), 1).is_err());
}
