//! Subcommands run against temporary workflow files

use std::fs;

use crewgraph::commands::common::LayoutOverrides;
use crewgraph::commands::{check, layout, project, replay, show};
use crewgraph::config::Config;
use crewgraph::layout::{Direction, LayoutResult};
use crewgraph::models::{Language, UpdateProjectRequest};
use crewgraph::workflow::parse_workflow;

use super::helpers::{event_log, write_file, write_sibling, NEWSLETTER};

#[test]
fn test_check_accepts_valid_workflow() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    check::execute(&path, false).unwrap();
}

#[test]
fn test_strict_check_fails_on_task_to_task_links() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let err = check::execute(&path, true).unwrap_err();
    assert!(err.to_string().contains("4 connection(s)"));
}

#[test]
fn test_layout_writes_json_file() {
    let (dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let output = dir.path().join("layout.json");
    let overrides = LayoutOverrides {
        direction: Some(Direction::LeftRight),
        routing: None,
    };

    layout::execute(&path, &Config::default(), overrides, Some(&output)).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let result: LayoutResult = serde_json::from_str(&content).unwrap();
    assert_eq!(result.direction, Direction::LeftRight);
    assert_eq!(result.nodes.len(), 7);
    assert_eq!(result.edges.len(), 8);
}

#[test]
fn test_show_and_replay_accept_event_log() {
    let (dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let events = write_sibling(
        dir.path(),
        "run.jsonl",
        &event_log(&[
            ("task-research", "running"),
            ("task-research", "completed"),
            ("task-ghost", "running"),
            ("task-research", "running"),
        ]),
    );

    show::execute(
        &path,
        &Config::default(),
        LayoutOverrides::default(),
        Some(&events),
        true,
    )
    .unwrap();
    replay::execute(&path, &events, &Config::default(), 2).unwrap();
}

#[test]
fn test_project_update_rewrites_only_given_fields() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    project::update(
        &path,
        UpdateProjectRequest {
            language: Some(Language::Fr),
            ..Default::default()
        },
    )
    .unwrap();

    let document = parse_workflow(&path).unwrap();
    assert_eq!(document.project.language, Language::Fr);
    assert_eq!(document.project.name, "Newsletter crew");
    assert_eq!(document.project.model_name, "claude-haiku");
    assert_eq!(document.tasks.len(), 4);
    assert_eq!(document.task("review").unwrap().context.len(), 2);
}

#[test]
fn test_project_show_counts_event_logs() {
    let (dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let first = write_sibling(
        dir.path(),
        "a.jsonl",
        "{\"node\": \"task-research\", \"status\": \"running\", \"timestamp\": \"2026-03-01T09:00:00Z\"}\n",
    );
    project::show(&path, &[first]).unwrap();
}
