//! Loading workflow files from disk

use crewgraph::graph::ConnectionCheck;
use crewgraph::layout::{compute_layout, LayoutConfig};
use crewgraph::models::{Language, ModelProvider, NodeKind};
use crewgraph::workflow::load_workflow;

use super::helpers::{write_file, NEWSLETTER};

#[test]
fn test_load_newsletter_workflow() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let loaded = load_workflow(&path).unwrap();

    assert_eq!(loaded.document.project.model_provider, ModelProvider::Anthropic);
    assert_eq!(loaded.document.project.language, Language::En);
    assert_eq!(loaded.graph.len(), 7);
    // 4 agent assignments + 4 context links
    assert_eq!(loaded.graph.edge_count(), 8);

    let review = loaded.graph.node("task-review").unwrap();
    assert_eq!(review.kind, NodeKind::Task);
    assert!(review.label.ends_with("..."));
    assert_eq!(
        loaded.graph.predecessors("task-review").unwrap(),
        vec!["agent-reviewer", "task-draft-body", "task-draft-intro"]
    );
}

#[test]
fn test_newsletter_layers_follow_context_chain() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let loaded = load_workflow(&path).unwrap();
    let layout = compute_layout(&loaded.graph.snapshot(), &LayoutConfig::default()).unwrap();

    assert_eq!(layout.layer_of("agent-researcher"), Some(0));
    assert_eq!(layout.layer_of("agent-writer"), Some(0));
    assert_eq!(layout.layer_of("task-research"), Some(1));
    assert_eq!(layout.layer_of("task-draft-intro"), Some(2));
    assert_eq!(layout.layer_of("task-review"), Some(3));
}

#[test]
fn test_context_edges_are_reported_as_advisory() {
    let (_dir, path) = write_file("newsletter.yaml", NEWSLETTER);
    let loaded = load_workflow(&path).unwrap();
    let snapshot = loaded.graph.snapshot();

    let notes = snapshot.invalid_connections();
    assert_eq!(notes.len(), 4);
    assert!(notes
        .iter()
        .all(|(edge, _)| edge.source.starts_with("task-") && edge.target.starts_with("task-")));
    assert!(matches!(
        crewgraph::graph::check_connection(NodeKind::Agent, NodeKind::Task),
        ConnectionCheck::Valid
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let (dir, _) = write_file("placeholder.txt", "");
    let missing = dir.path().join("nope.yaml");
    let err = load_workflow(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("nope.yaml"));
}

#[test]
fn test_invalid_file_reports_all_problems() {
    let yaml = r#"
project:
  name: Broken
agents:
  - id: writer
    name: Writer
    role: Editor
    goal: Write
tasks:
  - id: a
    agent: nobody
    description: first
  - id: b
    agent: writer
    description: second
    context: [zzz]
"#;
    let (_dir, path) = write_file("broken.yaml", yaml);
    let message = format!("{:#}", load_workflow(&path).unwrap_err());
    assert!(message.contains("broken.yaml"));
    assert!(message.contains("unknown agent 'nobody'"));
    assert!(message.contains("unknown context task 'zzz'"));
}
