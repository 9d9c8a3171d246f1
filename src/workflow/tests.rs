//! Tests for workflow loading

use super::*;
use crate::error::WorkflowError;
use crate::models::{Language, ModelProvider, NodeKind, Project};

const CONTENT_CREW: &str = r#"
project:
  name: Content crew
  description: Weekly newsletter
  model_provider: openai
  model_name: gpt-4o
  language: en
agents:
  - id: researcher
    name: Researcher
    role: Senior analyst
    goal: Find reliable sources
    tools: [search, scrape]
  - id: writer
    name: Writer
    role: Editor
    goal: Write engaging copy
tasks:
  - id: research
    agent: researcher
    description: Research the latest news about {topic} for {audience}
    expected_output: A list of sources
  - id: draft
    agent: writer
    description: Draft the newsletter about {topic}
    context: [research]
    output_file: newsletter.md
"#;

#[test]
fn test_parse_document_with_defaults() {
    let document = parse_workflow_content(CONTENT_CREW).unwrap();
    assert_eq!(document.project.model_provider, ModelProvider::OpenAi);
    assert_eq!(document.project.language, Language::En);
    assert_eq!(document.agents.len(), 2);

    let writer = document.agent("writer").unwrap();
    assert!(writer.verbose);
    assert!(!writer.memory);
    assert!(!writer.allow_delegation);

    let draft = document.task("draft").unwrap();
    assert_eq!(draft.context, vec!["research"]);
    assert_eq!(draft.expected_output, "");
}

#[test]
fn test_build_graph_nodes_and_edges() {
    let document = parse_workflow_content(CONTENT_CREW).unwrap();
    let graph = build_graph(&document).unwrap();

    assert_eq!(graph.len(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge("agent-researcher", "task-research"));
    assert!(graph.has_edge("agent-writer", "task-draft"));
    assert!(graph.has_edge("task-research", "task-draft"));

    let agent = graph.node("agent-researcher").unwrap();
    assert_eq!(agent.kind, NodeKind::Agent);
    assert_eq!(agent.label, "Researcher");
    assert_eq!(agent.metadata.get("tools").map(String::as_str), Some("search,scrape"));

    let research = graph.node("task-research").unwrap();
    assert_eq!(
        research.metadata.get("variables").map(String::as_str),
        Some("topic,audience")
    );
    let draft = graph.node("task-draft").unwrap();
    assert_eq!(
        draft.metadata.get("output_file").map(String::as_str),
        Some("newsletter.md")
    );
}

#[test]
fn test_validation_collects_every_problem() {
    let yaml = r#"
project:
  name: ""
agents:
  - id: bad id
    name: Writer
    role: Editor
    goal: Write
  - id: writer
    name: Writer
    role: Editor
    goal: Write
  - id: writer
    name: Writer 2
    role: Editor
    goal: Write
tasks:
  - id: draft
    agent: ghost
    description: "  "
    context: [draft, missing]
"#;
    let err = parse_workflow_content(yaml).unwrap_err().to_string();

    assert!(err.contains("Project name cannot be empty"));
    assert!(err.contains("Agent 'bad id'"));
    assert!(err.contains("Agent 'writer': duplicate agent id"));
    assert!(err.contains("Task 'draft': description cannot be empty"));
    assert!(err.contains("Task 'draft': unknown agent 'ghost'"));
    assert!(err.contains("Task 'draft': task cannot depend on itself"));
    assert!(err.contains("Task 'draft': unknown context task 'missing'"));
}

#[test]
fn test_empty_task_list_is_rejected() {
    let yaml = "project:\n  name: Idle crew\nagents: []\n";
    let err = parse_workflow_content(yaml).unwrap_err().to_string();
    assert!(err.contains("No tasks defined"));
}

#[test]
fn test_unknown_fields_are_rejected() {
    let yaml = r#"
project:
  name: Crew
  budget: 100
tasks: []
"#;
    assert!(parse_workflow_content(yaml).is_err());
}

#[test]
fn test_repeated_context_entry_is_reported_with_other_errors() {
    let yaml = r#"
project:
  name: Echo crew
agents:
  - id: a
    name: A
    role: R
    goal: G
tasks:
  - id: t
    agent: a
    description: first
  - id: u
    agent: ghost
    description: second
    context: [t, t]
"#;
    let err = parse_workflow_content(yaml).unwrap_err().to_string();

    assert!(err.contains("Task 'u': duplicate context task 't'"));
    assert!(err.contains("Task 'u': unknown agent 'ghost'"));
}

#[test]
fn test_context_cycle_surfaces_cycle_error() {
    let yaml = r#"
project:
  name: Loop crew
agents:
  - id: a
    name: A
    role: R
    goal: G
tasks:
  - id: one
    agent: a
    description: first
    context: [two]
  - id: two
    agent: a
    description: second
    context: [one]
"#;
    let document = parse_workflow_content(yaml).unwrap();
    let err = build_graph(&document).unwrap_err();
    let cause = err.downcast_ref::<WorkflowError>().unwrap();
    assert!(matches!(cause, WorkflowError::CycleDetected { .. }));
}

#[test]
fn test_task_label_truncation() {
    assert_eq!(task_label("Short task"), "Short task");
    let long = "a".repeat(60);
    assert_eq!(task_label(&long), format!("{}...", "a".repeat(50)));
    assert_eq!(task_label("First line\nsecond line"), "First line");
    // Multi-byte characters are never split
    let accented = "é".repeat(55);
    assert_eq!(task_label(&accented).chars().count(), 53);
}

#[test]
fn test_extract_variables() {
    assert_eq!(
        extract_variables("Write about {topic} in {language}, focusing on {topic}"),
        vec!["topic", "language"]
    );
    assert!(extract_variables("No placeholders here").is_empty());
    assert!(extract_variables("Empty {} braces").is_empty());
    assert_eq!(extract_variables("Nested {{inner}}"), vec!["inner"]);
}

#[test]
fn test_document_stats() {
    let document = parse_workflow_content(CONTENT_CREW).unwrap();
    let project = Project::new(document.project.clone());
    let stats = document.stats(project.clone(), 3, None);

    assert_eq!(stats.project, project);
    assert_eq!(stats.agents_count, 2);
    assert_eq!(stats.tasks_count, 2);
    assert_eq!(stats.executions_count, 3);
}

#[test]
fn test_yaml_round_trip_keeps_document() {
    let document = parse_workflow_content(CONTENT_CREW).unwrap();
    let yaml = to_yaml(&document).unwrap();
    assert_eq!(parse_workflow_content(&yaml).unwrap(), document);
}
