//! Shared test helpers for workflow integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crewgraph::graph::WorkflowGraph;
use crewgraph::models::Node;

/// Three agents, four tasks; `review` waits on both drafts
pub const NEWSLETTER: &str = r#"
project:
  name: Newsletter crew
  description: Weekly AI newsletter
  model_provider: anthropic
  model_name: claude-haiku
  language: en
agents:
  - id: researcher
    name: Researcher
    role: Senior analyst
    goal: Find reliable sources
  - id: writer
    name: Writer
    role: Editor
    goal: Write engaging copy
  - id: reviewer
    name: Reviewer
    role: Fact checker
    goal: Catch mistakes
tasks:
  - id: research
    agent: researcher
    description: Collect this week's news about {topic}
  - id: draft-intro
    agent: writer
    description: Write the introduction
    context: [research]
  - id: draft-body
    agent: writer
    description: Write the main stories for {audience}
    context: [research]
  - id: review
    agent: reviewer
    description: Review the full newsletter before it goes out to subscribers every Friday
    context: [draft-intro, draft-body]
"#;

/// Write `content` to `name` inside a fresh temp dir
pub fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}

/// Write a second file next to an existing fixture
pub fn write_sibling(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// One JSON line per (node, status) pair
pub fn event_log(events: &[(&str, &str)]) -> String {
    events
        .iter()
        .map(|(node, status)| format!("{{\"node\": \"{node}\", \"status\": \"{status}\"}}\n"))
        .collect()
}

/// Build a task-only graph from ids and (source, target) pairs
pub fn build_test_graph(ids: &[&str], edges: &[(&str, &str)]) -> WorkflowGraph {
    let mut graph = WorkflowGraph::new();
    for id in ids {
        graph
            .add_node(Node::task(*id, *id))
            .expect("Failed to add node");
    }
    for (source, target) in edges {
        graph.add_edge(source, target).expect("Failed to add edge");
    }
    graph
}
