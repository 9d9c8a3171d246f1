//! End-to-end scenarios over graph, layout, tracker and scene

use crewgraph::error::WorkflowError;
use crewgraph::execution::ExecutionTracker;
use crewgraph::layout::{compute_layout, LayoutConfig};
use crewgraph::models::{Edge, RunStatus};
use crewgraph::scene::project;

use super::helpers::build_test_graph;

#[test]
fn test_fan_in_run_without_dependency_gating() {
    let graph = build_test_graph(&["A", "B", "C"], &[("A", "C"), ("B", "C")]);
    let layout = compute_layout(&graph.snapshot(), &LayoutConfig::default()).unwrap();
    assert_eq!(layout.layer_of("A"), Some(0));
    assert_eq!(layout.layer_of("B"), Some(0));
    assert_eq!(layout.layer_of("C"), Some(1));

    let mut tracker = ExecutionTracker::new();
    tracker.start_run(["A", "B", "C"]).unwrap();
    let scene = project(&layout, &tracker.current_status());
    assert!(scene.nodes.iter().all(|n| n.status == RunStatus::Pending));

    tracker.apply_status_event("A", RunStatus::Running).unwrap();
    tracker.apply_status_event("A", RunStatus::Succeeded).unwrap();
    tracker.apply_status_event("C", RunStatus::Running).unwrap();

    let scene = project(&layout, &tracker.current_status());
    assert_eq!(scene.node("A").unwrap().status, RunStatus::Succeeded);
    assert_eq!(scene.node("B").unwrap().status, RunStatus::Pending);
    assert_eq!(scene.node("C").unwrap().status, RunStatus::Running);
}

#[test]
fn test_cycle_rejection_leaves_graph_untouched() {
    let mut graph = build_test_graph(&["A", "B"], &[("A", "B")]);
    let revision = graph.revision();

    let err = graph.add_edge("B", "A").unwrap_err();
    assert!(matches!(err, WorkflowError::CycleDetected { .. }));

    let snapshot = graph.snapshot();
    let edges: Vec<&Edge> = snapshot.edges().iter().collect();
    assert_eq!(edges, vec![&Edge::new("A", "B")]);
    assert_eq!(graph.revision(), revision);
}

#[test]
fn test_structural_edit_mid_run_keeps_statuses() {
    let mut graph = build_test_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let mut tracker = ExecutionTracker::new();
    tracker.start_run(graph.snapshot().node_ids()).unwrap();
    tracker.apply_status_event("A", RunStatus::Running).unwrap();

    graph.remove_node("C").unwrap();
    let layout = compute_layout(&graph.snapshot(), &LayoutConfig::default()).unwrap();
    let scene = project(&layout, &tracker.current_status());

    // The removed node's status is kept by the tracker but never shown
    assert_eq!(tracker.status_of("C"), Some(RunStatus::Pending));
    assert!(scene.node("C").is_none());
    assert_eq!(scene.node("A").unwrap().status, RunStatus::Running);
    assert_eq!(scene.graph_revision, graph.revision());
    let animated: Vec<_> = scene
        .edges
        .iter()
        .filter(|e| e.animated)
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(animated, vec![("A", "B")]);

    // Late event for the removed node is still accepted by the tracker
    tracker.apply_status_event("C", RunStatus::Skipped).unwrap();
}

#[test]
fn test_stale_layout_is_detectable_by_revision() {
    let mut graph = build_test_graph(&["A"], &[]);
    let layout = compute_layout(&graph.snapshot(), &LayoutConfig::default()).unwrap();
    assert_eq!(layout.revision, graph.revision());

    graph
        .add_node(crewgraph::models::Node::agent("X", "X"))
        .unwrap();
    assert_ne!(layout.revision, graph.revision());
}
