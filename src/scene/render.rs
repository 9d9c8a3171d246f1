//! Layered text rendering of a scene

use colored::Colorize;
use std::collections::HashMap;

use crate::models::NodeKind;

use super::indicators::status_indicator;
use super::{Scene, SceneNode};

fn kind_tag(kind: NodeKind) -> colored::ColoredString {
    match kind {
        NodeKind::Agent => "agent".magenta(),
        NodeKind::Task => "task".cyan(),
    }
}

/// Predecessors of `node` with their status glyphs
fn format_dependencies(node: &SceneNode, scene: &Scene, by_id: &HashMap<&str, &SceneNode>) -> String {
    let deps: Vec<String> = scene
        .edges
        .iter()
        .filter(|edge| edge.target == node.id)
        .map(|edge| match by_id.get(edge.source.as_str()) {
            Some(source) => format!("{}{}", status_indicator(source.status), source.id),
            None => format!("?{}", edge.source),
        })
        .collect();

    if deps.is_empty() {
        String::new()
    } else {
        format!(" ← {}", deps.join(", "))
    }
}

/// One block per layer, nodes in their laid-out order
pub fn render_scene(scene: &Scene) -> String {
    if scene.is_empty() {
        return "(empty workflow)".to_string();
    }

    let by_id: HashMap<&str, &SceneNode> =
        scene.nodes.iter().map(|node| (node.id.as_str(), node)).collect();

    let mut layers: Vec<Vec<&SceneNode>> = Vec::new();
    for node in &scene.nodes {
        if layers.len() <= node.layer {
            layers.resize_with(node.layer + 1, Vec::new);
        }
        layers[node.layer].push(node);
    }

    let mut output = String::new();
    for (level, nodes) in layers.iter_mut().enumerate() {
        nodes.sort_by_key(|node| node.order);

        if level == 0 {
            output.push_str("Level 0 (no dependencies):\n");
        } else {
            output.push_str(&format!("Level {level}:\n"));
        }

        for node in nodes.iter() {
            let deps = format_dependencies(node, scene, &by_id);
            output.push_str(&format!(
                "  {} {} [{}] ({}){deps}\n",
                status_indicator(node.status),
                node.label.bold(),
                kind_tag(node.kind),
                node.id
            ));
        }
        output.push('\n');
    }

    output
}

pub fn legend() -> String {
    format!(
        "Legend: {} succeeded  {} running  {} pending  {} failed  {} skipped",
        "✓".green().bold(),
        "●".blue().bold(),
        "○".white().dimmed(),
        "✗".red().bold(),
        "⊘".white().dimmed(),
    )
}
