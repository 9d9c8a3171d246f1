//! Edge routing between node anchors.
//!
//! Edges leave a node on the side facing the next rank and enter the target on
//! the side facing the previous rank. Self-loops and parallel edges cannot
//! exist, so every route is either one segment or one axis-aligned step.

use std::collections::BTreeMap;

use crate::graph::GraphSnapshot;

use super::config::{Direction, EdgeRouting, LayoutConfig};
use super::types::{EdgeRoute, NodePlacement, Point};

pub fn route_edges(
    snapshot: &GraphSnapshot,
    nodes: &BTreeMap<String, NodePlacement>,
    config: &LayoutConfig,
) -> Vec<EdgeRoute> {
    snapshot
        .edges()
        .iter()
        .filter_map(|edge| {
            let source = nodes.get(&edge.source)?;
            let target = nodes.get(&edge.target)?;
            Some(EdgeRoute {
                source: edge.source.clone(),
                target: edge.target.clone(),
                waypoints: route(source, target, config),
            })
        })
        .collect()
}

fn route(source: &NodePlacement, target: &NodePlacement, config: &LayoutConfig) -> Vec<Point> {
    let start = exit_anchor(source, config.direction);
    let end = entry_anchor(target, config.direction);

    match config.routing {
        EdgeRouting::Straight => vec![start, end],
        EdgeRouting::Orthogonal => step(start, end, config),
    }
}

fn step(start: Point, end: Point, config: &LayoutConfig) -> Vec<Point> {
    let half_gap = config.rank_spacing / 2.0;
    match config.direction {
        Direction::TopBottom | Direction::BottomTop => {
            if start.x == end.x {
                return vec![start, end];
            }
            let bend = if config.direction == Direction::TopBottom {
                end.y - half_gap
            } else {
                end.y + half_gap
            };
            vec![
                start,
                Point::new(start.x, bend),
                Point::new(end.x, bend),
                end,
            ]
        }
        Direction::LeftRight | Direction::RightLeft => {
            if start.y == end.y {
                return vec![start, end];
            }
            let bend = if config.direction == Direction::LeftRight {
                end.x - half_gap
            } else {
                end.x + half_gap
            };
            vec![
                start,
                Point::new(bend, start.y),
                Point::new(bend, end.y),
                end,
            ]
        }
    }
}

fn exit_anchor(node: &NodePlacement, direction: Direction) -> Point {
    let center = node.center();
    match direction {
        Direction::TopBottom => Point::new(center.x, node.y + node.height),
        Direction::BottomTop => Point::new(center.x, node.y),
        Direction::LeftRight => Point::new(node.x + node.width, center.y),
        Direction::RightLeft => Point::new(node.x, center.y),
    }
}

fn entry_anchor(node: &NodePlacement, direction: Direction) -> Point {
    let center = node.center();
    match direction {
        Direction::TopBottom => Point::new(center.x, node.y),
        Direction::BottomTop => Point::new(center.x, node.y + node.height),
        Direction::LeftRight => Point::new(node.x, center.y),
        Direction::RightLeft => Point::new(node.x + node.width, center.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn placement(x: f64, y: f64) -> NodePlacement {
        NodePlacement {
            kind: NodeKind::Task,
            label: String::new(),
            metadata: BTreeMap::new(),
            x,
            y,
            width: 100.0,
            height: 50.0,
            layer: 0,
            order: 0,
        }
    }

    #[test]
    fn test_straight_route_connects_facing_sides() {
        let config = LayoutConfig::default();
        let points = route(&placement(0.0, 0.0), &placement(0.0, 200.0), &config);
        assert_eq!(points, vec![Point::new(50.0, 50.0), Point::new(50.0, 200.0)]);
    }

    #[test]
    fn test_orthogonal_route_steps_before_target_rank() {
        let config = LayoutConfig {
            routing: EdgeRouting::Orthogonal,
            rank_spacing: 100.0,
            ..Default::default()
        };
        let points = route(&placement(0.0, 0.0), &placement(300.0, 200.0), &config);
        assert_eq!(
            points,
            vec![
                Point::new(50.0, 50.0),
                Point::new(50.0, 150.0),
                Point::new(350.0, 150.0),
                Point::new(350.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_orthogonal_route_collapses_when_aligned() {
        let config = LayoutConfig {
            routing: EdgeRouting::Orthogonal,
            ..Default::default()
        };
        let points = route(&placement(0.0, 0.0), &placement(0.0, 300.0), &config);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_left_right_anchors() {
        let config = LayoutConfig {
            direction: Direction::LeftRight,
            ..Default::default()
        };
        let points = route(&placement(0.0, 0.0), &placement(300.0, 0.0), &config);
        assert_eq!(points, vec![Point::new(100.0, 25.0), Point::new(300.0, 25.0)]);
    }
}
