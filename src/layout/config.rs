//! Layout options

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::NodeKind;

/// Direction the ranks flow in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Top to bottom
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    /// Left to right
    #[serde(rename = "LR")]
    LeftRight,
    /// Bottom to top
    #[serde(rename = "BT")]
    BottomTop,
    /// Right to left
    #[serde(rename = "RL")]
    RightLeft,
}

impl Direction {
    /// Ranks advance along the x axis
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::LeftRight | Direction::RightLeft)
    }

    /// Ranks advance towards decreasing coordinates
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::BottomTop | Direction::RightLeft)
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TB" => Ok(Direction::TopBottom),
            "LR" => Ok(Direction::LeftRight),
            "BT" => Ok(Direction::BottomTop),
            "RL" => Ok(Direction::RightLeft),
            _ => bail!("Unsupported direction: {s}. Supported directions: TB, LR, BT, RL"),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::TopBottom => write!(f, "TB"),
            Direction::LeftRight => write!(f, "LR"),
            Direction::BottomTop => write!(f, "BT"),
            Direction::RightLeft => write!(f, "RL"),
        }
    }
}

/// How edge paths are drawn between node anchors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRouting {
    /// A single segment from source anchor to target anchor
    #[default]
    Straight,
    /// Axis-aligned step path bending in the gap before the target's rank
    Orthogonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub direction: Direction,
    /// Gap between neighbouring nodes of the same rank
    pub node_spacing: f64,
    /// Gap between consecutive ranks
    pub rank_spacing: f64,
    /// Blank border around the whole drawing
    pub margin: f64,
    pub agent_size: NodeSize,
    pub task_size: NodeSize,
    /// Upper bound on barycenter sweeps (one down plus one up per pass)
    pub ordering_passes: usize,
    pub routing: EdgeRouting,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::TopBottom,
            node_spacing: 100.0,
            rank_spacing: 150.0,
            margin: 50.0,
            agent_size: NodeSize {
                width: 280.0,
                height: 180.0,
            },
            task_size: NodeSize {
                width: 300.0,
                height: 160.0,
            },
            ordering_passes: 4,
            routing: EdgeRouting::Straight,
        }
    }
}

impl LayoutConfig {
    pub fn size_of(&self, kind: NodeKind) -> NodeSize {
        match kind {
            NodeKind::Agent => self.agent_size,
            NodeKind::Task => self.task_size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("node_spacing", self.node_spacing),
            ("rank_spacing", self.rank_spacing),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("layout.{name} must be a finite, non-negative number (got {value})");
            }
        }

        for (name, size) in [("agent_size", self.agent_size), ("task_size", self.task_size)] {
            if !(size.width.is_finite() && size.height.is_finite())
                || size.width <= 0.0
                || size.height <= 0.0
            {
                bail!(
                    "layout.{name} must have positive dimensions (got {}x{})",
                    size.width,
                    size.height
                );
            }
        }

        Ok(())
    }
}
