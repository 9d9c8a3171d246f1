//! Integration tests for crewgraph
//!
//! These tests drive whole workflows through the public API: loading YAML
//! files from disk, laying them out, replaying execution logs and running
//! the subcommands against temporary files.

pub mod commands;
pub mod helpers;
pub mod replay_overlay;
pub mod scenarios;
pub mod workflow_files;
