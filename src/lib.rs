pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod execution;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod models;
pub mod scene;
pub mod validation;
pub mod workflow;

