//! `crewgraph show`: render the workflow scene

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::execution::StatusSnapshot;
use crate::scene::{legend, project, render_scene};

use super::common::{layout_for, load, statuses_from_log, LayoutOverrides};

/// Show the workflow, overlaid with the statuses from `events` if given
pub fn execute(
    workflow: &Path,
    config: &Config,
    overrides: LayoutOverrides,
    events: Option<&Path>,
    json: bool,
) -> Result<()> {
    let loaded = load(workflow)?;
    let layout_config = overrides.apply(&config.layout);
    layout_config.validate()?;
    let layout = layout_for(&loaded, &layout_config)?;

    let status = match events {
        Some(path) => statuses_from_log(&loaded, path)?,
        None => StatusSnapshot::default(),
    };
    let scene = project(&layout, &status);

    if json {
        println!("{}", scene.to_json()?);
        return Ok(());
    }

    println!();
    println!("{}", loaded.document.project.name.bold());
    println!("{}", "=".repeat(loaded.document.project.name.chars().count()));
    println!();
    print!("{}", render_scene(&scene));
    println!("{}", legend());

    Ok(())
}
