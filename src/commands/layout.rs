//! `crewgraph layout`: compute node positions and edge routes as JSON

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;

use super::common::{layout_for, load, LayoutOverrides};

pub fn execute(
    workflow: &Path,
    config: &Config,
    overrides: LayoutOverrides,
    output: Option<&Path>,
) -> Result<()> {
    let loaded = load(workflow)?;
    let layout_config = overrides.apply(&config.layout);
    layout_config.validate()?;

    let layout = layout_for(&loaded, &layout_config)?;
    let json = serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write layout: {}", path.display()))?;
            println!(
                "Wrote layout for {} nodes to {}",
                layout.nodes.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
