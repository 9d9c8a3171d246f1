use anyhow::Result;
use clap::CommandFactory;
use crewgraph::commands::common::{apply_display, LayoutOverrides};
use crewgraph::commands::{check, layout, project, replay, show};
use crewgraph::completions::{generate_completions, Shell};
use crewgraph::config::Config;
use crewgraph::models::UpdateProjectRequest;
use std::str::FromStr;

use super::types::{Cli, Commands, LayoutArgs, ProjectCommands};

impl From<LayoutArgs> for LayoutOverrides {
    fn from(args: LayoutArgs) -> Self {
        LayoutOverrides {
            direction: args.direction,
            routing: args.routing,
        }
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = Cli::command();
        generate_completions(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    apply_display(&config);

    match cli.command {
        Commands::Check { workflow, strict } => check::execute(&workflow, strict),
        Commands::Layout {
            workflow,
            layout: args,
            output,
        } => layout::execute(&workflow, &config, args.into(), output.as_deref()),
        Commands::Show {
            workflow,
            events,
            json,
            layout: args,
        } => show::execute(&workflow, &config, args.into(), events.as_deref(), json),
        Commands::Replay {
            workflow,
            events,
            batch,
        } => replay::execute(&workflow, &events, &config, batch),
        Commands::Project { command } => match command {
            ProjectCommands::Show { workflow, events } => project::show(&workflow, &events),
            ProjectCommands::Update {
                workflow,
                name,
                description,
                provider,
                model,
                language,
            } => project::update(
                &workflow,
                UpdateProjectRequest {
                    name,
                    description,
                    model_provider: provider,
                    model_name: model,
                    language,
                },
            ),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
