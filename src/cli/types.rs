use clap::{Parser, Subcommand};
use crewgraph::layout::{Direction, EdgeRouting};
use crewgraph::models::{Language, ModelProvider};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
  ┌─┐┬─┐┌─┐┬ ┬┌─┐┬─┐┌─┐┌─┐┬ ┬
  │  ├┬┘├┤ ││││ ┬├┬┘├─┤├─┘├─┤
  └─┘┴└─└─┘└┴┘└─┘┴└─┴ ┴┴  ┴ ┴

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "crewgraph")]
#[command(about = "Agent crew workflow graphs: layout and live execution status", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Config file (default: ./crewgraph.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Flow direction: TB, LR, BT or RL
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Edge routing: straight or orthogonal
    #[arg(long, value_parser = parse_routing)]
    pub routing: Option<EdgeRouting>,
}

fn parse_routing(s: &str) -> Result<EdgeRouting, String> {
    match s.to_lowercase().as_str() {
        "straight" => Ok(EdgeRouting::Straight),
        "orthogonal" | "step" => Ok(EdgeRouting::Orthogonal),
        _ => Err(format!("Unknown routing: {s}. Expected straight or orthogonal")),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a workflow file and print its execution order
    Check {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        /// Fail when agent/task connection rules are broken
        #[arg(long)]
        strict: bool,
    },

    /// Print node positions and edge routes as JSON
    Layout {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the workflow graph with execution status
    Show {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        /// JSON Lines status event log to overlay
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// Print the scene as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Replay a recorded status event log against a workflow
    Replay {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        /// JSON Lines status event log
        events: PathBuf,

        /// Events delivered per poll
        #[arg(short, long, default_value_t = 1)]
        batch: usize,
    },

    /// Inspect or edit the project section of a workflow
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Print the project record with agent/task/execution counts as JSON
    Show {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        /// Event logs of past executions
        #[arg(short, long)]
        events: Vec<PathBuf>,
    },

    /// Update project fields in place; omitted fields stay unchanged
    Update {
        /// Path to the workflow YAML file
        workflow: PathBuf,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// openrouter, gemini, openai or anthropic
        #[arg(long)]
        provider: Option<ModelProvider>,

        #[arg(long)]
        model: Option<String>,

        /// pt, en, es or fr
        #[arg(long)]
        language: Option<Language>,
    },
}
