use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BuildArgs, ObjectivesArgs};

/// Build an annual technology work plan
///
/// Pick exactly three goals from the catalog, fill in objectives, resources,
/// partners, performance indicators and dates for each, and export the plan
/// as a right-to-left HTML table (`work-plan.html`). Run without a command
/// to start an interactive session.
#[derive(Parser)]
#[command(version, about, name = "workplan")]
pub struct Args {
    /// Path to a JSON goal catalog. Defaults to
    /// $XDG_CONFIG_HOME/workplan/catalog.json, then the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the workplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the goals in the catalog
    #[command(alias = "g")]
    Goals,
    /// List the objectives of one goal
    #[command(alias = "o")]
    Objectives(ObjectivesArgs),
    /// Build and export a plan from a JSON draft
    #[command(alias = "b")]
    Build(BuildArgs),
    /// Start an interactive session reading commands from stdin
    #[command(alias = "i")]
    Interactive,
}
