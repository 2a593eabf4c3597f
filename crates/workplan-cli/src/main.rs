//! Workplan CLI Application
//!
//! Command-line interface for building an annual technology work plan.

mod args;
mod cli;
mod renderer;
mod repl;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use workplan_core::WizardBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to load goal catalog")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(wizard, renderer);

    info!("Workplan started");

    match command {
        Some(Goals) => cli.list_goals(),
        Some(Objectives(args)) => cli.list_objectives(args),
        Some(Build(args)) => cli.build(args),
        Some(Interactive) | None => cli.interactive(),
    }
}
