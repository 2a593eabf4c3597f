//! Command-line argument wrappers and the one-shot command handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so core params stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Wizard
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use workplan_core::{
    export::sink_for_output,
    params::{GoalRef, PlanDraft},
    GoalId, Wizard,
};

use crate::{renderer::TerminalRenderer, repl::Session};

/// List the objectives of a goal
///
/// Objectives are shown with the positional indices used when selecting
/// them for a plan row.
#[derive(Args)]
pub struct ObjectivesArgs {
    /// ID of the goal
    #[arg(help = "Catalog ID of the goal whose objectives to list")]
    pub goal_id: GoalId,
}

impl From<ObjectivesArgs> for GoalRef {
    fn from(val: ObjectivesArgs) -> Self {
        GoalRef {
            goal_id: val.goal_id,
        }
    }
}

/// Build a plan from a JSON draft and export it
///
/// The draft lists three goals and the edits for each row. It is replayed
/// through the same operations as an interactive session.
#[derive(Args)]
pub struct BuildArgs {
    /// JSON draft file, or `-` to read it from stdin
    #[arg(short, long, help = "JSON draft file, or '-' to read from stdin")]
    pub draft: PathBuf,
    /// Where to save the document
    #[arg(
        short,
        long,
        help = "Output file, or an existing directory to save work-plan.html in \
                (default: ./work-plan.html)"
    )]
    pub output: Option<PathBuf>,
}

/// Runs commands against one wizard and renders their results.
pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// List all goals in the catalog.
    pub fn list_goals(&self) -> Result<()> {
        let goals: String = self
            .wizard
            .catalog()
            .goals()
            .iter()
            .map(|goal| format!("- {goal}\n"))
            .collect();

        self.renderer.render(&format!("# Goals\n\n{goals}"))
    }

    /// List the objectives of one goal.
    pub fn list_objectives(&self, args: ObjectivesArgs) -> Result<()> {
        let list = self.wizard.objective_list(&args.into())?;
        self.renderer.render(&list.to_string())
    }

    /// Replay a draft, export the plan and save it.
    pub fn build(&mut self, args: BuildArgs) -> Result<()> {
        let draft = read_draft(&args.draft)?;
        self.wizard
            .apply_draft(&draft)
            .context("Failed to apply draft")?;

        let mut sink = sink_for_output(args.output.as_deref());
        let result = self
            .wizard
            .export_result(sink.as_mut())
            .context("Failed to export work plan")?;

        self.renderer.render(&result.to_string())
    }

    /// Run an interactive session on stdin until `quit` or end of input.
    pub fn interactive(&mut self) -> Result<()> {
        info!("Starting interactive session");
        let stdin = std::io::stdin();
        Session::new(&mut self.wizard, &self.renderer).run(stdin.lock())
    }
}

fn read_draft(path: &Path) -> Result<PlanDraft> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read draft from stdin")?;
        return PlanDraft::from_json(&json).context("Failed to parse draft from stdin");
    }

    PlanDraft::load(path).with_context(|| format!("Failed to load draft {}", path.display()))
}
