//! Line-oriented interactive session.
//!
//! Each input line is one command. A failing command prints an `Error:`
//! status and the session keeps going; `quit` or end of input ends it.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use workplan_core::{
    export::sink_for_output,
    params::{GoalRef, SetField, SetObjectives},
    GoalId, ObjectiveSet, OperationStatus, PlanRow, Stage, UpdateResult, Wizard,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
# Commands

- `goals`: show the goals and which are selected
- `toggle <goal>`: select or deselect a goal
- `next`: continue with exactly 3 selected goals
- `show`: show the goals or, once editing, the plan rows
- `options <goal>`: list a goal's objectives with their indices
- `objectives <goal> <i,j,...>`: choose objectives, no list clears them
- `set <goal> <field> [value]`: set resources, partners, performanceIndicators, startDate or measurementDate (dates as YYYY-MM-DD, no value clears)
- `export [path]`: save the plan, by default to ./work-plan.html
- `quit`: leave the session
";

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Goals,
    Toggle(GoalRef),
    Next,
    Show,
    Options(GoalRef),
    Objectives(SetObjectives),
    Set(SetField),
    Export(Option<PathBuf>),
    Quit,
}

/// Splits off the first whitespace-separated word.
fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => (&line[..end], line[end..].trim_start()),
        None => (line, ""),
    }
}

fn parse_goal(word: &str) -> Result<GoalId> {
    if word.is_empty() {
        bail!("missing goal id");
    }
    word.parse()
        .map_err(|_| anyhow!("'{word}' is not a goal id"))
}

/// Parses one line; blank lines yield `None`.
fn parse_command(line: &str) -> Result<Option<Command>> {
    let (name, rest) = split_word(line.trim());
    let command = match name {
        "" => return Ok(None),
        "help" | "?" => Command::Help,
        "goals" => Command::Goals,
        "toggle" => Command::Toggle(GoalRef {
            goal_id: parse_goal(rest)?,
        }),
        "next" => Command::Next,
        "show" => Command::Show,
        "options" => Command::Options(GoalRef {
            goal_id: parse_goal(rest)?,
        }),
        "objectives" => {
            let (goal, list) = split_word(rest);
            Command::Objectives(SetObjectives {
                goal_id: parse_goal(goal)?,
                objectives: list.parse::<ObjectiveSet>()?,
            })
        }
        "set" => {
            let (goal, rest) = split_word(rest);
            let goal_id = parse_goal(goal)?;
            let (field, value) = split_word(rest);
            if field.is_empty() {
                bail!("missing field name");
            }
            Command::Set(SetField {
                goal_id,
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{other}', type 'help' for a list"),
    };
    Ok(Some(command))
}

/// Interactive session driving one wizard.
pub struct Session<'a> {
    wizard: &'a mut Wizard,
    renderer: &'a TerminalRenderer,
}

impl<'a> Session<'a> {
    pub fn new(wizard: &'a mut Wizard, renderer: &'a TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead + IsTerminal>(mut self, input: R) -> Result<()> {
        let prompt = input.is_terminal();
        self.renderer
            .render("Type `help` for a list of commands.\n")?;
        self.renderer.render(&self.wizard.goal_menu().to_string())?;

        let mut lines = input.lines();
        loop {
            if prompt {
                print!("> ");
                std::io::stdout().flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("Failed to read input")?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.report_error(&e)?;
                    continue;
                }
            };
            debug!("Session command: {command:?}");

            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(command) {
                self.report_error(&e)?;
            }
        }

        debug!("Interactive session ended");
        Ok(())
    }

    fn report_error(&self, e: &anyhow::Error) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(format!("{e:#}")).to_string())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Help => self.renderer.render(HELP),
            Command::Goals => self.renderer.render(&self.wizard.goal_menu().to_string()),
            Command::Toggle(params) => {
                let result = self.wizard.toggle_goal_result(&params)?;
                self.renderer.render(&result.to_string())
            }
            Command::Next => {
                let rows = self.wizard.advance()?.len();
                self.renderer.render(
                    &OperationStatus::success(format!("Editing a plan with {rows} goals"))
                        .to_string(),
                )?;
                self.renderer.render(&self.wizard.plan_rows().to_string())
            }
            Command::Show => match self.wizard.stage() {
                Stage::Selecting => self.renderer.render(&self.wizard.goal_menu().to_string()),
                Stage::Editing => self.renderer.render(&self.wizard.plan_rows().to_string()),
            },
            Command::Options(params) => {
                let list = self.wizard.objective_list(&params)?;
                self.renderer.render(&list.to_string())
            }
            Command::Objectives(params) => {
                let result = self.wizard.update_objectives(&params)?;
                self.render_update(params.goal_id, result)
            }
            Command::Set(params) => {
                let result = self.wizard.update_field(&params)?;
                self.render_update(params.goal_id, result)
            }
            Command::Export(path) => {
                let mut sink = sink_for_output(path.as_deref());
                let result = self.wizard.export_result(sink.as_mut())?;
                self.renderer.render(&result.to_string())
            }
            Command::Quit => Ok(()),
        }
    }

    fn render_update(&self, goal_id: GoalId, result: Option<UpdateResult<PlanRow>>) -> Result<()> {
        match result {
            Some(result) => self.renderer.render(&result.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!(
                    "No plan row for goal {goal_id}, nothing changed"
                ))
                .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use workplan_core::PlanField;

    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("  next ").unwrap(), Some(Command::Next));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(
            parse_command("toggle 4").unwrap(),
            Some(Command::Toggle(GoalRef { goal_id: 4 }))
        );
    }

    #[test]
    fn test_parse_set_keeps_value_spacing() {
        let command = parse_command("set 3 partners  IT dept,  Principal").unwrap();
        match command {
            Some(Command::Set(params)) => {
                assert_eq!(params.goal_id, 3);
                assert_eq!(params.field, PlanField::Partners);
                assert_eq!(params.value, "IT dept,  Principal");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        match parse_command("set 1 start-date").unwrap() {
            Some(Command::Set(params)) => {
                assert_eq!(params.field, PlanField::StartDate);
                assert!(params.value.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_objectives() {
        match parse_command("objectives 2 0, 3").unwrap() {
            Some(Command::Objectives(params)) => {
                assert_eq!(params.goal_id, 2);
                assert_eq!(params.objectives, ObjectiveSet::from([0, 3]));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match parse_command("objectives 2").unwrap() {
            Some(Command::Objectives(params)) => assert!(params.objectives.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_export_path() {
        assert_eq!(parse_command("export").unwrap(), Some(Command::Export(None)));
        assert_eq!(
            parse_command("export out/plan.html").unwrap(),
            Some(Command::Export(Some(PathBuf::from("out/plan.html"))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("dance").is_err());
        assert!(parse_command("toggle").is_err());
        assert!(parse_command("toggle one").is_err());
        assert!(parse_command("set 1").is_err());
        assert!(parse_command("set 1 budget 100").is_err());
        assert!(parse_command("objectives 1 a,b").is_err());
    }
}
