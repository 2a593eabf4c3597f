//! Goal selection operations for the Wizard.

use log::{debug, info, warn};

use super::Wizard;
use crate::{
    error::{Result, WorkPlanError},
    models::{GoalId, PlanRow, Stage, Toggle, MAX_SELECTED},
};

impl Wizard {
    /// Adds or removes `goal_id` from the selection.
    ///
    /// Adding a goal while three are already selected changes nothing and
    /// returns [`Toggle::Ignored`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::GoalNotFound` for ids outside the catalog and
    /// `WorkPlanError::WrongStage` once the wizard has advanced.
    pub fn toggle_goal(&mut self, goal_id: GoalId) -> Result<Toggle> {
        self.require_stage(Stage::Selecting)?;
        if !self.catalog.contains(goal_id) {
            return Err(WorkPlanError::GoalNotFound { id: goal_id });
        }

        let outcome = self.selection.toggle(goal_id);
        match outcome {
            Toggle::Ignored => warn!(
                "Ignoring goal {goal_id}: {MAX_SELECTED} goals are already selected"
            ),
            _ => debug!(
                "Goal {goal_id} {outcome}, selection is now {:?}",
                self.selection.ids()
            ),
        }
        Ok(outcome)
    }

    /// Whether toggling `goal_id` would change the selection. Presentation
    /// layers use this to disable controls for a fourth goal.
    pub fn can_select(&self, goal_id: GoalId) -> bool {
        self.stage == Stage::Selecting
            && self.catalog.contains(goal_id)
            && self.selection.can_toggle(goal_id)
    }

    /// True iff the wizard is selecting and exactly three goals are chosen.
    pub fn can_advance(&self) -> bool {
        self.stage == Stage::Selecting && self.selection.len() == MAX_SELECTED
    }

    /// Creates one empty plan row per selected goal, in selection order, and
    /// moves to the editing stage. There is no way back to selecting.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::WrongStage` when already editing and
    /// `WorkPlanError::SelectionIncomplete` unless exactly three goals are
    /// selected. Nothing changes on error.
    pub fn advance(&mut self) -> Result<&[PlanRow]> {
        self.require_stage(Stage::Selecting)?;
        if !self.can_advance() {
            return Err(WorkPlanError::SelectionIncomplete {
                selected: self.selection.len(),
            });
        }

        let rows = self
            .selection
            .ids()
            .iter()
            .map(|id| {
                self.catalog
                    .goal(*id)
                    .cloned()
                    .map(PlanRow::new)
                    .ok_or(WorkPlanError::GoalNotFound { id: *id })
            })
            .collect::<Result<Vec<_>>>()?;

        self.rows = rows;
        self.stage = Stage::Editing;
        info!(
            "Advanced to editing with goals {:?}",
            self.selection.ids()
        );
        Ok(&self.rows)
    }
}
