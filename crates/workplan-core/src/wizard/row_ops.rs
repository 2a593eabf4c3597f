//! Plan row edits for the Wizard.
//!
//! Rows are addressed by goal id. An edit for a goal without a row is a
//! silent no-op: it indicates a caller bug, not a user-facing condition.

use log::debug;

use super::Wizard;
use crate::{
    error::Result,
    models::{GoalId, ObjectiveSet, PlanField, PlanRow},
};

impl Wizard {
    /// The row created for `goal_id`, if any.
    pub fn row(&self, goal_id: GoalId) -> Option<&PlanRow> {
        self.rows.iter().find(|row| row.goal_id() == goal_id)
    }

    fn row_mut(&mut self, goal_id: GoalId) -> Option<&mut PlanRow> {
        self.rows.iter_mut().find(|row| row.goal_id() == goal_id)
    }

    /// Replaces the selected objectives of the row for `goal_id`.
    ///
    /// Indices are checked against the catalog only when exporting.
    pub fn set_objectives(&mut self, goal_id: GoalId, objectives: ObjectiveSet) {
        match self.row_mut(goal_id) {
            Some(row) => {
                debug!("Goal {goal_id}: objectives set to {objectives:?}");
                row.objectives = objectives;
            }
            None => debug!("Goal {goal_id}: no plan row, ignoring objectives edit"),
        }
    }

    /// Replaces one free-text or date field of the row for `goal_id`.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::InvalidInput` when a date field receives a
    /// value that is neither blank nor `YYYY-MM-DD`. The row is unchanged.
    pub fn set_field(&mut self, goal_id: GoalId, field: PlanField, value: &str) -> Result<()> {
        let Some(row) = self.row_mut(goal_id) else {
            debug!("Goal {goal_id}: no plan row, ignoring {} edit", field.as_str());
            return Ok(());
        };

        row.set_field(field, value)?;
        debug!("Goal {goal_id}: {} set to {value:?}", field.as_str());
        Ok(())
    }
}
