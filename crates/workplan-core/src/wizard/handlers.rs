//! Handler operations that take parameter structs and return formatted
//! wrapper types, shared by every interface driving the Wizard.

use std::path::PathBuf;

use log::{debug, info};

use super::Wizard;
use crate::{
    display::{ExportResult, GoalMenu, ObjectiveList, PlanRows, ToggleResult, UpdateResult},
    error::{Result, WorkPlanError},
    export::DocumentSink,
    models::{PlanRow, Stage, MAX_SELECTED},
    params::{GoalRef, PlanDraft, SetField, SetObjectives},
};

impl Wizard {
    /// Handle toggling a goal, reporting what happened.
    pub fn toggle_goal_result(&mut self, params: &GoalRef) -> Result<ToggleResult> {
        let outcome = self.toggle_goal(params.goal_id)?;
        let goal = self
            .catalog
            .goal(params.goal_id)
            .cloned()
            .ok_or(WorkPlanError::GoalNotFound {
                id: params.goal_id,
            })?;

        Ok(ToggleResult {
            goal,
            outcome,
            selected: self.selection.len(),
        })
    }

    /// The goal catalog annotated with the current selection.
    pub fn goal_menu(&self) -> GoalMenu<'_> {
        GoalMenu::new(&self.catalog, &self.selection)
    }

    /// The objectives of one goal, marking those selected in its row.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::GoalNotFound` for ids outside the catalog.
    pub fn objective_list(&self, params: &GoalRef) -> Result<ObjectiveList<'_>> {
        let goal = self
            .catalog
            .goal(params.goal_id)
            .ok_or(WorkPlanError::GoalNotFound {
                id: params.goal_id,
            })?;

        Ok(ObjectiveList {
            goal,
            objectives: self.catalog.objectives(goal.id),
            selected: self.row(goal.id).map(|row| &row.objectives),
        })
    }

    /// Current plan rows with objective text resolved against the catalog.
    pub fn plan_rows(&self) -> PlanRows<'_> {
        PlanRows::new(&self.catalog, &self.rows)
    }

    /// Handle an objectives edit. Returns `None` when no row exists for the
    /// goal, in which case nothing changed.
    pub fn update_objectives(
        &mut self,
        params: &SetObjectives,
    ) -> Result<Option<UpdateResult<PlanRow>>> {
        self.set_objectives(params.goal_id, params.objectives.clone());

        Ok(self.row(params.goal_id).map(|row| {
            let indices: Vec<String> = params.objectives.iter().map(|i| i.to_string()).collect();
            let change = if indices.is_empty() {
                "Cleared objectives".to_string()
            } else {
                format!("Set objectives to {}", indices.join(", "))
            };
            UpdateResult::with_changes(row.clone(), vec![change])
        }))
    }

    /// Handle a field edit. Returns `None` when no row exists for the goal,
    /// in which case nothing changed.
    pub fn update_field(&mut self, params: &SetField) -> Result<Option<UpdateResult<PlanRow>>> {
        self.set_field(params.goal_id, params.field, &params.value)?;

        Ok(self.row(params.goal_id).map(|row| {
            let value = row.field_text(params.field);
            let change = if value.is_empty() {
                format!("Cleared {}", params.field.as_str())
            } else {
                format!("Set {} to '{value}'", params.field.as_str())
            };
            UpdateResult::with_changes(row.clone(), vec![change])
        }))
    }

    /// Handle an export request, saving the document through `sink`.
    pub fn export_result(&self, sink: &mut dyn DocumentSink) -> Result<ExportResult> {
        let path: PathBuf = self.export_to(sink)?;
        Ok(ExportResult {
            path,
            rows: self.rows.len(),
        })
    }

    /// Replays a draft: selects its goals, advances, then applies every row
    /// edit in order.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::InvalidInput` when the draft lists a goal
    /// twice or more than three goals, `WorkPlanError::GoalNotFound` for a
    /// goal outside the catalog, and any error the individual operations
    /// report. The goal list is checked before anything is selected, so a
    /// rejected list leaves the wizard unchanged. Edits for goals that were
    /// not selected are ignored like any other edit without a row.
    pub fn apply_draft(&mut self, draft: &PlanDraft) -> Result<()> {
        debug!("Applying draft with goals {:?}", draft.goals);
        self.require_stage(Stage::Selecting)?;

        for (position, goal_id) in draft.goals.iter().enumerate() {
            if draft.goals[..position].contains(goal_id) {
                return Err(WorkPlanError::invalid_input("goals")
                    .with_reason(format!("goal {goal_id} is listed more than once")));
            }
            if position >= MAX_SELECTED {
                return Err(WorkPlanError::invalid_input("goals").with_reason(format!(
                    "goal {goal_id} exceeds the limit of {MAX_SELECTED} goals"
                )));
            }
            if !self.catalog.contains(*goal_id) {
                return Err(WorkPlanError::GoalNotFound { id: *goal_id });
            }
        }

        for goal_id in &draft.goals {
            if !self.selection.contains(*goal_id) {
                self.toggle_goal(*goal_id)?;
            }
        }

        self.advance()?;

        for row in &draft.rows {
            if let Some(edit) = row.objectives_edit() {
                self.set_objectives(edit.goal_id, edit.objectives);
            }
            for edit in row.field_edits() {
                self.set_field(edit.goal_id, edit.field, &edit.value)?;
            }
        }

        info!("Applied draft with {} row edits", draft.rows.len());
        Ok(())
    }
}
