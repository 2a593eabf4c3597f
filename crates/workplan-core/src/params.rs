//! Parameter structures for work plan operations
//!
//! This module contains shared parameter structures used by every interface
//! (one-shot CLI commands, the interactive session, draft files) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Session input  │    │  Core Params    │
//! │  (clap derives) │───▶│  (line parser)  │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Plan Drafts
//!
//! A [`PlanDraft`] describes a whole session up front: the goals to select
//! and the edits to apply to each row. It is replayed through the regular
//! wizard operations by [`crate::Wizard::apply_draft`], so a draft obeys the
//! same rules as interactive use.
//!
//! ```rust
//! use workplan_core::params::PlanDraft;
//!
//! let draft = PlanDraft::from_json(r#"{
//!     "goals": [1, 3, 4],
//!     "rows": [
//!         { "goal": 1, "resources": "Projector" },
//!         { "goal": 3, "objectives": [0], "startDate": "2024-09-01" }
//!     ]
//! }"#)?;
//! assert_eq!(draft.goals, vec![1, 3, 4]);
//! assert_eq!(draft.rows[1].field_edits().len(), 1);
//! # Ok::<(), workplan_core::WorkPlanError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{IoResultExt, Result},
    models::{GoalId, ObjectiveSet, PlanField},
};

/// Parameters for operations addressing a single goal.
///
/// Used for toggling a goal and listing its objectives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRef {
    /// Catalog id of the goal
    pub goal_id: GoalId,
}

/// Parameters for replacing the selected objectives of a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetObjectives {
    /// Goal whose row is edited
    pub goal_id: GoalId,
    /// Positional indices into the goal's objective list
    pub objectives: ObjectiveSet,
}

/// Parameters for replacing one free-text or date field of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetField {
    /// Goal whose row is edited
    pub goal_id: GoalId,
    /// Field to replace
    pub field: PlanField,
    /// New value; dates use `YYYY-MM-DD`, blank clears
    pub value: String,
}

/// Edits for one plan row inside a [`PlanDraft`]. Absent keys leave the
/// field empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowDraft {
    /// Goal whose row is edited
    pub goal: GoalId,
    #[serde(default)]
    pub objectives: Option<ObjectiveSet>,
    #[serde(default)]
    pub resources: Option<String>,
    #[serde(default)]
    pub partners: Option<String>,
    #[serde(default, alias = "performanceIndicators")]
    pub performance_indicators: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "measurementDate")]
    pub measurement_date: Option<String>,
}

impl RowDraft {
    /// The objectives edit, if the draft sets one.
    pub fn objectives_edit(&self) -> Option<SetObjectives> {
        self.objectives.clone().map(|objectives| SetObjectives {
            goal_id: self.goal,
            objectives,
        })
    }

    /// Field edits in column order, skipping absent fields.
    pub fn field_edits(&self) -> Vec<SetField> {
        let values = [
            &self.resources,
            &self.partners,
            &self.performance_indicators,
            &self.start_date,
            &self.measurement_date,
        ];

        PlanField::ALL
            .iter()
            .zip(values)
            .filter_map(|(field, value)| {
                value.as_ref().map(|value| SetField {
                    goal_id: self.goal,
                    field: *field,
                    value: value.clone(),
                })
            })
            .collect()
    }
}

/// A complete plan description replayed through the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDraft {
    /// Goals to select, in row order
    pub goals: Vec<GoalId>,
    /// Row edits, applied in order after advancing
    #[serde(default)]
    pub rows: Vec<RowDraft>,
}

impl PlanDraft {
    /// Parses a JSON draft.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON draft file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_path(path)?;
        Self::from_json(&json)
    }
}
