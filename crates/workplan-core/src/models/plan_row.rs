//! Plan row model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Goal, GoalId, ObjectiveSet, PlanField};
use crate::error::{Result, WorkPlanError};

/// The editable record created for each selected goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRow {
    /// The selected catalog goal
    pub goal: Goal,

    /// Indices into the goal's objective list
    #[serde(default)]
    pub objectives: ObjectiveSet,

    /// Resources needed to reach the goal
    #[serde(default)]
    pub resources: String,

    /// Staff or external partners involved
    #[serde(default)]
    pub partners: String,

    /// How success is measured
    #[serde(default)]
    pub performance_indicators: String,

    /// Planned start
    #[serde(default)]
    pub start_date: Option<Date>,

    /// Planned measurement date
    #[serde(default)]
    pub measurement_date: Option<Date>,
}

impl PlanRow {
    /// Creates a row for `goal` with every other field empty.
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            objectives: ObjectiveSet::new(),
            resources: String::new(),
            partners: String::new(),
            performance_indicators: String::new(),
            start_date: None,
            measurement_date: None,
        }
    }

    pub fn goal_id(&self) -> GoalId {
        self.goal.id
    }

    /// True when nothing but the goal has been filled in.
    pub fn is_blank(&self) -> bool {
        self.objectives.is_empty()
            && self.resources.is_empty()
            && self.partners.is_empty()
            && self.performance_indicators.is_empty()
            && self.start_date.is_none()
            && self.measurement_date.is_none()
    }

    /// Current value of `field` as display text. Dates use `YYYY-MM-DD`;
    /// absent values are empty.
    pub fn field_text(&self, field: PlanField) -> String {
        match field {
            PlanField::Resources => self.resources.clone(),
            PlanField::Partners => self.partners.clone(),
            PlanField::PerformanceIndicators => self.performance_indicators.clone(),
            PlanField::StartDate => format_date(self.start_date),
            PlanField::MeasurementDate => format_date(self.measurement_date),
        }
    }

    /// Replaces `field` with `value`.
    ///
    /// Date fields take an ISO `YYYY-MM-DD` value; a blank value clears the
    /// date. The row is left untouched when the value does not parse.
    pub(crate) fn set_field(&mut self, field: PlanField, value: &str) -> Result<()> {
        match field {
            PlanField::Resources => self.resources = value.to_string(),
            PlanField::Partners => self.partners = value.to_string(),
            PlanField::PerformanceIndicators => self.performance_indicators = value.to_string(),
            PlanField::StartDate => self.start_date = parse_date(field, value)?,
            PlanField::MeasurementDate => self.measurement_date = parse_date(field, value)?,
        }
        Ok(())
    }
}

fn parse_date(field: PlanField, value: &str) -> Result<Option<Date>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<Date>().map(Some).map_err(|e| {
        WorkPlanError::invalid_input(field.as_str())
            .with_reason(format!("expected a YYYY-MM-DD date, got '{value}': {e}"))
    })
}

fn format_date(date: Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
