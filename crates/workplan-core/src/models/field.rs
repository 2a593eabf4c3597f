//! Editable free-text and date fields of a plan row.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkPlanError;

/// Fields of a [`super::PlanRow`] that accept a replacement value.
///
/// Objectives are edited separately since they hold a set of indices rather
/// than a single value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PlanField {
    Resources,
    Partners,
    PerformanceIndicators,
    StartDate,
    MeasurementDate,
}

impl PlanField {
    /// Every editable field, in column order.
    pub const ALL: [PlanField; 5] = [
        PlanField::Resources,
        PlanField::Partners,
        PlanField::PerformanceIndicators,
        PlanField::StartDate,
        PlanField::MeasurementDate,
    ];

    /// Canonical camelCase field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanField::Resources => "resources",
            PlanField::Partners => "partners",
            PlanField::PerformanceIndicators => "performanceIndicators",
            PlanField::StartDate => "startDate",
            PlanField::MeasurementDate => "measurementDate",
        }
    }

    /// Whether the field holds a calendar date rather than free text.
    pub fn is_date(&self) -> bool {
        matches!(self, PlanField::StartDate | PlanField::MeasurementDate)
    }
}

impl FromStr for PlanField {
    type Err = WorkPlanError;

    /// Accepts camelCase, kebab-case and snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "resources" => Ok(PlanField::Resources),
            "partners" => Ok(PlanField::Partners),
            "performanceindicators" => Ok(PlanField::PerformanceIndicators),
            "startdate" => Ok(PlanField::StartDate),
            "measurementdate" => Ok(PlanField::MeasurementDate),
            _ => Err(WorkPlanError::invalid_input("field").with_reason(format!(
                "unknown field '{s}', expected one of: resources, partners, \
                 performanceIndicators, startDate, measurementDate"
            ))),
        }
    }
}
