//! Display implementations for domain models.
//!
//! Output is markdown for the terminal renderer. Exported HTML is produced
//! separately by [`crate::export`].

use std::fmt;

use super::datetime::DisplayDate;
use crate::models::{Goal, PlanRow, Stage, Toggle};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Toggle::Added => "added",
            Toggle::Removed => "removed",
            Toggle::Ignored => "ignored",
        };
        write!(f, "{text}")
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}. {}", self.id, self.text)
        } else {
            write!(f, "{} {}. {}", self.emoji, self.id, self.text)
        }
    }
}

impl PlanRow {
    /// Writes the row header and the non-objective fields.
    pub(crate) fn fmt_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Resources: {}", or_dash(&self.resources))?;
        writeln!(f, "- Partners: {}", or_dash(&self.partners))?;
        writeln!(
            f,
            "- Performance indicators: {}",
            or_dash(&self.performance_indicators)
        )?;
        writeln!(f, "- Start date: {}", DisplayDate(&self.start_date))?;
        writeln!(f, "- Measurement date: {}", DisplayDate(&self.measurement_date))
    }
}

/// Standalone row display; objectives are shown as indices since the row
/// alone cannot resolve their text.
impl fmt::Display for PlanRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.goal)?;
        writeln!(f)?;

        if self.objectives.is_empty() {
            writeln!(f, "- Objectives: -")?;
        } else {
            let indices: Vec<String> = self.objectives.iter().map(|i| i.to_string()).collect();
            writeln!(f, "- Objectives: {}", indices.join(", "))?;
        }
        self.fmt_fields(f)
    }
}

pub(crate) fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
