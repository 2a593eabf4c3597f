//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper borrows what it shows and handles the empty case itself.

use std::fmt;

use super::models::or_dash;
use crate::{
    catalog::Catalog,
    models::{Goal, ObjectiveSet, PlanRow, Selection, MAX_SELECTED},
};

/// The goal catalog with selection markers, as shown while selecting.
///
/// Selected goals are marked `[x]`; once the selection is full the remaining
/// goals are marked unavailable.
///
/// # Examples
///
/// ```rust
/// use workplan_core::{catalog::Catalog, display::GoalMenu, models::Selection};
///
/// let catalog = Catalog::builtin();
/// let mut selection = Selection::new();
/// selection.toggle(2);
///
/// let output = GoalMenu::new(&catalog, &selection).to_string();
/// assert!(output.contains("[x] 🤖 2."));
/// assert!(output.contains("1 of 3 selected"));
/// ```
pub struct GoalMenu<'a> {
    catalog: &'a Catalog,
    selection: &'a Selection,
}

impl<'a> GoalMenu<'a> {
    pub fn new(catalog: &'a Catalog, selection: &'a Selection) -> Self {
        Self { catalog, selection }
    }
}

impl fmt::Display for GoalMenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Goals")?;
        writeln!(f)?;
        for goal in self.catalog.goals() {
            let marker = if self.selection.contains(goal.id) {
                "[x]"
            } else if self.selection.can_toggle(goal.id) {
                "[ ]"
            } else {
                "[-]"
            };
            writeln!(f, "- {marker} {goal}")?;
        }
        writeln!(f)?;
        write!(f, "{} of {MAX_SELECTED} selected", self.selection.len())?;
        if self.selection.len() == MAX_SELECTED {
            write!(f, ", ready to continue")?;
        }
        writeln!(f)
    }
}

/// The objectives of one goal with their positional indices.
pub struct ObjectiveList<'a> {
    pub goal: &'a Goal,
    pub objectives: &'a [String],
    /// Indices chosen in the goal's plan row, when one exists
    pub selected: Option<&'a ObjectiveSet>,
}

impl fmt::Display for ObjectiveList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;
        if self.objectives.is_empty() {
            return writeln!(f, "No objectives listed for this goal.");
        }

        for (index, objective) in self.objectives.iter().enumerate() {
            match self.selected {
                Some(set) if set.contains(index) => writeln!(f, "- [x] {index}: {objective}")?,
                Some(_) => writeln!(f, "- [ ] {index}: {objective}")?,
                None => writeln!(f, "- {index}: {objective}")?,
            }
        }
        Ok(())
    }
}

/// The plan rows with objective text resolved against the catalog.
///
/// Indices that do not resolve are shown as `#<index> (unknown)` so the
/// problem is visible before export rejects it.
pub struct PlanRows<'a> {
    catalog: &'a Catalog,
    rows: &'a [PlanRow],
}

impl<'a> PlanRows<'a> {
    pub fn new(catalog: &'a Catalog, rows: &'a [PlanRow]) -> Self {
        Self { catalog, rows }
    }
}

impl fmt::Display for PlanRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No plan rows yet.");
        }

        writeln!(f, "# {}", self.catalog.labels().title)?;
        for row in self.rows {
            writeln!(f)?;
            writeln!(f, "## {}", row.goal)?;
            writeln!(f)?;

            let objectives: Vec<String> = row
                .objectives
                .iter()
                .map(|index| match self.catalog.objective(row.goal_id(), index) {
                    Some(text) => text.to_string(),
                    None => format!("#{index} (unknown)"),
                })
                .collect();
            writeln!(f, "- Objectives: {}", or_dash(&objectives.join("; ")))?;
            row.fmt_fields(f)?;
        }
        Ok(())
    }
}
