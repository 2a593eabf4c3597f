//! Result wrapper types for displaying operation outcomes.

use std::fmt;
use std::path::PathBuf;

use crate::models::{Goal, PlanRow, Toggle, MAX_SELECTED};

/// Outcome of toggling a goal.
///
/// # Examples
///
/// ```rust
/// use workplan_core::{display::ToggleResult, models::{Goal, Toggle}};
///
/// let result = ToggleResult {
///     goal: Goal::new(4, "Information security", "🔒"),
///     outcome: Toggle::Added,
///     selected: 1,
/// };
/// assert_eq!(
///     result.to_string(),
///     "Selected goal 🔒 4. Information security (1 of 3)\n"
/// );
/// ```
pub struct ToggleResult {
    pub goal: Goal,
    pub outcome: Toggle,
    /// Selection size after the toggle
    pub selected: usize,
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Toggle::Added => writeln!(
                f,
                "Selected goal {} ({} of {MAX_SELECTED})",
                self.goal, self.selected
            ),
            Toggle::Removed => writeln!(
                f,
                "Deselected goal {} ({} of {MAX_SELECTED})",
                self.goal, self.selected
            ),
            Toggle::Ignored => writeln!(
                f,
                "Goal {} not selected: {MAX_SELECTED} goals are already selected",
                self.goal.id
            ),
        }
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the changes made so users get clear feedback on what was
/// modified, followed by the updated resource.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<PlanRow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan row for goal {}", self.resource.goal_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a saved export.
pub struct ExportResult {
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved work plan with {} rows to {}",
            self.rows,
            self.path.display()
        )
    }
}
