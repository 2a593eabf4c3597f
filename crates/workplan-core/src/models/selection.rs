//! Bounded goal selection.

use serde::Serialize;

use super::GoalId;

/// Number of goals a work plan is built from.
pub const MAX_SELECTED: usize = 3;

/// Outcome of toggling a goal in a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The goal was appended to the selection
    Added,
    /// The goal was already selected and has been removed
    Removed,
    /// The selection is full; nothing changed
    Ignored,
}

/// Ordered set of at most [`MAX_SELECTED`] distinct goal ids.
///
/// Insertion order is kept since it decides the order of the plan rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<GoalId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if selected, otherwise appends it while there is room.
    pub fn toggle(&mut self, id: GoalId) -> Toggle {
        if let Some(position) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(position);
            Toggle::Removed
        } else if self.ids.len() < MAX_SELECTED {
            self.ids.push(id);
            Toggle::Added
        } else {
            Toggle::Ignored
        }
    }

    /// Whether toggling `id` would change the selection.
    pub fn can_toggle(&self, id: GoalId) -> bool {
        self.contains(id) || !self.is_full()
    }

    pub fn contains(&self, id: GoalId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTED
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[GoalId] {
        &self.ids
    }
}
