//! Goal model definition.

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog goal.
pub type GoalId = u32;

/// A strategic focus area the coordinator may select.
///
/// Goals are defined by the [`crate::catalog::Catalog`] and never change
/// after it is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Unique identifier within the catalog
    pub id: GoalId,

    /// Display label
    pub text: String,

    /// Decorative icon shown next to the label
    #[serde(default)]
    pub emoji: String,
}

impl Goal {
    /// Convenience constructor used by the built-in catalog and tests.
    pub fn new(id: GoalId, text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            emoji: emoji.into(),
        }
    }
}
