//! Wizard stage enumeration.

use serde::{Deserialize, Serialize};

/// The two stages of the wizard, entered in this fixed order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Goals are being toggled in and out of the selection
    #[default]
    Selecting,

    /// Plan rows exist and accept field edits and exports
    Editing,
}

impl Stage {
    /// Lowercase name used in messages and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Selecting => "selecting",
            Stage::Editing => "editing",
        }
    }
}
