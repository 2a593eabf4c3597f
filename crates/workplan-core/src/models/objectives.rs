//! Selected objective indices for a plan row.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkPlanError;

/// Set of positional indices into a goal's objective list.
///
/// Iteration is ascending, so rendered objectives always follow catalog
/// order regardless of the order they were picked in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveSet(BTreeSet<usize>);

impl ObjectiveSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for ObjectiveSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for ObjectiveSet {
    fn from(indices: [usize; N]) -> Self {
        indices.into_iter().collect()
    }
}

impl FromStr for ObjectiveSet {
    type Err = WorkPlanError;

    /// Parses a comma-separated index list such as `0,2`. An empty string
    /// yields an empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>().map_err(|_| {
                    WorkPlanError::invalid_input("objectives")
                        .with_reason(format!("'{part}' is not an objective index"))
                })
            })
            .collect()
    }
}
