//! Goal and objective catalog.
//!
//! The catalog is immutable configuration: the goals a coordinator can pick
//! from, the objectives listed under each goal, and the labels printed in the
//! exported document. It is loaded once and handed to the
//! [`crate::wizard::Wizard`], which never mutates it.
//!
//! Objectives are referenced by position. Reordering a goal's objective list
//! changes the meaning of indices already stored in plan rows.
//!
//! # Catalog Files
//!
//! A catalog can be read from JSON instead of using [`Catalog::builtin`]:
//!
//! ```rust
//! use workplan_core::catalog::Catalog;
//!
//! let json = r#"{
//!     "goals": [
//!         { "id": 1, "text": "Cloud classrooms", "emoji": "☁️" },
//!         { "id": 2, "text": "Robotics" },
//!         { "id": 3, "text": "Information security" }
//!     ],
//!     "objectives": { "1": ["Open a virtual class per grade"] }
//! }"#;
//!
//! let catalog = Catalog::from_json(json)?;
//! assert_eq!(catalog.goals().len(), 3);
//! assert_eq!(catalog.objective(1, 0), Some("Open a virtual class per grade"));
//! assert!(catalog.objectives(2).is_empty());
//! # Ok::<(), workplan_core::WorkPlanError>(())
//! ```

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{IoResultExt, Result, WorkPlanError},
    models::{Goal, GoalId, ObjectiveSet, MAX_SELECTED},
};

/// Number of columns in the exported table.
pub const COLUMN_COUNT: usize = 7;

/// Title and column headers of the exported document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentLabels {
    /// Used for both `<title>` and the `<h1>` heading
    pub title: String,

    /// Goal, objectives, resources, partners, performance indicators, start
    /// date, measurement date
    pub headers: [String; COLUMN_COUNT],
}

impl Default for DocumentLabels {
    fn default() -> Self {
        Self {
            title: builtin::TITLE.to_string(),
            headers: builtin::HEADERS.map(str::to_string),
        }
    }
}

/// On-disk shape of a catalog, validated into a [`Catalog`].
#[derive(Debug, Deserialize)]
struct CatalogFile {
    goals: Vec<Goal>,
    #[serde(default)]
    objectives: BTreeMap<GoalId, Vec<String>>,
    #[serde(default)]
    labels: DocumentLabels,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = WorkPlanError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Catalog::new(file.goals, file.objectives, file.labels)
    }
}

/// Immutable set of goals, their objectives, and document labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CatalogFile")]
pub struct Catalog {
    goals: Vec<Goal>,
    objectives: BTreeMap<GoalId, Vec<String>>,
    labels: DocumentLabels,
}

impl Catalog {
    /// Creates a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::Configuration` when goal ids repeat, when an
    /// objective list belongs to an unknown goal, or when there are fewer
    /// goals than a plan needs.
    pub fn new(
        goals: Vec<Goal>,
        objectives: BTreeMap<GoalId, Vec<String>>,
        labels: DocumentLabels,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for goal in &goals {
            if !seen.insert(goal.id) {
                return Err(WorkPlanError::configuration(format_args!(
                    "duplicate goal id {} in catalog",
                    goal.id
                )));
            }
        }

        if let Some(orphan) = objectives.keys().find(|id| !seen.contains(*id)) {
            return Err(WorkPlanError::configuration(format_args!(
                "objectives listed for unknown goal id {orphan}"
            )));
        }

        if goals.len() < MAX_SELECTED {
            return Err(WorkPlanError::configuration(format_args!(
                "catalog defines {} goals, at least {MAX_SELECTED} are required",
                goals.len()
            )));
        }

        Ok(Self {
            goals,
            objectives,
            labels,
        })
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Reads and validates a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_path(path)?;
        Self::from_json(&json)
    }

    /// Goals in catalog order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn contains(&self, id: GoalId) -> bool {
        self.goal(id).is_some()
    }

    /// Objectives of a goal; empty when the goal has none listed.
    pub fn objectives(&self, id: GoalId) -> &[String] {
        self.objectives.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn objective(&self, id: GoalId, index: usize) -> Option<&str> {
        self.objectives(id).get(index).map(String::as_str)
    }

    /// Looks up every selected index of `set` against the goal's objectives.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::UnknownObjective` for the first index with no
    /// matching objective.
    pub fn resolve_objectives(&self, id: GoalId, set: &ObjectiveSet) -> Result<Vec<&str>> {
        set.iter()
            .map(|index| {
                self.objective(id, index)
                    .ok_or(WorkPlanError::UnknownObjective { goal_id: id, index })
            })
            .collect()
    }

    pub fn labels(&self) -> &DocumentLabels {
        &self.labels
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn goals(ids: &[GoalId]) -> Vec<Goal> {
        ids.iter()
            .map(|id| Goal::new(*id, format!("Goal {id}"), ""))
            .collect()
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.goals().len(), 6);
        for goal in catalog.goals() {
            assert!(!catalog.objectives(goal.id).is_empty(), "goal {}", goal.id);
            assert!(!goal.emoji.is_empty());
        }
        assert_eq!(
            catalog.objective(1, 0),
            Some("פתיחת כיתה וירטואלית (קלאסרום/טימס) לכל כיתת אם")
        );
        assert_eq!(catalog.labels().headers[0], "מטרה");
    }

    #[test]
    fn test_rejects_duplicate_goal_ids() {
        let err = Catalog::new(goals(&[1, 2, 2]), BTreeMap::new(), DocumentLabels::default())
            .unwrap_err();
        assert!(err.to_string().contains("duplicate goal id 2"));
    }

    #[test]
    fn test_rejects_orphan_objectives() {
        let objectives = BTreeMap::from([(9, vec!["x".to_string()])]);
        let err =
            Catalog::new(goals(&[1, 2, 3]), objectives, DocumentLabels::default()).unwrap_err();
        assert!(err.to_string().contains("unknown goal id 9"));
    }

    #[test]
    fn test_rejects_too_few_goals() {
        let err =
            Catalog::new(goals(&[1, 2]), BTreeMap::new(), DocumentLabels::default()).unwrap_err();
        assert!(matches!(err, WorkPlanError::Configuration { .. }));
    }

    #[test]
    fn test_resolve_objectives_in_index_order() {
        let catalog = Catalog::builtin();
        let resolved = catalog
            .resolve_objectives(4, &ObjectiveSet::from([3, 0]))
            .unwrap();
        assert_eq!(resolved[0], catalog.objectives(4)[0]);
        assert_eq!(resolved[1], catalog.objectives(4)[3]);
    }

    #[test]
    fn test_resolve_unknown_objective() {
        let catalog = Catalog::builtin();
        let err = catalog
            .resolve_objectives(6, &ObjectiveSet::from([0, 42]))
            .unwrap_err();
        assert!(matches!(
            err,
            WorkPlanError::UnknownObjective {
                goal_id: 6,
                index: 42
            }
        ));
    }

    #[test]
    fn test_from_json_with_labels() {
        let json = r#"{
            "goals": [{"id": 7, "text": "A"}, {"id": 8, "text": "B"}, {"id": 9, "text": "C"}],
            "labels": {
                "title": "Annual plan",
                "headers": ["Goal", "Objectives", "Resources", "Partners",
                            "Performance Indicators", "Start Date", "Measurement Date"]
            }
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.labels().title, "Annual plan");
        assert_eq!(catalog.goal(8).map(|g| g.text.as_str()), Some("B"));
        assert!(!catalog.contains(1));
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{"goals": [{"id": 1, "text": "A"}, {"id": 1, "text": "B"}, {"id": 2, "text": "C"}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, WorkPlanError::Serialization { .. }));
        assert!(err.to_string().contains("duplicate goal id 1"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, WorkPlanError::FileSystem { .. }));
    }
}
