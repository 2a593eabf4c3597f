//! Error types for the work plan library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{GoalId, Stage};

/// Comprehensive error type for all work plan operations.
#[derive(Error, Debug)]
pub enum WorkPlanError {
    /// Goal id is not part of the catalog
    #[error("Goal with ID {id} not found in the catalog")]
    GoalNotFound { id: GoalId },
    /// Advancing requires a complete selection
    #[error("Exactly 3 goals must be selected before continuing ({selected} selected)")]
    SelectionIncomplete { selected: usize },
    /// Operation issued in the wrong wizard stage
    #[error("Operation requires the {expected} stage, but the wizard is {actual}")]
    WrongStage { expected: Stage, actual: Stage },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Objective index that does not resolve against the goal's objectives
    #[error("Goal {goal_id} has no objective at index {index}")]
    UnknownObjective { goal_id: GoalId, index: usize },
    /// Export requested with no plan rows
    #[error("Cannot export an empty work plan")]
    EmptyPlan,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WorkPlanError {
        WorkPlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WorkPlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }
}

/// Extension trait for attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`WorkPlanError::FileSystem`] for `path`.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| WorkPlanError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for work plan operations
pub type Result<T> = std::result::Result<T, WorkPlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WorkPlanError::invalid_input("startDate").with_reason("not a date");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'startDate': not a date"
        );
    }

    #[test]
    fn test_wrong_stage_message() {
        let err = WorkPlanError::WrongStage {
            expected: Stage::Selecting,
            actual: Stage::Editing,
        };
        assert_eq!(
            err.to_string(),
            "Operation requires the selecting stage, but the wizard is editing"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_path("/tmp/plan.html").unwrap_err();
        assert!(matches!(err, WorkPlanError::FileSystem { ref path, .. } if path.ends_with("plan.html")));
    }
}
