//! Core library for building an annual technology work plan.
//!
//! A coordinator picks exactly three goals from a fixed [`Catalog`], fills in
//! objectives, resources, partners, performance indicators and dates for
//! each, and exports the result as a standalone HTML table.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): immutable goals, objectives and document
//!   labels, built in or loaded from JSON
//! - **Wizard** ([`wizard`]): the explicit state container; its methods are
//!   the only mutation entry points
//! - **Export** ([`export`]): pure HTML rendering plus [`DocumentSink`]s that
//!   save the file
//! - **Display** ([`display`]): markdown wrappers for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use workplan_core::{export::DirectorySink, PlanField, WizardBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().build()?;
//!
//! for goal_id in [1, 3, 4] {
//!     wizard.toggle_goal(goal_id)?;
//! }
//! wizard.advance()?;
//!
//! wizard.set_field(1, PlanField::Resources, "Projector")?;
//! wizard.set_objectives(3, [0].into());
//! wizard.set_field(4, PlanField::Partners, "IT dept")?;
//!
//! let path = wizard.export_to(&mut DirectorySink::new("plans"))?;
//! println!("Saved {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, DocumentLabels};
pub use display::{
    ExportResult, GoalMenu, ObjectiveList, OperationStatus, PlanRows, ToggleResult, UpdateResult,
};
pub use error::{Result, WorkPlanError};
pub use export::{DocumentSink, HtmlExporter, DEFAULT_FILE_NAME};
pub use models::{
    Goal, GoalId, ObjectiveSet, PlanField, PlanRow, Selection, Stage, Toggle, MAX_SELECTED,
};
pub use params::{GoalRef, PlanDraft, RowDraft, SetField, SetObjectives};
pub use wizard::{Wizard, WizardBuilder};
