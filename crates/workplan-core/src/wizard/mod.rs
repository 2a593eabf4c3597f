//! The work plan wizard state container.
//!
//! [`Wizard`] holds everything that changes while a coordinator builds a
//! plan: the current [`Stage`], the goal [`Selection`], and the plan rows.
//! Its methods are the only way to change that state; presentation layers
//! read it through the accessors and call the operations below.
//!
//! # Lifecycle
//!
//! ```text
//! ┌─────────────────┐  advance()  ┌─────────────────┐
//! │    Selecting    │────────────▶│     Editing     │◀─┐
//! │  toggle_goal()  │             │ set_objectives()│  │ export()
//! └─────────────────┘             │ set_field()     │──┘
//!                                 └─────────────────┘
//! ```
//!
//! The transition is one-way and exporting never leaves the editing stage.
//!
//! ## Submodules
//!
//! - [`builder`]: creates a [`Wizard`] with a resolved catalog
//! - [`selection_ops`]: goal toggling and advancing
//! - [`row_ops`]: field-level edits addressed by goal id
//! - [`export_ops`]: rendering and saving the document
//! - [`handlers`]: parameter-based operations returning display wrappers
//!
//! # Usage
//!
//! ```rust
//! use workplan_core::{Catalog, PlanField, Wizard};
//!
//! let mut wizard = Wizard::new(Catalog::builtin());
//! for id in [1, 3, 4] {
//!     wizard.toggle_goal(id)?;
//! }
//! wizard.advance()?;
//!
//! wizard.set_field(1, PlanField::Resources, "Projector")?;
//! wizard.set_objectives(3, [0].into());
//!
//! let html = wizard.export()?;
//! assert!(html.contains("Projector"));
//! # Ok::<(), workplan_core::WorkPlanError>(())
//! ```

pub mod builder;
pub mod export_ops;
pub mod handlers;
pub mod row_ops;
pub mod selection_ops;


pub use builder::WizardBuilder;

use crate::{
    catalog::Catalog,
    error::{Result, WorkPlanError},
    models::{PlanRow, Selection, Stage},
};

/// Explicit state of one plan-building session.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Catalog,
    stage: Stage,
    selection: Selection,
    rows: Vec<PlanRow>,
}

impl Wizard {
    /// Starts a session in the selecting stage.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            stage: Stage::Selecting,
            selection: Selection::new(),
            rows: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Plan rows in selection order; empty until [`Wizard::advance`].
    pub fn rows(&self) -> &[PlanRow] {
        &self.rows
    }

    fn require_stage(&self, expected: Stage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(WorkPlanError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }
}
