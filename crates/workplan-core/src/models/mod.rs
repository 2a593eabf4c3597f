//! Data models for goals, selections and plan rows.
//!
//! This module contains the core domain models of the work plan wizard.
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! ## Model Overview
//!
//! - [`Goal`]: immutable catalog entry (`id`, `text`, `emoji`)
//! - [`Selection`]: ordered set of at most [`MAX_SELECTED`] goal ids
//! - [`PlanRow`]: editable record created per selected goal
//! - [`ObjectiveSet`]: positional objective indices held by a row
//! - [`PlanField`]: the free-text and date fields a row accepts edits for
//! - [`Stage`]: `selecting` or `editing`
//!
//! # Examples
//!
//! ```rust
//! use workplan_core::models::{Goal, PlanField, PlanRow};
//!
//! let row = PlanRow::new(Goal::new(4, "Information security", "🔒"));
//! assert!(row.is_blank());
//! assert_eq!(row.field_text(PlanField::Resources), "");
//! ```

pub mod field;
pub mod goal;
pub mod objectives;
pub mod plan_row;
pub mod selection;
pub mod stage;

#[cfg(test)]
mod tests;

pub use field::PlanField;
pub use goal::{Goal, GoalId};
pub use objectives::ObjectiveSet;
pub use plan_row::PlanRow;
pub use selection::{Selection, Toggle, MAX_SELECTED};
pub use stage::Stage;
