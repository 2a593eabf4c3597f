//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; wrapper types in
//! this module add context (the catalog, the selection, the outcome of an
//! operation) that a model alone does not carry. Everything here produces
//! markdown for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Goal, PlanRow) │───▶│ (GoalMenu, ...) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`GoalMenu`], [`ObjectiveList`], [`PlanRows`]
//! - [`results`]: [`ToggleResult`], [`UpdateResult`], [`ExportResult`]
//! - [`status`]: [`OperationStatus`] one-line feedback
//! - [`datetime`]: [`DisplayDate`] for optional plan dates
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{GoalMenu, ObjectiveList, PlanRows};
pub use datetime::DisplayDate;
pub use results::{ExportResult, ToggleResult, UpdateResult};
pub use status::OperationStatus;
