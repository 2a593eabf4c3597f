//! Work plan export.
//!
//! Export happens in two steps: [`HtmlExporter`] renders the plan rows into
//! a standalone document, and a [`DocumentSink`] hands that document to the
//! user under [`DEFAULT_FILE_NAME`].
//!
//! ```rust
//! use workplan_core::{catalog::Catalog, export::HtmlExporter, models::PlanRow};
//!
//! let catalog = Catalog::builtin();
//! let rows: Vec<PlanRow> = [1, 3, 4]
//!     .iter()
//!     .filter_map(|id| catalog.goal(*id).cloned())
//!     .map(PlanRow::new)
//!     .collect();
//!
//! let html = HtmlExporter::new(&catalog).render(&rows)?;
//! assert_eq!(html.matches("<tr>").count(), 4);
//! # Ok::<(), workplan_core::WorkPlanError>(())
//! ```

pub mod html;
pub mod sink;

pub use html::{escape_html, HtmlExporter, OBJECTIVE_SEPARATOR};
pub use sink::{sink_for_output, DirectorySink, DocumentSink, FileSink, DEFAULT_FILE_NAME};
