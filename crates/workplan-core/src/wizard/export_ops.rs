//! Export operations for the Wizard.

use std::path::PathBuf;

use log::info;

use super::Wizard;
use crate::{
    error::Result,
    export::{DocumentSink, HtmlExporter, DEFAULT_FILE_NAME},
};

impl Wizard {
    /// Renders the current rows as a standalone HTML document.
    ///
    /// The document is a snapshot: later edits do not affect it, and the
    /// wizard state is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::EmptyPlan` before [`Wizard::advance`] and
    /// `WorkPlanError::UnknownObjective` for objective indices missing from
    /// the catalog.
    pub fn export(&self) -> Result<String> {
        HtmlExporter::new(&self.catalog).render(&self.rows)
    }

    /// Renders the plan and hands it to `sink` as `work-plan.html`.
    pub fn export_to(&self, sink: &mut dyn DocumentSink) -> Result<PathBuf> {
        let html = self.export()?;
        let path = sink.deliver(DEFAULT_FILE_NAME, &html)?;
        info!("Exported work plan with {} rows", self.rows.len());
        Ok(path)
    }
}
