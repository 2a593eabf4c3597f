//! Builder for creating and configuring Wizard instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Wizard;
use crate::{catalog::Catalog, error::Result};

/// Name of the catalog file looked up in the XDG config directories.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Builder for creating and configuring Wizard instances.
#[derive(Debug, Clone, Default)]
pub struct WizardBuilder {
    catalog_path: Option<PathBuf>,
    catalog: Option<Catalog>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a JSON catalog file to load.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/workplan/catalog.json` when
    /// that file exists and the built-in catalog otherwise.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed catalog, bypassing file lookup.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured wizard.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::FileSystem` if the catalog file cannot be read
    /// and `WorkPlanError::Serialization` if it is not a valid catalog.
    pub fn build(self) -> Result<Wizard> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => {
                info!("Loading catalog from {}", path.display());
                Catalog::load(&path)?
            }
            (None, None) => match Self::default_catalog_path() {
                Some(path) => {
                    info!("Loading catalog from {}", path.display());
                    Catalog::load(&path)?
                }
                None => {
                    debug!("No catalog file configured, using built-in catalog");
                    Catalog::builtin()
                }
            },
        };

        Ok(Wizard::new(catalog))
    }

    /// Returns the user's catalog file following the XDG Base Directory
    /// specification, if one exists.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("workplan").find_config_file(CATALOG_FILE_NAME)
    }
}
