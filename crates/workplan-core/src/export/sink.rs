//! Destinations for an exported document.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{IoResultExt, Result};

/// Fixed name of the exported file.
pub const DEFAULT_FILE_NAME: &str = "work-plan.html";

/// Receives a finished document and makes it available to the user.
pub trait DocumentSink {
    /// Delivers `contents` under `file_name`, returning where it ended up.
    fn deliver(&mut self, file_name: &str, contents: &str) -> Result<PathBuf>;
}

/// Saves documents into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.directory).with_path(&self.directory)?;

        let path = self.directory.join(file_name);
        std::fs::write(&path, contents).with_path(&path)?;
        info!("Saved {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Saves documents to one explicit path, ignoring the suggested file name.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSink for FileSink {
    fn deliver(&mut self, _file_name: &str, contents: &str) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }

        std::fs::write(&self.path, contents).with_path(&self.path)?;
        info!("Saved {} bytes to {}", contents.len(), self.path.display());
        Ok(self.path.clone())
    }
}

/// Picks a sink for a user-supplied output location.
///
/// An existing directory receives [`DEFAULT_FILE_NAME`]; anything else is
/// treated as the file path. `None` means the current directory.
pub fn sink_for_output(output: Option<&Path>) -> Box<dyn DocumentSink> {
    match output {
        Some(path) if path.is_dir() => Box::new(DirectorySink::new(path)),
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(DirectorySink::new(".")),
    }
}
