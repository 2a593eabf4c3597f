use std::path::PathBuf;

use tempfile::TempDir;
use workplan_core::{Wizard, WizardBuilder};

pub const TEST_CATALOG: &str = r#"{
    "goals": [
        {"id": 1, "text": "Cloud classrooms", "emoji": "☁️"},
        {"id": 2, "text": "Robotics & <making>"},
        {"id": 3, "text": "Pedagogic management"},
        {"id": 4, "text": "Information security"}
    ],
    "objectives": {
        "1": ["Open a virtual class", "Train the staff"],
        "3": ["Daily attendance", "Monthly grades", "Parent messages"]
    },
    "labels": {
        "title": "Technology Work Plan",
        "headers": ["Goal", "Objectives", "Resources", "Partners", "Indicators", "Start", "Measured"]
    }
}"#;

/// Writes the test catalog into a fresh temporary directory.
pub fn create_test_catalog() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, TEST_CATALOG).expect("Failed to write catalog");
    (temp_dir, path)
}

/// Helper function to create a wizard backed by the test catalog
pub fn create_test_wizard() -> (TempDir, Wizard) {
    let (temp_dir, path) = create_test_catalog();
    let wizard = WizardBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create wizard");
    (temp_dir, wizard)
}
