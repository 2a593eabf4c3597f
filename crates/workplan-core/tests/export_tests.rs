mod common;

use common::{create_test_catalog, create_test_wizard};
use tempfile::TempDir;
use workplan_core::{
    export::{sink_for_output, DirectorySink},
    Catalog, HtmlExporter, ObjectiveSet, PlanField, WorkPlanError,
};

fn exported_wizard() -> (TempDir, workplan_core::Wizard) {
    let (temp_dir, mut wizard) = create_test_wizard();
    for goal_id in [2, 1, 3] {
        wizard.toggle_goal(goal_id).expect("Failed to toggle goal");
    }
    wizard.advance().expect("Failed to advance");
    (temp_dir, wizard)
}

#[test]
fn test_document_structure() {
    let (_temp_dir, wizard) = exported_wizard();
    let html = wizard.export().expect("Failed to export");

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"he\" dir=\"rtl\">\n"));
    assert!(html.contains("<meta charset=\"utf-8\">"));
    assert!(html.contains("<title>Technology Work Plan</title>"));
    assert!(html.contains("<h1>Technology Work Plan</h1>"));
    assert!(html.contains("<th>Indicators</th>"));
    assert_eq!(html.matches("<th>").count(), 7);
    assert_eq!(html.matches("<tr>").count(), 4);
    assert_eq!(html.matches("<td>").count(), 21);
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_user_text_is_escaped() {
    let (_temp_dir, mut wizard) = exported_wizard();
    wizard
        .set_field(1, PlanField::Partners, "<script>alert('x')</script>")
        .expect("Failed to set field");

    let html = wizard.export().expect("Failed to export");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("<td>Robotics &amp; &lt;making&gt;</td>"));
}

#[test]
fn test_objectives_follow_index_order() {
    let (_temp_dir, mut wizard) = exported_wizard();
    wizard.set_objectives(3, ObjectiveSet::from([2, 0]));

    let html = wizard.export().expect("Failed to export");
    assert!(html.contains("<td>Daily attendance, Parent messages</td>"));
}

#[test]
fn test_same_rows_render_identically_across_catalog_loads() {
    let (_dir, path) = create_test_catalog();
    let first = Catalog::load(&path).expect("Failed to load catalog");
    let second = Catalog::load(&path).expect("Failed to load catalog");

    let (_temp_dir, wizard) = exported_wizard();
    let a = HtmlExporter::new(&first).render(wizard.rows()).expect("Failed to render");
    let b = HtmlExporter::new(&second).render(wizard.rows()).expect("Failed to render");
    assert_eq!(a, b);
}

#[test]
fn test_export_to_nested_directory() {
    let (temp_dir, wizard) = exported_wizard();
    let target = temp_dir.path().join("plans").join("2025");

    let path = wizard
        .export_to(&mut DirectorySink::new(&target))
        .expect("Failed to export");
    assert_eq!(path, target.join("work-plan.html"));
    assert!(path.exists());
}

#[test]
fn test_sink_for_explicit_file() {
    let (temp_dir, wizard) = exported_wizard();
    let target = temp_dir.path().join("custom.html");

    let mut sink = sink_for_output(Some(&target));
    let path = wizard.export_to(sink.as_mut()).expect("Failed to export");
    assert_eq!(path, target);
    assert_eq!(
        std::fs::read_to_string(&target).expect("Failed to read export"),
        wizard.export().expect("Failed to export")
    );
}

#[test]
fn test_unwritable_destination_reports_path() {
    let (temp_dir, wizard) = exported_wizard();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("Failed to write file");

    let err = wizard
        .export_to(&mut DirectorySink::new(blocker.join("nested")))
        .unwrap_err();
    assert!(matches!(err, WorkPlanError::FileSystem { .. }));
}
