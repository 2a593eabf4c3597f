//! Standalone HTML rendering of a work plan.

use std::fmt::Write;

use log::debug;

use crate::{
    catalog::Catalog,
    error::{Result, WorkPlanError},
    models::{PlanField, PlanRow},
};

/// Separator between objectives sharing one table cell.
pub const OBJECTIVE_SEPARATOR: &str = ", ";

const STYLE: [&str; 3] = [
    "body { font-family: Arial, sans-serif; direction: rtl; }",
    "table { border-collapse: collapse; width: 100%; }",
    "th, td { border: 1px solid black; padding: 8px; text-align: right; }",
];

/// Renders plan rows into a self-contained right-to-left HTML table.
///
/// Rendering is a pure function of the rows and the catalog: the same input
/// always yields byte-identical output.
pub struct HtmlExporter<'a> {
    catalog: &'a Catalog,
}

impl<'a> HtmlExporter<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Renders `rows` in order, one table row each.
    ///
    /// # Errors
    ///
    /// Returns `WorkPlanError::EmptyPlan` when `rows` is empty and
    /// `WorkPlanError::UnknownObjective` when an objective index has no
    /// catalog entry.
    pub fn render(&self, rows: &[PlanRow]) -> Result<String> {
        if rows.is_empty() {
            return Err(WorkPlanError::EmptyPlan);
        }

        let labels = self.catalog.labels();
        let title = escape_html(&labels.title);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"he\" dir=\"rtl\">\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        push_line(&mut html, 2, &format!("<title>{title}</title>"));
        html.push_str("  <style>\n");
        for rule in STYLE {
            push_line(&mut html, 4, rule);
        }
        html.push_str("  </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        push_line(&mut html, 2, &format!("<h1>{title}</h1>"));
        html.push_str("  <table>\n");

        html.push_str("    <tr>\n");
        for header in &labels.headers {
            push_line(&mut html, 6, &format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("    </tr>\n");

        for row in rows {
            self.render_row(&mut html, row)?;
        }

        html.push_str("  </table>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");

        debug!("Rendered work plan with {} rows ({} bytes)", rows.len(), html.len());
        Ok(html)
    }

    fn render_row(&self, html: &mut String, row: &PlanRow) -> Result<()> {
        let objectives = self
            .catalog
            .resolve_objectives(row.goal_id(), &row.objectives)?
            .join(OBJECTIVE_SEPARATOR);

        let cells = [
            row.goal.text.clone(),
            objectives,
            row.field_text(PlanField::Resources),
            row.field_text(PlanField::Partners),
            row.field_text(PlanField::PerformanceIndicators),
            row.field_text(PlanField::StartDate),
            row.field_text(PlanField::MeasurementDate),
        ];

        html.push_str("    <tr>\n");
        for cell in &cells {
            push_line(html, 6, &format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("    </tr>\n");
        Ok(())
    }
}

fn push_line(html: &mut String, indent: usize, line: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(html, "{:indent$}{line}", "");
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectiveSet;

    fn row(catalog: &Catalog, id: u32) -> PlanRow {
        PlanRow::new(catalog.goal(id).cloned().unwrap())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> isn't"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; isn&#39;t"
        );
        assert_eq!(escape_html("מקרן"), "מקרן");
    }

    #[test]
    fn test_render_empty_plan_fails() {
        let catalog = Catalog::builtin();
        let err = HtmlExporter::new(&catalog).render(&[]).unwrap_err();
        assert!(matches!(err, WorkPlanError::EmptyPlan));
    }

    #[test]
    fn test_render_document_structure() {
        let catalog = Catalog::builtin();
        let rows = vec![row(&catalog, 1), row(&catalog, 2)];
        let html = HtmlExporter::new(&catalog).render(&rows).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("direction: rtl;"));
        assert!(html.contains("border: 1px solid black;"));
        assert!(html.contains(&format!("<title>{}</title>", catalog.labels().title)));
        assert!(html.contains(&format!("<h1>{}</h1>", catalog.labels().title)));
        assert_eq!(html.matches("<table>").count(), 1);
        assert_eq!(html.matches("<th>").count(), 7);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 14);
        assert_eq!(html.matches("<td></td>").count(), 12);
    }

    #[test]
    fn test_style_rules_share_indentation() {
        let catalog = Catalog::builtin();
        let html = HtmlExporter::new(&catalog)
            .render(&[row(&catalog, 1)])
            .unwrap();

        let start = html.find("  <style>\n").unwrap() + "  <style>\n".len();
        let end = html.find("  </style>").unwrap();
        let rules: Vec<&str> = html[start..end].lines().collect();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], "    body { font-family: Arial, sans-serif; direction: rtl; }");
        assert!(rules.iter().all(|line| line.starts_with("    ") && !line.starts_with("     ")));
    }

    #[test]
    fn test_render_joins_objectives() {
        let catalog = Catalog::builtin();
        let mut first = row(&catalog, 5);
        first.objectives = ObjectiveSet::from([2, 0]);

        let html = HtmlExporter::new(&catalog).render(&[first]).unwrap();
        let expected = format!(
            "<td>{}, {}</td>",
            catalog.objectives(5)[0],
            catalog.objectives(5)[2]
        );
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_render_unknown_objective_fails() {
        let catalog = Catalog::builtin();
        let mut first = row(&catalog, 6);
        first.objectives = ObjectiveSet::from([99]);

        let err = HtmlExporter::new(&catalog).render(&[first]).unwrap_err();
        assert!(matches!(
            err,
            WorkPlanError::UnknownObjective {
                goal_id: 6,
                index: 99
            }
        ));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let catalog = Catalog::builtin();
        let mut first = row(&catalog, 3);
        first
            .set_field(PlanField::Resources, "<script>alert(1)</script>")
            .unwrap();

        let html = HtmlExporter::new(&catalog).render(&[first]).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = Catalog::builtin();
        let mut first = row(&catalog, 4);
        first.set_field(PlanField::StartDate, "2024-09-01").unwrap();
        let rows = vec![first, row(&catalog, 1)];

        let exporter = HtmlExporter::new(&catalog);
        assert_eq!(exporter.render(&rows).unwrap(), exporter.render(&rows).unwrap());
        assert!(exporter.render(&rows).unwrap().contains("<td>2024-09-01</td>"));
    }
}
