//! CSV projection of the record collection.
//!
//! The column set is the fixed base columns plus the union, across all
//! records, of every question id ever answered and every framework ever
//! scored, both sorted lexicographically so the layout is deterministic.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;

use manuscore_core::model::Record;

/// Base columns present in every export, in order.
const BASE_COLUMNS: [&str; 7] = [
    "id",
    "paperTitle",
    "doi",
    "notes",
    "mode",
    "documentType",
    "timestamp",
];

/// A flattened, tabular view of a record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flatten records into a header row and one data row per record. Cells
/// with no value for a record are empty strings.
pub fn to_table(records: &[Record]) -> Table {
    let mut question_columns = BTreeSet::new();
    let mut framework_columns = BTreeSet::new();
    for record in records {
        question_columns.extend(record.answers.keys().cloned());
        framework_columns.extend(record.framework_scores.keys().map(|fw| fw.name().to_string()));
    }

    let mut header: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.extend(question_columns.iter().cloned());
    header.extend(framework_columns.iter().cloned());

    let rows = records
        .iter()
        .map(|record| {
            let mut row = vec![
                record.id.to_string(),
                record.paper_title.clone(),
                record.doi.clone(),
                record.notes.clone(),
                record.mode.to_string(),
                record
                    .document_type
                    .map(|dt| dt.label().to_string())
                    .unwrap_or_default(),
                record
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ];
            for qid in &question_columns {
                row.push(
                    record
                        .answers
                        .get(qid)
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
            for name in &framework_columns {
                row.push(
                    record
                        .framework_scores
                        .iter()
                        .find(|(fw, _)| fw.name() == name.as_str())
                        .map(|(_, score)| score.to_string())
                        .unwrap_or_default(),
                );
            }
            row
        })
        .collect();

    Table { header, rows }
}

/// Render a table as CSV: every field quote-wrapped, internal quotes
/// doubled, LF line endings, trailing newline.
pub fn to_csv(table: &Table) -> String {
    let mut out = String::new();
    render_row(&mut out, &table.header);
    for row in &table.rows {
        render_row(&mut out, row);
    }
    out
}

/// Project records straight to a CSV file.
pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    let csv = to_csv(&to_table(records));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(())
}

fn render_row(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    }
    out.push('\n');
}
