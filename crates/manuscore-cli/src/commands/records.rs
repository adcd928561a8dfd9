//! The `manuscore records` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use manuscore_store::RecordStore;

use super::Context;

pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let store = RecordStore::new(ctx.open_storage()?);
    let records = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records saved yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Title", "Mode", "Type", "Scores", "Saved"]);
    for (i, record) in records.iter().enumerate() {
        let scores = record
            .framework_scores
            .iter()
            .map(|(fw, score)| format!("{fw}={score}"))
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.id),
            Cell::new(&record.paper_title),
            Cell::new(record.mode),
            Cell::new(record.document_type.map(|dt| dt.label()).unwrap_or("-")),
            Cell::new(scores),
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("{table}");

    Ok(())
}
