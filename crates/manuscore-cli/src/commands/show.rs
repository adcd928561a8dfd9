//! The `manuscore show` command.

use anyhow::Result;
use comfy_table::Table;

use manuscore_core::catalog;
use manuscore_store::RecordStore;

use super::Context;

pub fn execute(ctx: &Context, index: usize) -> Result<()> {
    anyhow::ensure!(index >= 1, "record positions are 1-based");

    let store = RecordStore::new(ctx.open_storage()?);
    let records = store.list()?;
    let record = records.get(index - 1).ok_or_else(|| {
        anyhow::anyhow!(
            "record #{index} does not exist ({} record(s) saved)",
            records.len()
        )
    })?;

    println!("Manuscript ID: {}", record.id);
    println!("Title:         {}", record.paper_title);
    if !record.doi.is_empty() {
        println!("DOI:           {}", record.doi);
    }
    println!("Mode:          {}", record.mode);
    if let Some(document_type) = record.document_type {
        println!("Type:          {}", document_type.label());
    }
    println!("Saved:         {}", record.timestamp.to_rfc3339());
    if !record.notes.is_empty() {
        println!("Notes:         {}", record.notes);
    }

    let mut scores = Table::new();
    scores.set_header(vec!["Framework", "Score"]);
    for (framework, score) in &record.framework_scores {
        scores.add_row(vec![framework.name().to_string(), score.to_string()]);
    }
    println!("{scores}");

    let mut answers = Table::new();
    answers.set_header(vec!["ID", "Question", "Answer"]);
    for (qid, value) in &record.answers {
        answers.add_row(vec![
            qid.clone(),
            catalog::question_text(qid).unwrap_or_default().to_string(),
            value.to_string(),
        ]);
    }
    println!("{answers}");

    Ok(())
}
