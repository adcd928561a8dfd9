//! The `manuscore evaluate` command.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context as _, Result};
use comfy_table::Table;

use manuscore_core::catalog;
use manuscore_core::model::{AnswerSet, Record, RecordDraft};
use manuscore_store::{session, RecordStore};

use super::{parse_doc_type, parse_mode, Context};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    ctx: &Context,
    title: String,
    doi: String,
    notes: String,
    mode: &str,
    doc_type: Option<&str>,
    answers: &[String],
    answers_file: Option<&Path>,
    edit: Option<usize>,
) -> Result<()> {
    let storage = ctx.open_storage()?;
    session::require_user(&storage)?;

    let mode = parse_mode(mode)?;
    let document_type = parse_doc_type(doc_type)?;

    let mut collected = AnswerSet::new();
    if let Some(path) = answers_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers file: {}", path.display()))?;
        let parsed: BTreeMap<String, u8> = toml::from_str(&content)
            .with_context(|| format!("failed to parse answers file: {}", path.display()))?;
        for (qid, value) in parsed {
            anyhow::ensure!(
                catalog::question_text(&qid).is_some(),
                "unknown question id in answers file: {qid}"
            );
            collected.insert(qid, value);
        }
    }
    // Flag answers win over file answers.
    for spec in answers {
        let (qid, value) = parse_answer(spec)?;
        collected.insert(qid, value);
    }

    let draft = RecordDraft {
        paper_title: title,
        doi,
        notes,
        mode,
        document_type,
        answers: collected,
    };

    let mut store = RecordStore::new(storage);
    let record = match edit {
        Some(position) => {
            anyhow::ensure!(position >= 1, "record positions are 1-based");
            store.update(position - 1, draft)?
        }
        None => store.create(draft)?,
    };

    print_scores(&record);
    println!("Saved. Manuscript ID: {}", record.id);

    Ok(())
}

fn parse_answer(spec: &str) -> Result<(String, u8)> {
    let (qid, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid --answer '{spec}', expected qN=V"))?;
    let qid = qid.trim();
    anyhow::ensure!(
        catalog::question_text(qid).is_some(),
        "unknown question id: {qid}"
    );
    let value: u8 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid answer value in '{spec}'"))?;
    Ok((qid.to_string(), value))
}

fn print_scores(record: &Record) {
    let mut table = Table::new();
    table.set_header(vec!["Framework", "Score"]);
    for (framework, score) in &record.framework_scores {
        table.add_row(vec![framework.name().to_string(), score.to_string()]);
    }
    println!("{table}");
}
