//! The `manuscore questions` command.

use anyhow::Result;
use comfy_table::Table;

use manuscore_core::{catalog, resolver};

use super::{parse_doc_type, parse_mode};

pub fn execute(mode: &str, doc_type: Option<&str>) -> Result<()> {
    let mode = parse_mode(mode)?;
    let document_type = parse_doc_type(doc_type)?;

    let frameworks = resolver::resolve_frameworks(mode, document_type)?;
    let questions = resolver::resolve_questions(&frameworks);

    if questions.is_empty() {
        println!("No questions available for this selection.");
        return Ok(());
    }

    let names: Vec<&str> = frameworks.iter().map(|fw| fw.name()).collect();
    println!("Frameworks in play: {}", names.join(", "));

    let mut table = Table::new();
    table.set_header(vec!["ID", "Question"]);
    for qid in &questions {
        // Catalog invariant: every resolved id has a prompt.
        let text = catalog::question_text(qid).unwrap_or_default();
        table.add_row(vec![*qid, text]);
    }
    println!("{table}");
    println!("{} question(s)", questions.len());

    Ok(())
}
