//! The `manuscore export` command.

use std::path::Path;

use anyhow::Result;

use manuscore_export::csv::write_csv;
use manuscore_store::RecordStore;

use super::Context;

pub fn execute(ctx: &Context, output: &Path) -> Result<()> {
    let store = RecordStore::new(ctx.open_storage()?);
    let records = store.list()?;

    if records.is_empty() {
        eprintln!("No records to export.");
        return Ok(());
    }

    write_csv(&records, output)?;
    println!("Exported {} record(s) to {}", records.len(), output.display());

    Ok(())
}
