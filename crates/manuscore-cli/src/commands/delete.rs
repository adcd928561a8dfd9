//! The `manuscore delete` command.
//!
//! Confirmation lives here; the record store performs none.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use manuscore_store::{session, RecordStore};

use super::Context;

pub fn execute(ctx: &Context, index: usize, yes: bool) -> Result<()> {
    let storage = ctx.open_storage()?;
    session::require_user(&storage)?;

    anyhow::ensure!(index >= 1, "record positions are 1-based");

    if !yes && !confirm(index)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = RecordStore::new(storage);
    let removed = store.delete(index - 1)?;
    println!("Deleted \"{}\" (id {}).", removed.paper_title, removed.id);

    Ok(())
}

fn confirm(index: usize) -> Result<bool> {
    print!("Delete manuscript #{index}? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
