//! The `manuscore cite` command.

use std::path::Path;

use anyhow::{Context as _, Result};

use manuscore_export::citation::{write_bibtex, BIBTEX, CITATION};

pub fn execute(bibtex: bool, output: Option<&Path>) -> Result<()> {
    match (bibtex, output) {
        (true, Some(path)) => {
            write_bibtex(path)?;
            println!("BibTeX written to {}", path.display());
        }
        (true, None) => println!("{BIBTEX}"),
        (false, Some(path)) => {
            std::fs::write(path, CITATION)
                .with_context(|| format!("failed to write citation to {}", path.display()))?;
            println!("Citation written to {}", path.display());
        }
        (false, None) => println!("{CITATION}"),
    }
    Ok(())
}
