//! The static citation artifacts.
//!
//! Both strings are fixed content, independent of record data, and must be
//! reproducible exactly.

use std::path::Path;

use anyhow::{Context, Result};

/// The bibliographic citation for the tool itself.
pub const CITATION: &str = "Mishra, P. K. & Trenz, O. (2025). Manuscore: A Multi-framework Research Paper Evaluation Tool. Faculty of Business and Economics, Mendel University in Brno.";

/// The BibTeX entry for the tool itself.
pub const BIBTEX: &str = "@misc{manuscore2025,\n  author = {Mishra, Pawan Kumar and Trenz, Old\u{159}ich},\n  title = {Manuscore: A Multi-framework Research Paper Evaluation Tool},\n  year = {2025},\n  institution = {Faculty of Business and Economics, Mendel University in Brno},\n  note = {Available at https://manuscore.netlify.app}\n}";

/// Write the BibTeX entry as a bibliography document.
pub fn write_bibtex(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, BIBTEX)
        .with_context(|| format!("failed to write BibTeX to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_is_the_exact_string() {
        assert!(CITATION.starts_with("Mishra, P. K. & Trenz, O. (2025)."));
        assert!(CITATION.ends_with("Mendel University in Brno."));
    }

    #[test]
    fn bibtex_is_a_misc_entry() {
        assert!(BIBTEX.starts_with("@misc{manuscore2025,"));
        assert!(BIBTEX.contains("author = {Mishra, Pawan Kumar and Trenz, Old\u{159}ich}"));
        assert!(BIBTEX.contains("note = {Available at https://manuscore.netlify.app}"));
        assert!(BIBTEX.ends_with('}'));
    }

    #[test]
    fn write_bibtex_reproduces_the_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manuscore_citation.bib");
        write_bibtex(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BIBTEX);
    }
}
