//! The `manuscore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("manuscore.toml").exists() {
        println!("manuscore.toml already exists, skipping.");
    } else {
        std::fs::write("manuscore.toml", SAMPLE_CONFIG)?;
        println!("Created manuscore.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: manuscore login <your-name>");
    println!("  2. Run: manuscore questions --mode auto --doc-type \"Case Report\"");
    println!("  3. Run: manuscore evaluate --title \"...\" --mode auto --doc-type \"Case Report\" --answer q1=5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# manuscore configuration

# Directory the record and session blobs are stored in.
# Can be overridden with --data-dir or MANUSCORE_DATA_DIR.
data_dir = "./manuscore-data"
"#;
