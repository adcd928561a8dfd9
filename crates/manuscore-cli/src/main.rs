//! manuscore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "manuscore",
    version,
    about = "Multi-framework research manuscript evaluation"
)]
struct Cli {
    /// Data directory (overrides config and MANUSCORE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Establish the local user marker
    Login {
        /// User name (any non-empty string; no password is involved)
        name: String,
    },

    /// Clear the local user marker
    Logout,

    /// Show the current user marker
    Whoami,

    /// Show the questions an evaluation would present
    Questions {
        /// Evaluation mode: "full" or "auto"
        #[arg(long, default_value = "full")]
        mode: String,

        /// Document type (required in auto mode)
        #[arg(long)]
        doc_type: Option<String>,
    },

    /// Score a manuscript and save the record
    Evaluate {
        /// Manuscript title
        #[arg(long)]
        title: String,

        /// Digital object identifier
        #[arg(long, default_value = "")]
        doi: String,

        /// Evaluator notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Evaluation mode: "full" or "auto"
        #[arg(long, default_value = "full")]
        mode: String,

        /// Document type (required in auto mode)
        #[arg(long)]
        doc_type: Option<String>,

        /// Answer in the form qN=V with V in 1..=5 (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// TOML file of answers, one `qN = V` per line
        #[arg(long)]
        answers_file: Option<PathBuf>,

        /// Edit the record at this 1-based position instead of creating
        #[arg(long)]
        edit: Option<usize>,
    },

    /// List saved records
    Records {
        /// Emit the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one record in detail
    Show {
        /// 1-based record position
        #[arg(long)]
        index: usize,
    },

    /// Delete a record permanently
    Delete {
        /// 1-based record position
        #[arg(long)]
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export all records as CSV
    Export {
        /// Output file path
        #[arg(long, default_value = "manuscore_all_records.csv")]
        output: PathBuf,
    },

    /// Print the tool citation, or write the BibTeX entry
    Cite {
        /// Emit the BibTeX entry instead of the plain citation
        #[arg(long)]
        bibtex: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("manuscore_core=info".parse().unwrap())
                .add_directive("manuscore_store=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context {
        data_dir: cli.data_dir,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Login { name } => commands::session::login(&ctx, &name),
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Questions { mode, doc_type } => {
            commands::questions::execute(&mode, doc_type.as_deref())
        }
        Commands::Evaluate {
            title,
            doi,
            notes,
            mode,
            doc_type,
            answers,
            answers_file,
            edit,
        } => commands::evaluate::execute(
            &ctx,
            title,
            doi,
            notes,
            &mode,
            doc_type.as_deref(),
            &answers,
            answers_file.as_deref(),
            edit,
        ),
        Commands::Records { json } => commands::records::execute(&ctx, json),
        Commands::Show { index } => commands::show::execute(&ctx, index),
        Commands::Delete { index, yes } => commands::delete::execute(&ctx, index, yes),
        Commands::Export { output } => commands::export::execute(&ctx, &output),
        Commands::Cite { bibtex, output } => commands::cite::execute(bibtex, output.as_deref()),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
