//! paste-quote CLI
//!
//! Formats a pasted e-reader highlight for a Markdown note and manages the
//! note's front-matter bibliography.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use paste_quote_notes::{
    append_references, load_reference_file, paste_quote, read_references, write_references,
    Settings,
};

/// Paste Kindle highlights into Markdown notes with resolved citations
#[derive(Parser, Debug)]
#[command(name = "paste-quote")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Settings file (defaults to <config dir>/paste-quote/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a highlight for insertion into a note
    Paste {
        /// Note whose front matter holds the bibliography
        #[arg(long)]
        doc: PathBuf,

        /// Read the highlight from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print the parsed quote and match as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the note's references
    Refs {
        #[arg(long)]
        doc: PathBuf,
    },

    /// Append references from a CSL-JSON or YAML file, skipping known ids
    AddRefs {
        #[arg(long)]
        doc: PathBuf,

        /// File with a list of references
        #[arg(long)]
        from: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };

    match cli.command {
        Commands::Paste { doc, input, json } => {
            let raw = read_input(input.as_deref())?;
            let document = std::fs::read_to_string(&doc)?;
            let outcome = paste_quote(&raw, &document, &settings)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.text);
            }
        }
        Commands::Refs { doc } => {
            let document = std::fs::read_to_string(&doc)?;
            for reference in read_references(&document, &settings.references_key)? {
                println!("{}: {}", reference.id, reference.display_summary());
            }
        }
        Commands::AddRefs { doc, from } => {
            let document = std::fs::read_to_string(&doc)?;
            let mut references = read_references(&document, &settings.references_key)?;
            let incoming = load_reference_file(&from)?;
            let report = append_references(&mut references, incoming);
            if report.added > 0 {
                let updated = write_references(&document, &settings.references_key, &references)?;
                std::fs::write(&doc, updated)?;
            }
            println!("added {}, skipped {}", report.added, report.skipped);
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
