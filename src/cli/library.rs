use clap::{Args, Subcommand};

use crate::cli::{LibrarySource, OutputFormat};
use crate::core::motif::Pattern;
use crate::library::LibraryError;

#[derive(Args)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub command: LibraryCommands,
}

#[derive(Subcommand)]
pub enum LibraryCommands {
    /// List all motifs with the indices used by `scan --select`
    List {
        #[command(flatten)]
        library: LibrarySource,
    },

    /// Show the motif registered for a pattern
    Show {
        /// Recognition pattern
        #[arg(required = true)]
        pattern: String,

        #[command(flatten)]
        library: LibrarySource,
    },
}

/// Execute library subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded or the pattern is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LibraryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        LibraryCommands::List { library } => {
            let library = library.load(verbose)?;

            match format {
                OutputFormat::Text => {
                    println!("{:<6} {:<10} Label", "Index", "Pattern");
                    println!("{}", "-".repeat(32));
                    for (i, motif) in library.entries().iter().enumerate() {
                        println!("{i:<6} {:<10} {}", motif.pattern.to_string(), motif.label);
                    }
                    println!("\nTotal: {} motifs", library.len());
                }
                OutputFormat::Json => println!("{}", library.to_json()?),
                OutputFormat::Tsv => {
                    println!("index\tpattern\tlabel");
                    for (i, motif) in library.entries().iter().enumerate() {
                        println!("{i}\t{}\t{}", motif.pattern, motif.label);
                    }
                }
            }
        }
        LibraryCommands::Show { pattern, library } => {
            let library = library.load(verbose)?;
            let pattern = Pattern::parse(&pattern).map_err(LibraryError::from)?;
            let index = library
                .position(&pattern)
                .ok_or_else(|| LibraryError::PatternNotFound(pattern.to_string()))?;
            let motif = library.by_index(index)?;

            match format {
                OutputFormat::Text => {
                    println!("Index:   {index}");
                    println!("Pattern: {}", motif.pattern);
                    println!("Label:   {}", motif.label);
                    println!("Complement: {}", motif.complement().pattern);
                }
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "index": index,
                        "pattern": motif.pattern,
                        "label": motif.label,
                        "complement": motif.complement().pattern,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Tsv => {
                    println!("index\tpattern\tlabel\tcomplement");
                    println!(
                        "{index}\t{}\t{}\t{}",
                        motif.pattern,
                        motif.label,
                        motif.complement().pattern
                    );
                }
            }
        }
    }

    Ok(())
}
