use clap::Args;

use crate::cli::{OutputFormat, SequenceSource};
use crate::utils::validation::CODON_LENGTH;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SequenceSource,
}

/// Execute validate subcommand
///
/// A rejected sequence is reported as an error, so the process exits non-zero.
///
/// # Errors
///
/// Returns an error if the sequence cannot be read or is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let (name, sequence) = args.source.load()?;
    let codons = sequence.len() / CODON_LENGTH;

    match format {
        OutputFormat::Text => {
            let label = name.map(|n| format!("{n}: ")).unwrap_or_default();
            println!(
                "{label}valid DNA sequence of {} bases ({codons} codons)",
                sequence.len()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name,
                "valid": true,
                "length": sequence.len(),
                "codons": codons,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tlength\tcodons");
            println!(
                "{}\t{}\t{codons}",
                name.as_deref().unwrap_or("-"),
                sequence.len()
            );
        }
    }

    Ok(())
}
