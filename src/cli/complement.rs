use clap::Args;

use crate::cli::{OutputFormat, SequenceSource};

#[derive(Args)]
pub struct ComplementArgs {
    #[command(flatten)]
    pub source: SequenceSource,
}

/// Execute complement subcommand
///
/// # Errors
///
/// Returns an error if the sequence cannot be read or is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ComplementArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let (_, sequence) = args.source.load()?;
    let complement = sequence.complement();

    match format {
        OutputFormat::Text => println!("{complement}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sequence": sequence,
                "complement": complement,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("sequence\tcomplement");
            println!("{sequence}\t{complement}");
        }
    }

    Ok(())
}
