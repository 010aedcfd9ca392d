use clap::Args;
use std::fmt::Write as _;

use crate::cli::{LibrarySource, OutputFormat, SequenceSource};
use crate::core::motif::{Motif, Pattern};
use crate::library::{LibraryError, MotifLibrary, MotifSelection};
use crate::scanning::{PositionReport, StrandScan};

#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SequenceSource,

    #[command(flatten)]
    pub library: LibrarySource,

    /// Select a library row by index (see `library list`); repeating an index deselects it
    #[arg(short, long = "select", value_name = "INDEX")]
    pub select: Vec<usize>,

    /// Select a library motif by its pattern
    #[arg(short, long = "motif", value_name = "PATTERN")]
    pub motifs: Vec<String>,
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if the library, selection, or sequence is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let library = args.library.load(verbose)?;
    let selection = build_selection(&library, &args.select, &args.motifs)?;

    // Owned snapshot: nothing below reads the library again
    let motifs = selection.resolve(&library)?;

    let (name, sequence) = args.source.load()?;

    if verbose {
        eprintln!(
            "Scanning {} bases{} for {} selected motifs",
            sequence.len(),
            name.as_deref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default(),
            motifs.len()
        );
    }

    let result = StrandScan::run(&sequence, &motifs);

    match format {
        OutputFormat::Text => print!("{}", render_text(&result)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print!("{}", render_tsv(&result)?),
    }

    Ok(())
}

/// Build the selection from `--select` indices and `--motif` patterns.
///
/// With neither given, every library motif is selected.
fn build_selection(
    library: &MotifLibrary,
    indices: &[usize],
    patterns: &[String],
) -> anyhow::Result<MotifSelection> {
    if indices.is_empty() && patterns.is_empty() {
        return Ok(MotifSelection::all(library));
    }

    let mut selection = MotifSelection::new();
    for &index in indices {
        selection.toggle(index);
    }

    for text in patterns {
        let pattern = Pattern::parse(text).map_err(LibraryError::from)?;
        let index = library
            .position(&pattern)
            .ok_or_else(|| LibraryError::PatternNotFound(pattern.to_string()))?;
        selection.select(index);
    }

    Ok(selection)
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_strand(
    out: &mut String,
    heading: &str,
    sequence: &str,
    report: &PositionReport,
) -> std::fmt::Result {
    writeln!(out, "Here is the {heading} DNA sequence {sequence}.")?;
    if report.is_empty() {
        writeln!(out, "No restriction sites were found in this sequence.")?;
        return Ok(());
    }

    writeln!(out, "In this sequence there are the following restrictions:")?;
    for hits in report {
        let Motif { pattern, label } = &hits.motif;
        writeln!(
            out,
            "  {pattern} also named as {label} found at positions {}.",
            format_positions(&hits.positions)
        )?;
    }
    Ok(())
}

/// Human-readable report: one block per strand
///
/// # Errors
///
/// Returns `std::fmt::Error` if writing to the buffer fails.
pub fn render_text(result: &StrandScan) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    render_strand(
        &mut out,
        "5'-3'",
        &result.sense_sequence.to_string(),
        &result.sense,
    )?;
    out.push('\n');
    render_strand(
        &mut out,
        "3'-5'",
        &result.antisense_sequence.to_string(),
        &result.antisense,
    )?;
    Ok(out)
}

/// One row per (strand, motif)
///
/// # Errors
///
/// Returns `std::fmt::Error` if writing to the buffer fails.
pub fn render_tsv(result: &StrandScan) -> Result<String, std::fmt::Error> {
    let mut out = String::from("strand\tpattern\tlabel\tpositions\n");
    for (strand, report) in [("sense", &result.sense), ("antisense", &result.antisense)] {
        for hits in report {
            let positions = hits
                .positions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(
                out,
                "{strand}\t{}\t{}\t{positions}",
                hits.motif.pattern, hits.motif.label
            )?;
        }
    }
    Ok(out)
}
