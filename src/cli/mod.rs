//! Command-line interface for motif-scan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Find restriction sites on both strands of a sequence
//! - **complement**: Print the aligned complement of a sequence
//! - **validate**: Check that a sequence is acceptable for scanning
//! - **library**: List the motif library
//!
//! ## Usage
//!
//! ```text
//! # Scan for every site in the built-in library
//! motif-scan scan GAATCCTCTAGA
//!
//! # Scan a FASTA file for library rows 0 and 2 only
//! motif-scan scan --input insert.fa --select 0 --select 2
//!
//! # Add a site for this run and emit JSON
//! motif-scan scan GAATCCAAGCTT --set AAGCTT=HindIII --format json
//!
//! # Pipe from another tool
//! cat insert.txt | motif-scan scan --input -
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::sequence::{validate as validate_sequence, Sequence};
use crate::library::{LibraryEdit, MotifLibrary};
use crate::parsing;

pub mod complement;
pub mod library;
pub mod scan;
pub mod validate;

#[derive(Parser)]
#[command(name = "motif-scan")]
#[command(version)]
#[command(about = "Find restriction enzyme sites on both strands of a DNA sequence")]
#[command(
    long_about = "motif-scan locates labeled recognition motifs (restriction enzyme sites) in a DNA sequence.\n\nThe sequence and its base-by-base complement are both searched for the selected motifs and for their complements, and every start position is reported:\n- Overlapping occurrences are all reported\n- Positions on both strands use the same 0-based coordinates\n- The motif library can be replaced or edited for a single run"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find motif positions on the sense and antisense strands
    Scan(scan::ScanArgs),

    /// Print the aligned complement of a sequence
    Complement(complement::ComplementArgs),

    /// Check that a sequence is a valid, codon-aligned DNA sequence
    Validate(validate::ValidateArgs),

    /// Inspect the motif library
    Library(library::LibraryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where the sequence comes from: an argument, a file, or stdin
#[derive(clap::Args)]
pub struct SequenceSource {
    /// DNA sequence (uppercase A, C, G, T; length a multiple of 3)
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the sequence from a text or FASTA file ('-' for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl SequenceSource {
    /// Read and validate the sequence. Returns the FASTA record name when there is one.
    pub fn load(&self) -> anyhow::Result<(Option<String>, Sequence)> {
        let (name, text) = match (&self.sequence, &self.input) {
            (Some(text), _) => (None, text.clone()),
            (None, Some(path)) => {
                let input = parsing::read_sequence(path)
                    .with_context(|| format!("Failed to read sequence from {}", path.display()))?;
                (input.name, input.text)
            }
            (None, None) => anyhow::bail!("Provide a sequence or --input"),
        };

        Ok((name, validate_sequence(&text)?))
    }
}

/// Which motif library to use, plus edits applied for this run only
#[derive(clap::Args)]
pub struct LibrarySource {
    /// Path to custom motif library file (JSON)
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Add or relabel a motif for this run (PATTERN=LABEL); PATTERN= deletes it
    #[arg(long = "set", value_name = "PATTERN=LABEL", value_parser = parse_edit)]
    pub edits: Vec<(String, String)>,
}

impl LibrarySource {
    /// Load the library and apply the requested edits in order
    pub fn load(&self, verbose: bool) -> anyhow::Result<MotifLibrary> {
        let mut library = if let Some(path) = &self.library {
            MotifLibrary::load_from_file(path)
                .with_context(|| format!("Failed to load library {}", path.display()))?
        } else {
            MotifLibrary::load_builtin()?
        };

        for (pattern, label) in &self.edits {
            let edit = library
                .insert_or_delete(pattern, label)
                .with_context(|| format!("Cannot apply --set {pattern}={label}"))?;

            if verbose {
                match edit {
                    LibraryEdit::Inserted(motif) => eprintln!("Added {motif}"),
                    LibraryEdit::Relabeled {
                        motif,
                        previous_label,
                    } => eprintln!("Relabeled {motif} (was {previous_label})"),
                    LibraryEdit::Deleted(motif) => eprintln!("Deleted {motif}"),
                }
            }
        }

        Ok(library)
    }
}

fn parse_edit(s: &str) -> Result<(String, String), String> {
    let (pattern, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PATTERN=LABEL, got '{s}'"))?;
    Ok((pattern.trim().to_string(), label.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            parse_edit("AAGCTT=HindIII").unwrap(),
            ("AAGCTT".to_string(), "HindIII".to_string())
        );
        assert_eq!(
            parse_edit("GAATC=").unwrap(),
            ("GAATC".to_string(), String::new())
        );
        assert!(parse_edit("AAGCTT").is_err());
    }

    #[test]
    fn test_library_source_applies_edits() {
        let source = LibrarySource {
            library: None,
            edits: vec![
                ("AAGCTT".to_string(), "HindIII".to_string()),
                ("GAATC".to_string(), String::new()),
            ],
        };
        let library = source.load(false).unwrap();
        assert_eq!(library.len(), 7);
        assert_eq!(library.by_index(6).unwrap().label, "HindIII");
    }

    #[test]
    fn test_library_source_rejects_bad_edit() {
        let source = LibrarySource {
            library: None,
            edits: vec![("TTTT".to_string(), String::new())],
        };
        let err = source.load(false).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }

    #[test]
    fn test_sequence_source_validates() {
        let source = SequenceSource {
            sequence: Some("GAATCC".to_string()),
            input: None,
        };
        let (name, sequence) = source.load().unwrap();
        assert!(name.is_none());
        assert_eq!(sequence.len(), 6);

        let bad = SequenceSource {
            sequence: Some("GAATC".to_string()),
            input: None,
        };
        assert!(bad.load().is_err());
    }
}
