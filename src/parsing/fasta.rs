//! Parser for single-record FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::input::{finish_input, ParseError, SequenceInput};

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Check if text starts with a FASTA header line
pub fn looks_like_fasta(content: &str) -> bool {
    content.trim_start().starts_with('>')
}

/// Parse a FASTA file holding exactly one record.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta` if parsing
/// fails, `ParseError::MultipleRecords` if more than one record is present,
/// `ParseError::InvalidFormat` if no record is found, or `ParseError::SequenceTooLong`
/// if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<SequenceInput, ParseError> {
    let file = std::fs::File::open(path)?;

    // bgzip files are a chain of gzip members; every member must be decoded
    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse FASTA text holding exactly one record.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_text(content: &str) -> Result<SequenceInput, ParseError> {
    let reader = BufReader::new(content.trim_start().as_bytes());
    parse_fasta_reader(&mut fasta::io::Reader::new(reader))
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<SequenceInput, ParseError> {
    let mut records = reader.records();

    let record = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequence records found".to_string()))?
        .map_err(|e| ParseError::Fasta(format!("Failed to parse FASTA record: {e}")))?;

    // A single sequence per scan; batches are not supported
    if records.next().is_some() {
        return Err(ParseError::MultipleRecords);
    }

    let name = String::from_utf8_lossy(record.name()).to_string();
    let text = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

    finish_input(Some(name), text)
}
