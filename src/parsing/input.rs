use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::parsing::fasta::{is_fasta_file, looks_like_fasta, parse_fasta_file, parse_fasta_text};
use crate::utils::validation::{check_input_size, MAX_SEQUENCE_LENGTH};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("FASTA error: {0}")]
    Fasta(String),

    #[error("Input contains more than one sequence record; only a single sequence can be scanned")]
    MultipleRecords,

    #[error("Input too long: {0} bases exceeds maximum allowed ({MAX_SEQUENCE_LENGTH})")]
    SequenceTooLong(usize),
}

/// Raw sequence text read from a file or stdin, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInput {
    /// Record name, when the input was FASTA
    pub name: Option<String>,

    /// Sequence characters with line breaks and other whitespace removed
    pub text: String,
}

/// Read a sequence from a path, or from stdin when the path is `-`.
///
/// FASTA files are recognised by extension (optionally gzipped); anything else is read as
/// plain text, which may itself start with a FASTA header.
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, `ParseError::Fasta` or
/// `ParseError::MultipleRecords` for bad FASTA, `ParseError::InvalidFormat` if the input
/// holds no sequence, or `ParseError::SequenceTooLong` if the size limit is exceeded.
pub fn read_sequence(path: &Path) -> Result<SequenceInput, ParseError> {
    if path.as_os_str() == "-" {
        return read_sequence_stdin();
    }

    if is_fasta_file(path) {
        debug!("Reading FASTA input from {}", path.display());
        return parse_fasta_file(path);
    }

    debug!("Reading plain text input from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_sequence_text(&content)
}

/// Read a sequence from stdin
///
/// # Errors
///
/// See [`read_sequence`].
pub fn read_sequence_stdin() -> Result<SequenceInput, ParseError> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    parse_sequence_text(&content)
}

/// Parse sequence text that is either FASTA or bare bases.
///
/// # Errors
///
/// See [`read_sequence`].
pub fn parse_sequence_text(content: &str) -> Result<SequenceInput, ParseError> {
    if looks_like_fasta(content) {
        return parse_fasta_text(content);
    }

    let text: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    finish_input(None, text)
}

/// Apply the checks shared by every reader
pub(crate) fn finish_input(
    name: Option<String>,
    text: String,
) -> Result<SequenceInput, ParseError> {
    if text.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequence found in input".to_string(),
        ));
    }

    // Check size limit for DOS protection
    if check_input_size(text.len()).is_some() {
        return Err(ParseError::SequenceTooLong(text.len()));
    }

    Ok(SequenceInput { name, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_strips_whitespace() {
        let input = parse_sequence_text("GAA TCC\nTCT\r\nAGA\n").unwrap();
        assert_eq!(input.text, "GAATCCTCTAGA");
        assert!(input.name.is_none());
    }

    #[test]
    fn test_parse_plain_text_keeps_case() {
        // Passed through unchanged so the validator can reject it
        let input = parse_sequence_text("gaatcc").unwrap();
        assert_eq!(input.text, "gaatcc");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_sequence_text(" \n\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_text_detects_fasta() {
        let input = parse_sequence_text(">plasmid\nGAATCC\nTCTAGA\n").unwrap();
        assert_eq!(input.name.as_deref(), Some("plasmid"));
        assert_eq!(input.text, "GAATCCTCTAGA");
    }

    #[test]
    fn test_input_too_long() {
        let text = "A".repeat(MAX_SEQUENCE_LENGTH + 3);
        assert!(matches!(
            parse_sequence_text(&text),
            Err(ParseError::SequenceTooLong(_))
        ));
    }
}
