//! Centralized validation and helper functions.

/// Number of bases in a codon; sequence lengths must be a multiple of this
pub const CODON_LENGTH: usize = 3;

/// Shortest recognition pattern accepted into a motif library
pub const MIN_PATTERN_LENGTH: usize = 4;

/// Longest recognition pattern accepted into a motif library
pub const MAX_PATTERN_LENGTH: usize = 8;

/// Maximum number of bases read from a file or stdin (DOS protection)
pub const MAX_SEQUENCE_LENGTH: usize = 1_000_000;

/// Validation error types shared by sequences and motif patterns
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid base '{character}' at position {position}: only A, C, G and T are allowed")]
    InvalidAlphabet { character: char, position: usize },

    #[error("Invalid sequence length {0}: must be a positive multiple of {CODON_LENGTH}")]
    InvalidLength(usize),

    #[error("Invalid pattern length {0}: must be {MIN_PATTERN_LENGTH}-{MAX_PATTERN_LENGTH} bases")]
    InvalidPatternLength(usize),

    #[error("Empty pattern: a motif needs at least one base")]
    EmptyPattern,

    #[error("Empty label for pattern '{0}': every motif needs a display name")]
    EmptyLabel(String),
}

/// Check that a sequence length is positive and codon-aligned.
///
/// # Examples
///
/// ```
/// use motif_scan::utils::validation::check_sequence_length;
///
/// assert!(check_sequence_length(6).is_ok());
/// assert!(check_sequence_length(5).is_err());
/// assert!(check_sequence_length(0).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidLength` if the length is zero or not divisible by 3.
pub fn check_sequence_length(len: usize) -> Result<(), ValidationError> {
    if len == 0 || len % CODON_LENGTH != 0 {
        return Err(ValidationError::InvalidLength(len));
    }
    Ok(())
}

/// Check that a library pattern length is within the accepted range.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPatternLength` if the length is outside 4..=8.
pub fn check_pattern_length(len: usize) -> Result<(), ValidationError> {
    if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&len) {
        return Err(ValidationError::InvalidPatternLength(len));
    }
    Ok(())
}

/// Check if raw input of the given size may be read.
///
/// Returns an error message if the input exceeds the limit, None if safe to read.
#[must_use]
pub fn check_input_size(len: usize) -> Option<String> {
    if len > MAX_SEQUENCE_LENGTH {
        Some(format!(
            "Input too long: {len} bases exceeds maximum of {MAX_SEQUENCE_LENGTH}"
        ))
    } else {
        None
    }
}
