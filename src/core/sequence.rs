use serde::{Deserialize, Serialize};

use crate::core::base::{bases_to_string, complement_bases, parse_bases, Base};
use crate::utils::validation::{check_sequence_length, ValidationError};

/// A validated, codon-aligned DNA sequence.
///
/// Only constructed through [`validate`], so every instance is non-empty, has a length
/// divisible by 3 and contains nothing but A, C, G and T.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(Vec<Base>);

impl Sequence {
    /// Bases in 0-indexed order
    pub fn bases(&self) -> &[Base] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated sequence; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-position complement of this sequence (see [`complement`])
    #[must_use]
    pub fn complement(&self) -> Self {
        complement(self)
    }
}

/// Validate raw text as a DNA sequence.
///
/// The alphabet is checked before the length, so `"GAXTC"` reports the bad base
/// rather than the bad length.
///
/// # Examples
///
/// ```
/// use motif_scan::core::sequence::validate;
///
/// assert!(validate("GAATCC").is_ok());
/// assert!(validate("GAATC").is_err());
/// assert!(validate("gaatcc").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidAlphabet` for any character outside {A, C, G, T}
/// (case-sensitive), or `ValidationError::InvalidLength` if the text is empty or its
/// length is not a multiple of 3.
pub fn validate(text: &str) -> Result<Sequence, ValidationError> {
    let bases = parse_bases(text)?;
    check_sequence_length(bases.len())?;
    Ok(Sequence(bases))
}

/// Watson-Crick complement of a sequence, aligned index for index.
///
/// `output[i]` is the complement of `input[i]`; the result is NOT reversed. It models
/// the opposing strand drawn beneath the given one, read left to right.
#[must_use]
pub fn complement(sequence: &Sequence) -> Sequence {
    // Length and alphabet are preserved, so the invariant still holds
    Sequence(complement_bases(&sequence.0))
}

impl std::str::FromStr for Sequence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Sequence> for String {
    fn from(sequence: Sequence) -> Self {
        bases_to_string(&sequence.0)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&bases_to_string(&self.0))
    }
}
