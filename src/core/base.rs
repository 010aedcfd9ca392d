use serde::{Deserialize, Serialize};

use crate::utils::validation::ValidationError;

/// A single canonical DNA nucleotide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Watson-Crick complement: A<->T, C<->G
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Parse an uppercase base symbol. Lowercase and IUPAC codes are rejected.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse text into bases, rejecting the first character outside {A, C, G, T}.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAlphabet` with the offending character and its
/// 0-based position.
pub fn parse_bases(text: &str) -> Result<Vec<Base>, ValidationError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            Base::from_char(character).ok_or(ValidationError::InvalidAlphabet {
                character,
                position,
            })
        })
        .collect()
}

/// Element-wise complement. Index alignment is kept: the result is not reversed.
#[must_use]
pub fn complement_bases(bases: &[Base]) -> Vec<Base> {
    bases.iter().map(|b| b.complement()).collect()
}

pub fn bases_to_string(bases: &[Base]) -> String {
    bases.iter().map(|b| b.as_char()).collect()
}
