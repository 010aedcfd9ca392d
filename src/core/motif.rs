use serde::{Deserialize, Serialize};

use crate::core::base::{bases_to_string, complement_bases, parse_bases, Base};
use crate::utils::validation::ValidationError;

/// Label prefix given to motifs derived by complementing another motif
pub const COMPLEMENT_LABEL_PREFIX: &str = "compl_";

/// A recognition pattern: a non-empty run of bases.
///
/// Library-specific length limits (4-8 bases) are enforced by the library, not here,
/// so ad-hoc patterns of any positive length can still be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(Vec<Base>);

impl Pattern {
    /// Parse a pattern from uppercase DNA text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAlphabet` for non-ACGT characters, or
    /// `ValidationError::EmptyPattern` for an empty pattern.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let bases = parse_bases(text)?;
        if bases.is_empty() {
            return Err(ValidationError::EmptyPattern);
        }
        Ok(Self(bases))
    }

    pub fn bases(&self) -> &[Base] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-position complement, same alignment rule as a full sequence (not reversed)
    #[must_use]
    pub fn complement(&self) -> Self {
        Self(complement_bases(&self.0))
    }
}

impl TryFrom<String> for Pattern {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        bases_to_string(&pattern.0)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&bases_to_string(&self.0))
    }
}

/// A labeled recognition pattern, e.g. a restriction enzyme site.
///
/// Identity is the full (pattern, label) pair: two motifs sharing a pattern under
/// different labels are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "MotifRecord")]
pub struct Motif {
    /// Recognition sequence (5' -> 3')
    pub pattern: Pattern,

    /// Display name, e.g. the enzyme name
    pub label: String,
}

impl Motif {
    /// Build a motif from pattern text and a label.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the pattern is empty or contains non-ACGT characters,
    /// or `ValidationError::EmptyLabel` if the label is empty.
    pub fn new(pattern: &str, label: impl Into<String>) -> Result<Self, ValidationError> {
        let pattern = Pattern::parse(pattern)?;
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::EmptyLabel(pattern.to_string()));
        }
        Ok(Self { pattern, label })
    }

    /// The complementary motif: complemented pattern, label prefixed with `compl_`
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            pattern: self.pattern.complement(),
            label: format!("{COMPLEMENT_LABEL_PREFIX}{}", self.label),
        }
    }
}

/// Unvalidated motif fields as they appear in JSON
#[derive(Deserialize)]
struct MotifRecord {
    pattern: String,
    label: String,
}

impl TryFrom<MotifRecord> for Motif {
    type Error = ValidationError;

    fn try_from(record: MotifRecord) -> Result<Self, Self::Error> {
        Self::new(&record.pattern, record.label)
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.pattern, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_parse() {
        assert_eq!(Pattern::parse("GAATC").unwrap().to_string(), "GAATC");
        assert_eq!(Pattern::parse(""), Err(ValidationError::EmptyPattern));
        assert!(matches!(
            Pattern::parse("GANTC"),
            Err(ValidationError::InvalidAlphabet { character: 'N', .. })
        ));
    }

    #[test]
    fn test_short_patterns_allowed_outside_library() {
        let motif = Motif::new("AA", "dup").unwrap();
        assert_eq!(motif.pattern.len(), 2);
    }

    #[test]
    fn test_motif_rejects_empty_label() {
        assert_eq!(
            Motif::new("GAATC", ""),
            Err(ValidationError::EmptyLabel("GAATC".to_string()))
        );
    }

    #[test]
    fn test_motif_deserialize_rejects_empty_label() {
        let result: Result<Motif, _> = serde_json::from_str(r#"{"pattern":"GAATC","label":""}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Empty label"));
    }

    #[test]
    fn test_motif_complement() {
        let motif = Motif::new("GAATC", "EcoRI").unwrap();
        let comp = motif.complement();
        assert_eq!(comp.pattern.to_string(), "CTTAG");
        assert_eq!(comp.label, "compl_EcoRI");
    }

    #[test]
    fn test_motif_identity_includes_label() {
        let a = Motif::new("GGTCTC", "BcaI").unwrap();
        let b = Motif::new("GGTCTC", "BsaI").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.pattern, b.pattern);
    }

    #[test]
    fn test_motif_json_shape() {
        let motif = Motif::new("TCTAGA", "XbaI").unwrap();
        let json = serde_json::to_string(&motif).unwrap();
        assert_eq!(json, r#"{"pattern":"TCTAGA","label":"XbaI"}"#);
        let bad: Result<Motif, _> = serde_json::from_str(r#"{"pattern":"tctaga","label":"XbaI"}"#);
        assert!(bad.is_err());
    }
}
