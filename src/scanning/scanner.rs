use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::core::base::Base;
use crate::core::motif::Motif;
use crate::core::sequence::Sequence;

/// Every start position of one motif within one strand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifHits {
    #[serde(flatten)]
    pub motif: Motif,

    /// Zero-based start indices, ascending
    pub positions: Vec<usize>,
}

/// Positions of each motif found in a single strand.
///
/// Entries appear in the order their motifs were first passed to [`scan`]. Motifs
/// without any occurrence are not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionReport {
    hits: Vec<MotifHits>,
}

impl PositionReport {
    /// Positions for a motif, or None if it has no occurrence in this strand
    pub fn get(&self, motif: &Motif) -> Option<&[usize]> {
        self.hits
            .iter()
            .find(|h| &h.motif == motif)
            .map(|h| h.positions.as_slice())
    }

    pub fn contains(&self, motif: &Motif) -> bool {
        self.get(motif).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotifHits> {
        self.hits.iter()
    }

    /// Number of motifs with at least one occurrence
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Total occurrences across all motifs
    pub fn total_positions(&self) -> usize {
        self.hits.iter().map(|h| h.positions.len()).sum()
    }
}

impl<'a> IntoIterator for &'a PositionReport {
    type Item = &'a MotifHits;
    type IntoIter = std::slice::Iter<'a, MotifHits>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// Every start index at which `pattern` occurs in `bases`, overlapping occurrences included.
///
/// The window advances one base at a time, so `AA` in `AAA` yields `[0, 1]`.
#[must_use]
pub fn find_positions(bases: &[Base], pattern: &[Base]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > bases.len() {
        return Vec::new();
    }

    bases
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| start)
        .collect()
}

/// Find every occurrence of every motif in a sequence.
///
/// Motifs are matched exactly, base by base. A motif passed more than once is reported
/// once, since its positions cannot differ. Motifs longer than the sequence simply have
/// no occurrence.
#[must_use]
pub fn scan(sequence: &Sequence, motifs: &[Motif]) -> PositionReport {
    let mut seen: HashSet<&Motif> = HashSet::with_capacity(motifs.len());
    let mut hits = Vec::new();

    for motif in motifs {
        if !seen.insert(motif) {
            continue;
        }

        let positions = find_positions(sequence.bases(), motif.pattern.bases());
        if !positions.is_empty() {
            hits.push(MotifHits {
                motif: motif.clone(),
                positions,
            });
        }
    }

    debug!(
        "Scanned {} bases for {} motifs: {} with hits",
        sequence.len(),
        motifs.len(),
        hits.len()
    );

    PositionReport { hits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::validate;

    fn motif(pattern: &str, label: &str) -> Motif {
        Motif::new(pattern, label).unwrap()
    }

    #[test]
    fn test_overlapping_matches() {
        let seq = validate("AAA").unwrap();
        let dup = motif("AA", "dup");
        let report = scan(&seq, &[dup.clone()]);
        assert_eq!(report.get(&dup), Some(&[0, 1][..]));
    }

    #[test]
    fn test_exact_full_length_match() {
        let seq = validate("GGTCTC").unwrap();
        let bcai = motif("GGTCTC", "BcaI");
        let report = scan(&seq, &[bcai.clone()]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(&bcai), Some(&[0][..]));
    }

    #[test]
    fn test_no_occurrence_is_omitted() {
        let seq = validate("AAAAAA").unwrap();
        let bcai = motif("GGTCTC", "BcaI");
        let report = scan(&seq, &[bcai.clone()]);
        assert!(report.is_empty());
        assert!(!report.contains(&bcai));
    }

    #[test]
    fn test_motif_longer_than_sequence() {
        let seq = validate("GCG").unwrap();
        let report = scan(&seq, &[motif("GCGGCCGC", "NotI")]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_match_at_end_of_sequence() {
        let seq = validate("TTTTGAATC").unwrap();
        let ecori = motif("GAATC", "EcoRI");
        assert_eq!(scan(&seq, &[ecori.clone()]).get(&ecori), Some(&[4][..]));
    }

    #[test]
    fn test_grouping_key_includes_label() {
        let seq = validate("GGTCTCGGTCTC").unwrap();
        let a = motif("GGTCTC", "BcaI");
        let b = motif("GGTCTC", "BsaI");
        let report = scan(&seq, &[a.clone(), b.clone()]);
        assert_eq!(report.len(), 2);
        assert_eq!(report.get(&a), Some(&[0, 6][..]));
        assert_eq!(report.get(&b), Some(&[0, 6][..]));
    }

    #[test]
    fn test_duplicate_motifs_reported_once() {
        let seq = validate("GAATCCGAATCC").unwrap();
        let ecori = motif("GAATC", "EcoRI");
        let report = scan(&seq, &[ecori.clone(), ecori.clone()]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.total_positions(), 2);
    }

    #[test]
    fn test_report_order_follows_motif_order() {
        let seq = validate("TCTAGAGAATCC").unwrap();
        let ecori = motif("GAATC", "EcoRI");
        let xbai = motif("TCTAGA", "XbaI");
        let report = scan(&seq, &[ecori.clone(), xbai.clone()]);
        let labels: Vec<&str> = report.iter().map(|h| h.motif.label.as_str()).collect();
        assert_eq!(labels, vec!["EcoRI", "XbaI"]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let seq = validate("GAATCCTCTAGAACTAGTGAATCC").unwrap();
        let motifs = vec![motif("GAATC", "EcoRI"), motif("TCTAGA", "XbaI")];
        let first = serde_json::to_string(&scan(&seq, &motifs)).unwrap();
        let second = serde_json::to_string(&scan(&seq, &motifs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_json_shape() {
        let seq = validate("GAATCC").unwrap();
        let report = scan(&seq, &[motif("GAATC", "EcoRI")]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"[{"pattern":"GAATC","label":"EcoRI","positions":[0]}]"#
        );
    }

    #[test]
    fn test_find_positions_empty_pattern() {
        let seq = validate("ACG").unwrap();
        assert!(find_positions(seq.bases(), &[]).is_empty());
    }
}
