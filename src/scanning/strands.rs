use serde::Serialize;
use tracing::debug;

use crate::core::motif::Motif;
use crate::core::sequence::{complement, Sequence};
use crate::scanning::scanner::{scan, PositionReport};

/// Complementary motif for each input motif, in the same order
#[must_use]
pub fn complement_motifs(motifs: &[Motif]) -> Vec<Motif> {
    motifs.iter().map(Motif::complement).collect()
}

/// All selected motifs followed by all of their complements
#[must_use]
pub fn combined_motifs(selected: &[Motif]) -> Vec<Motif> {
    let mut combined = Vec::with_capacity(selected.len() * 2);
    combined.extend_from_slice(selected);
    combined.extend(complement_motifs(selected));
    combined
}

/// Scan the sense strand and its aligned complement with the same motif set.
///
/// Both strands are searched for the selected motifs and for their complements, so a
/// site shows up in either report whichever form it takes. The antisense strand is the
/// per-base complement of `sequence` (not reversed), so both reports share coordinates.
///
/// Returns `(sense_report, antisense_report)`.
#[must_use]
pub fn scan_both_strands(
    sequence: &Sequence,
    selected: &[Motif],
) -> (PositionReport, PositionReport) {
    let combined = combined_motifs(selected);

    let sense = scan(sequence, &combined);
    let antisense = scan(&complement(sequence), &combined);

    debug!(
        "Strand scan: {} sense hits, {} antisense hits",
        sense.total_positions(),
        antisense.total_positions()
    );

    (sense, antisense)
}

/// A complete two-strand scan, ready to be rendered
#[derive(Debug, Clone, Serialize)]
pub struct StrandScan {
    /// Sense strand as supplied (5' -> 3')
    pub sense_sequence: Sequence,

    /// Aligned complement of the sense strand (3' -> 5')
    pub antisense_sequence: Sequence,

    /// Motif set searched on both strands
    pub motifs: Vec<Motif>,

    pub sense: PositionReport,

    pub antisense: PositionReport,
}

impl StrandScan {
    /// Run [`scan_both_strands`] and keep its inputs alongside the reports
    #[must_use]
    pub fn run(sequence: &Sequence, selected: &[Motif]) -> Self {
        let (sense, antisense) = scan_both_strands(sequence, selected);
        Self {
            sense_sequence: sequence.clone(),
            antisense_sequence: complement(sequence),
            motifs: combined_motifs(selected),
            sense,
            antisense,
        }
    }

    /// True if no motif occurs on either strand
    pub fn is_empty(&self) -> bool {
        self.sense.is_empty() && self.antisense.is_empty()
    }
}
