//! Motif scanning on one or both strands.
//!
//! - [`scan`]: Find every start position of each motif in a single sequence
//! - [`scan_both_strands`]: Scan a sequence and its aligned complement
//! - [`PositionReport`]: Per-motif ascending position lists for one strand
//!
//! ## Algorithm
//!
//! Each motif is compared against every window of its own length, advancing one base at
//! a time, so overlapping occurrences are all reported. Cost is proportional to
//! `len(sequence) x sum(len(pattern))`, which is small at the sizes involved (hundreds of
//! bases, dozens of motifs).
//!
//! For a two-strand scan the selected motifs are extended with their complements
//! (labels prefixed with `compl_`), and that combined set is run against both strands.
//!
//! ## Example
//!
//! ```rust
//! use motif_scan::core::motif::Motif;
//! use motif_scan::core::sequence::validate;
//! use motif_scan::scanning::scan_both_strands;
//!
//! let sequence = validate("GAATCC").unwrap();
//! let ecori = Motif::new("GAATC", "EcoRI").unwrap();
//!
//! let (sense, antisense) = scan_both_strands(&sequence, &[ecori.clone()]);
//! assert_eq!(sense.get(&ecori), Some(&[0][..]));
//! assert_eq!(antisense.get(&ecori.complement()), Some(&[0][..]));
//! ```

pub mod scanner;
pub mod strands;

pub use scanner::{find_positions, scan, MotifHits, PositionReport};
pub use strands::{combined_motifs, complement_motifs, scan_both_strands, StrandScan};
