//! # motif-scan
//!
//! A library for locating restriction enzyme recognition sites in DNA sequences.
//!
//! Given a sequence and a selection of labeled motifs, `motif-scan` reports every position
//! at which each motif occurs, on the supplied (sense) strand and on its base-by-base
//! complement (antisense) strand.
//!
//! ## Features
//!
//! - **Strict validation**: Only uppercase A, C, G, T; length a positive multiple of 3
//! - **Overlapping matches**: Every start position is reported, not just disjoint ones
//! - **Both strands**: Motifs and their complements are searched on both strands
//! - **Editable library**: Built-in restriction sites, custom JSON libraries, per-run edits
//! - **Snapshot selection**: Scans run on an owned copy of the selected motifs
//!
//! ## Example
//!
//! ```rust
//! use motif_scan::{scan_both_strands, validate, MotifLibrary, MotifSelection};
//!
//! // Load the built-in library of restriction sites
//! let library = MotifLibrary::load_builtin().unwrap();
//!
//! // Select EcoRI (row 0) and take a snapshot
//! let mut selection = MotifSelection::new();
//! selection.toggle(0);
//! let motifs = selection.resolve(&library).unwrap();
//!
//! // Validate and scan
//! let sequence = validate("GAATCC").unwrap();
//! let (sense, antisense) = scan_both_strands(&sequence, &motifs);
//!
//! for hits in &sense {
//!     println!("{} at {:?}", hits.motif.label, hits.positions);
//! }
//! assert_eq!(antisense.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Bases, validated sequences, patterns and motifs
//! - [`library`]: Motif library storage and selection
//! - [`scanning`]: Single-strand scanner and two-strand orchestration
//! - [`parsing`]: Readers for plain text, FASTA and stdin input
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod library;
pub mod parsing;
pub mod scanning;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::motif::{Motif, Pattern};
pub use crate::core::sequence::{complement, validate, Sequence};
pub use library::{LibraryError, MotifLibrary, MotifSelection};
pub use scanning::{scan, scan_both_strands, PositionReport};
pub use utils::validation::ValidationError;
