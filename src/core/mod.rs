//! Core data types for DNA motif scanning.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Base`](base::Base): One of the four canonical nucleotides
//! - [`Sequence`](sequence::Sequence): A validated, codon-aligned DNA sequence
//! - [`Pattern`](motif::Pattern) and [`Motif`](motif::Motif): Labeled recognition patterns
//!
//! ## Strand Convention
//!
//! The complement of a sequence is computed base by base **without reversal**:
//!
//! | Strand    | Example  |
//! |-----------|----------|
//! | Sense     | `GAATCC` |
//! | Antisense | `CTTAGG` |
//!
//! Position `i` on the antisense strand is the partner of position `i` on the sense strand,
//! so positions reported for both strands share one coordinate system.

pub mod base;
pub mod motif;
pub mod sequence;
