//! Readers that turn files or stdin into raw sequence text.
//!
//! This module provides readers for:
//!
//! - **Plain text**: Bases with any line breaks or spacing, which are stripped
//! - **FASTA files**: A single record, plain or gzip/bgzip compressed
//! - **stdin**: Either of the above, selected with the path `-`
//!
//! Readers do not validate the alphabet or case; that is left to
//! [`validate`](crate::core::sequence::validate).
//!
//! ## Example
//!
//! ```rust,no_run
//! use motif_scan::core::sequence::validate;
//! use motif_scan::parsing::read_sequence;
//! use std::path::Path;
//!
//! let input = read_sequence(Path::new("insert.fa")).unwrap();
//! let sequence = validate(&input.text).unwrap();
//! ```

pub mod fasta;
pub mod input;

pub use input::{parse_sequence_text, read_sequence, ParseError, SequenceInput};
