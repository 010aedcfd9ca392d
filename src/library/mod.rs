//! Motif library storage and selection.
//!
//! The library maps recognition patterns to display labels. A built-in library of common
//! restriction sites is compiled into the binary, but custom libraries can also be loaded
//! from JSON files.
//!
//! ## Built-in Library
//!
//! | Pattern    | Label |
//! |------------|-------|
//! | `GAATC`    | EcoRI |
//! | `TCTAGA`   | XbaI  |
//! | `ACTAGT`   | SpeI  |
//! | `CTGCAG`   | PstI  |
//! | `GCGGCCGC` | NotI  |
//! | `GCTCTCC`  | SapI  |
//! | `GGTCTC`   | BcaI  |
//!
//! ## Example
//!
//! ```rust
//! use motif_scan::library::{MotifLibrary, MotifSelection};
//!
//! let mut library = MotifLibrary::load_builtin().unwrap();
//!
//! // Add a site, then remove it again by submitting an empty label
//! library.insert_or_delete("AAGCTT", "HindIII").unwrap();
//! library.insert_or_delete("AAGCTT", "").unwrap();
//!
//! // Pick rows by index and take an owned snapshot for scanning
//! let mut selection = MotifSelection::new();
//! selection.toggle(0);
//! let motifs = selection.resolve(&library).unwrap();
//! assert_eq!(motifs[0].label, "EcoRI");
//! ```

pub mod selection;
pub mod store;

pub use selection::MotifSelection;
pub use store::{LibraryEdit, LibraryError, MotifLibrary};
