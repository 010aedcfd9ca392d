use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::motif::{Motif, Pattern};
use crate::utils::validation::{check_pattern_length, ValidationError};

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Pattern '{0}' not found in library")]
    PatternNotFound(String),

    #[error("Index {index} out of range for library of {len} motifs")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to read library: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse library: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Library file version for compatibility checking
pub const LIBRARY_VERSION: &str = "1.0.0";

/// Serializable library format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryData {
    pub version: String,
    pub created_at: String,
    pub motifs: Vec<LibraryEntry>,
}

/// One library entry as stored on disk, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub pattern: String,
    pub label: String,
}

/// Outcome of a successful [`MotifLibrary::insert_or_delete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEdit {
    /// A new pattern was appended
    Inserted(Motif),
    /// An existing pattern kept its position and received a new label
    Relabeled { motif: Motif, previous_label: String },
    /// The pattern was removed
    Deleted(Motif),
}

/// Editable catalogue of motifs keyed by pattern.
///
/// Entries keep insertion order; relabeling a pattern keeps its position, deleting one
/// shifts later entries down by one.
#[derive(Debug, Clone, Default)]
pub struct MotifLibrary {
    motifs: Vec<Motif>,

    /// Index: pattern -> position in motifs vec
    pattern_to_index: HashMap<Pattern, usize>,
}

impl MotifLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the built-in restriction site library
    pub fn load_builtin() -> Result<Self, LibraryError> {
        // Validated at compile time via build.rs
        const BUILTIN_LIBRARY: &str = include_str!("../../libraries/restriction_sites.json");
        Self::from_json(BUILTIN_LIBRARY)
    }

    /// Load a library from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, LibraryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a library from a JSON string.
    ///
    /// Entries are applied in order through [`insert_or_delete`](Self::insert_or_delete),
    /// so they are validated exactly like interactive edits. An entry with an empty label
    /// is rejected rather than treated as a deletion.
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let data: LibraryData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != LIBRARY_VERSION {
            warn!(
                "Library version mismatch (expected {}, found {})",
                LIBRARY_VERSION, data.version
            );
        }

        let mut library = Self::new();
        for entry in &data.motifs {
            if entry.label.is_empty() {
                return Err(ValidationError::EmptyLabel(entry.pattern.clone()).into());
            }
            library.insert_or_delete(&entry.pattern, &entry.label)?;
        }

        debug!("Loaded motif library with {} entries", library.len());
        Ok(library)
    }

    /// Export library to JSON
    pub fn to_json(&self) -> Result<String, LibraryError> {
        let data = LibraryData {
            version: LIBRARY_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            motifs: self
                .motifs
                .iter()
                .map(|m| LibraryEntry {
                    pattern: m.pattern.to_string(),
                    label: m.label.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Insert, relabel or delete a motif.
    ///
    /// A non-empty `label` inserts the pattern or overwrites the label of an existing
    /// pattern. An empty `label` deletes the pattern.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAlphabet` for non-ACGT characters,
    /// `ValidationError::InvalidPatternLength` if the pattern is not 4-8 bases long, or
    /// `LibraryError::PatternNotFound` when deleting a pattern that is not present.
    pub fn insert_or_delete(
        &mut self,
        pattern_text: &str,
        label: &str,
    ) -> Result<LibraryEdit, LibraryError> {
        // An empty pattern is out of the library's length range, not a pattern error
        if pattern_text.is_empty() {
            return Err(ValidationError::InvalidPatternLength(0).into());
        }
        let pattern = Pattern::parse(pattern_text)?;
        check_pattern_length(pattern.len())?;

        if label.is_empty() {
            return self.remove(&pattern);
        }

        let motif = Motif {
            pattern,
            label: label.to_string(),
        };

        if let Some(&idx) = self.pattern_to_index.get(&motif.pattern) {
            let previous_label =
                std::mem::replace(&mut self.motifs[idx].label, motif.label.clone());
            info!(
                "Relabeled {} from '{}' to '{}'",
                motif.pattern, previous_label, motif.label
            );
            return Ok(LibraryEdit::Relabeled {
                motif,
                previous_label,
            });
        }

        info!("Added {} as '{}'", motif.pattern, motif.label);
        self.pattern_to_index
            .insert(motif.pattern.clone(), self.motifs.len());
        self.motifs.push(motif.clone());
        Ok(LibraryEdit::Inserted(motif))
    }

    fn remove(&mut self, pattern: &Pattern) -> Result<LibraryEdit, LibraryError> {
        let idx = self
            .pattern_to_index
            .remove(pattern)
            .ok_or_else(|| LibraryError::PatternNotFound(pattern.to_string()))?;

        let removed = self.motifs.remove(idx);

        // Entries after the removed one moved down by one
        for position in self.pattern_to_index.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }

        info!("Deleted {} ('{}')", removed.pattern, removed.label);
        Ok(LibraryEdit::Deleted(removed))
    }

    /// All motifs in insertion order
    pub fn entries(&self) -> &[Motif] {
        &self.motifs
    }

    /// Motif at position `index` of [`entries`](Self::entries)
    pub fn by_index(&self, index: usize) -> Result<&Motif, LibraryError> {
        self.motifs.get(index).ok_or(LibraryError::IndexOutOfRange {
            index,
            len: self.motifs.len(),
        })
    }

    /// Get a motif by its pattern
    pub fn get(&self, pattern: &Pattern) -> Option<&Motif> {
        self.pattern_to_index
            .get(pattern)
            .map(|&idx| &self.motifs[idx])
    }

    /// Position of a pattern in [`entries`](Self::entries)
    pub fn position(&self, pattern: &Pattern) -> Option<usize> {
        self.pattern_to_index.get(pattern).copied()
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.pattern_to_index.contains_key(pattern)
    }

    /// Number of motifs in library
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}
