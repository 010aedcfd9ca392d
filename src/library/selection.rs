use crate::core::motif::Motif;
use crate::library::store::{LibraryError, MotifLibrary};

/// Library rows chosen for a single scan, in the order they were chosen.
///
/// Selecting a row that is already selected deselects it, mirroring a table where
/// clicking a row toggles it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifSelection {
    indices: Vec<usize>,
}

impl MotifSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every row of the library, in library order
    pub fn all(library: &MotifLibrary) -> Self {
        Self {
            indices: (0..library.len()).collect(),
        }
    }

    /// Add `index` if absent, remove it if present. Returns true if now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(pos) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(pos);
            false
        } else {
            self.indices.push(index);
            true
        }
    }

    /// Add `index` unless already selected
    pub fn select(&mut self, index: usize) {
        if !self.contains(index) {
            self.indices.push(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Copy the selected motifs out of the library.
    ///
    /// The returned snapshot is owned, so later library edits cannot affect a scan
    /// that is running on it.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::IndexOutOfRange` if any selected index is past the end
    /// of the library.
    pub fn resolve(&self, library: &MotifLibrary) -> Result<Vec<Motif>, LibraryError> {
        self.indices
            .iter()
            .map(|&idx| library.by_index(idx).cloned())
            .collect()
    }
}
