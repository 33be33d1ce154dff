use std::collections::HashSet;

use crate::error::{Result, TopologyError};
use crate::mesh::{Category, Mesh};

/// Which faces an editor operates on.
///
/// The selection is resolved to concrete face indices once, before the
/// editor changes anything, so faces created during the edit are never
/// picked up by the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FaceSelection {
    /// Every face present when the edit starts.
    #[default]
    All,
    /// Explicit face indices. Duplicates are ignored.
    Indices(Vec<usize>),
    /// Faces carrying the given category.
    Category(Category),
}

impl FaceSelection {
    /// Resolves the selection against `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceNotFound`] if an explicit index is out
    /// of range.
    pub fn resolve(&self, mesh: &Mesh) -> Result<Vec<usize>> {
        match self {
            Self::All => Ok(mesh.faces_with_category(None)),
            Self::Category(category) => Ok(mesh.faces_with_category(Some(*category))),
            Self::Indices(indices) => {
                let face_count = mesh.face_count();
                let mut seen = HashSet::with_capacity(indices.len());
                let mut resolved = Vec::with_capacity(indices.len());
                for &index in indices {
                    if index >= face_count {
                        return Err(TopologyError::FaceNotFound { index, face_count }.into());
                    }
                    if seen.insert(index) {
                        resolved.push(index);
                    }
                }
                Ok(resolved)
            }
        }
    }
}

impl From<Vec<usize>> for FaceSelection {
    fn from(indices: Vec<usize>) -> Self {
        Self::Indices(indices)
    }
}

impl From<Option<Category>> for FaceSelection {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Category)
    }
}
