use slotmap::SlotMap;

use crate::error::TopologyError;

use super::Mesh;

slotmap::new_key_type! {
    /// Unique identifier for a mesh in a [`MeshStore`].
    pub struct MeshId;
}

/// Arena that owns meshes and hands out their identities.
///
/// Composite meshes refer to leaves by [`MeshId`], so one mesh can be
/// instanced many times without copying it.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: SlotMap<MeshId, Mesh>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mesh and returns its ID.
    pub fn insert(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    /// Returns a reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn get(&self, id: MeshId) -> Result<&Mesh, TopologyError> {
        self.meshes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    /// Returns a mutable reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn get_mut(&mut self, id: MeshId) -> Result<&mut Mesh, TopologyError> {
        self.meshes
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    /// Removes a mesh and returns it. Stale IDs return `None`.
    pub fn remove(&mut self, id: MeshId) -> Option<Mesh> {
        self.meshes.remove(id)
    }

    /// Number of meshes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// `true` if the store holds no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterates over all meshes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &Mesh)> {
        self.meshes.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut store = MeshStore::new();
        assert!(store.is_empty());
        let id = store.insert(Mesh::default());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().face_count(), 0);

        store.get_mut(id).unwrap().add_vertex(crate::math::Point3::origin());
        assert_eq!(store.get(id).unwrap().vertex_count(), 1);

        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_err());
        assert!(store.remove(id).is_none());
    }

    #[test]
    fn stale_ids_do_not_alias_new_meshes() {
        let mut store = MeshStore::new();
        let old = store.insert(Mesh::default());
        store.remove(old);
        let new = store.insert(Mesh::default());
        assert_ne!(old, new);
        assert!(store.get(old).is_err());
    }
}
