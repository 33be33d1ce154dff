use crate::error::Result;
use crate::math::{transform_point, Matrix4, Placement, Point3};

use super::{Face, Mesh, MeshId, MeshStore};

/// A child of a [`CompositeMesh`].
#[derive(Debug, Clone)]
pub enum Node {
    /// A mesh held in a [`MeshStore`].
    Leaf(MeshId),
    /// A nested composite.
    Composite(CompositeMesh),
}

impl From<MeshId> for Node {
    fn from(id: MeshId) -> Self {
        Self::Leaf(id)
    }
}

impl From<CompositeMesh> for Node {
    fn from(composite: CompositeMesh) -> Self {
        Self::Composite(composite)
    }
}

/// A tree of meshes, each placed relative to its parent.
///
/// Flattening produces one mesh so a whole cluster can be tessellated into
/// a single render buffer.
#[derive(Debug, Clone, Default)]
pub struct CompositeMesh {
    children: Vec<(Node, Placement)>,
}

impl CompositeMesh {
    /// Creates an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child at the given placement.
    pub fn add(&mut self, child: impl Into<Node>, placement: Placement) {
        self.children.push((child.into(), placement));
    }

    /// The direct children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[(Node, Placement)] {
        &self.children
    }

    /// Number of leaf meshes reached by a depth-first walk.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|(node, _)| match node {
                Node::Leaf(_) => 1,
                Node::Composite(inner) => inner.leaf_count(),
            })
            .sum()
    }

    /// Merges every leaf into one mesh.
    ///
    /// Leaves are visited depth-first in insertion order. Each leaf's
    /// vertices are moved by the product of the placements above it, and
    /// its face indices are offset by the number of vertices emitted before
    /// it. Colors and categories are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a leaf's [`MeshId`] is not in `store`.
    pub fn flatten(&self, store: &MeshStore) -> Result<Mesh> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        self.flatten_into(store, &Matrix4::identity(), &mut vertices, &mut faces)?;
        tracing::debug!(
            leaves = self.leaf_count(),
            vertices = vertices.len(),
            faces = faces.len(),
            "flattened composite mesh"
        );
        Mesh::new(vertices, faces)
    }

    fn flatten_into(
        &self,
        store: &MeshStore,
        parent: &Matrix4,
        vertices: &mut Vec<Point3>,
        faces: &mut Vec<Face>,
    ) -> Result<()> {
        for (node, placement) in &self.children {
            let transform = parent * placement.matrix();
            match node {
                Node::Leaf(id) => {
                    let mesh = store.get(*id)?;
                    let offset = vertices.len();
                    vertices.extend(mesh.vertices().iter().map(|v| transform_point(&transform, v)));
                    faces.extend(mesh.faces().iter().map(|face| {
                        let indices = face.indices().iter().map(|i| i + offset).collect();
                        Face::new(indices, face.color).with_category(face.category)
                    }));
                }
                Node::Composite(inner) => {
                    inner.flatten_into(store, &transform, vertices, faces)?;
                }
            }
        }
        Ok(())
    }
}
