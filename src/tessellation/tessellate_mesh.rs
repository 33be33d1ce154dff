use std::collections::HashMap;

use crate::error::Result;
use crate::math::Vector3;
use crate::mesh::{CompositeMesh, Face, Mesh, MeshStore};

use super::triangulate::{constrained, fan};
use super::{IndexBuffer, RenderBuffer, RenderVertex, TessellationParams, TriangulationMode};

/// Tessellates a mesh into a flat-shaded render buffer.
///
/// Every face emits its own copy of each vertex it uses, carrying the
/// face's color and normal. Within one face a vertex is emitted once no
/// matter how many of its triangles use it.
pub struct TessellateMesh {
    params: TessellationParams,
}

impl TessellateMesh {
    /// Creates a new `TessellateMesh` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::Failed`](crate::error::TessellationError::Failed)
    /// if constrained triangulation of a face fails.
    pub fn execute(&self, mesh: &Mesh) -> Result<RenderBuffer> {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for face in mesh.faces() {
            let triangles = self.triangulate(mesh, face)?;
            let color = face.color.to_floats();
            let normal = to_f32(face.normal());

            let mut emitted: HashMap<usize, usize> = HashMap::with_capacity(face.arity());
            for corner in triangles.into_iter().flatten() {
                let vertex = face.corner(corner);
                let index = *emitted.entry(vertex).or_insert_with(|| {
                    vertices.push(RenderVertex {
                        position: to_f32(&mesh.vertices()[vertex].coords),
                        color,
                        normal,
                    });
                    vertices.len() - 1
                });
                indices.push(index);
            }
        }

        let indices = IndexBuffer::pack(&indices, vertices.len())?;
        tracing::debug!(
            faces = mesh.face_count(),
            vertices = vertices.len(),
            triangles = indices.triangle_count(),
            format = ?indices.format(),
            "tessellated mesh"
        );
        Ok(RenderBuffer { vertices, indices })
    }

    fn triangulate(&self, mesh: &Mesh, face: &Face) -> Result<Vec<[usize; 3]>> {
        match self.params.mode {
            TriangulationMode::Fan => Ok(fan(face.arity())),
            TriangulationMode::Constrained => {
                let ring: Vec<_> = face.indices().iter().map(|&i| mesh.vertices()[i]).collect();
                constrained(&ring)
            }
        }
    }
}

/// Flattens a composite mesh and tessellates the result.
pub struct TessellateComposite<'a> {
    composite: &'a CompositeMesh,
    params: TessellationParams,
}

impl<'a> TessellateComposite<'a> {
    /// Creates a new `TessellateComposite` operation.
    #[must_use]
    pub fn new(composite: &'a CompositeMesh, params: TessellationParams) -> Self {
        Self { composite, params }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a leaf is missing from `store` or tessellation
    /// fails.
    pub fn execute(&self, store: &MeshStore) -> Result<RenderBuffer> {
        let mesh = self.composite.flatten(store)?;
        TessellateMesh::new(self.params).execute(&mesh)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(v: &Vector3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}
