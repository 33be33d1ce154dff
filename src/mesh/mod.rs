mod composite;
mod face;
mod store;

pub use composite::{CompositeMesh, Node};
pub use face::{Category, Face};
pub use store::{MeshId, MeshStore};

use std::collections::{BTreeSet, HashSet};

use crate::error::{GeometryError, OperationError, Result, TopologyError};
use crate::math::{mean_point, Point3};

/// A face-vertex polyhedron.
///
/// Vertices are only ever appended, never removed, so edits may leave
/// unreferenced vertices behind. Every face index is always within
/// `0..vertex_count`.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh, validating every face and computing its normal.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if any face has fewer than 3 indices or
    /// references a vertex that does not exist.
    pub fn new(vertices: Vec<Point3>, faces: Vec<Face>) -> Result<Self> {
        for face in &faces {
            face.validate(vertices.len())?;
        }
        let mut mesh = Self { vertices, faces };
        mesh.recompute_normals();
        Ok(mesh)
    }

    /// The vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The faces, in order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of vertices, including unreferenced ones.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceNotFound`] if `index` is out of range.
    pub fn face(&self, index: usize) -> Result<&Face> {
        self.faces.get(index).ok_or_else(|| {
            TopologyError::FaceNotFound {
                index,
                face_count: self.faces.len(),
            }
            .into()
        })
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `index` is out of range.
    pub fn vertex(&self, index: usize) -> Result<&Point3> {
        self.vertices.get(index).ok_or_else(|| {
            TopologyError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            }
            .into()
        })
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Appends a face and returns its index.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if the face is malformed. The mesh is
    /// left unchanged.
    pub fn add_face(&mut self, mut face: Face) -> Result<usize> {
        face.validate(self.vertices.len())?;
        self.cache_normal(&mut face);
        self.faces.push(face);
        Ok(self.faces.len() - 1)
    }

    /// Replaces the face at `index` with `new_faces`.
    ///
    /// The first new face takes over slot `index`; the rest are appended to
    /// the end of the face list in order. All faces are validated before the
    /// mesh is touched, so on error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceNotFound`] for a bad `index`,
    /// [`TopologyError::EmptyReplacement`] if `new_faces` is empty, or the
    /// validation error of the first malformed new face.
    pub fn replace_face(&mut self, index: usize, new_faces: Vec<Face>) -> Result<()> {
        if index >= self.faces.len() {
            return Err(TopologyError::FaceNotFound {
                index,
                face_count: self.faces.len(),
            }
            .into());
        }
        if new_faces.is_empty() {
            return Err(TopologyError::EmptyReplacement.into());
        }
        for face in &new_faces {
            face.validate(self.vertices.len())?;
        }

        let prepared: Vec<Face> = new_faces
            .into_iter()
            .map(|mut face| {
                self.cache_normal(&mut face);
                face
            })
            .collect();
        let mut prepared = prepared.into_iter();
        if let Some(first) = prepared.next() {
            self.faces[index] = first;
        }
        self.faces.extend(prepared);
        tracing::trace!(index, face_count = self.faces.len(), "replaced face");
        Ok(())
    }

    /// Indices of faces tagged with `category`, or of all faces for `None`.
    #[must_use]
    pub fn faces_with_category(&self, category: Option<Category>) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| category.is_none_or(|c| face.category == c))
            .map(|(i, _)| i)
            .collect()
    }

    /// The smallest category not used by any face.
    #[must_use]
    pub fn next_free_category(&self) -> Category {
        self.next_free_categories(1)[0]
    }

    /// The `count` smallest categories not used by any face, ascending.
    #[must_use]
    pub fn next_free_categories(&self, count: usize) -> Vec<Category> {
        let used: HashSet<Category> = self.faces.iter().map(|f| f.category).collect();
        (0..).filter(|c| !used.contains(c)).take(count).collect()
    }

    /// All undirected edges, each as a sorted index pair.
    #[must_use]
    pub fn edges(&self) -> BTreeSet<(usize, usize)> {
        self.faces
            .iter()
            .flat_map(Face::edges)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    }

    /// Mean position of the corners of the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceNotFound`] if `index` is out of range.
    pub fn face_centroid(&self, index: usize) -> Result<Point3> {
        let face = self.face(index)?;
        mean_point(face.indices().iter().map(|&i| &self.vertices[i])).ok_or_else(|| {
            GeometryError::Degenerate(format!("face {index} has no corners")).into()
        })
    }

    /// Re-checks every face against the current vertex list.
    ///
    /// # Errors
    ///
    /// Returns the first [`TopologyError`] found.
    pub fn validate(&self) -> Result<()> {
        self.faces
            .iter()
            .try_for_each(|face| face.validate(self.vertices.len()))
    }

    /// Replaces every vertex position at once, then refreshes all face
    /// normals.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the vertex count differs
    /// from the current one. The mesh is unchanged in that case.
    pub fn set_vertices(&mut self, vertices: Vec<Point3>) -> Result<()> {
        if vertices.len() != self.vertices.len() {
            return Err(OperationError::InvalidInput(format!(
                "expected {} vertex positions, got {}",
                self.vertices.len(),
                vertices.len()
            ))
            .into());
        }
        self.vertices = vertices;
        self.recompute_normals();
        Ok(())
    }

    /// Moves every vertex through `f`, then refreshes all face normals.
    pub fn map_vertices(&mut self, f: impl FnMut(&Point3) -> Point3) {
        self.vertices = self.vertices.iter().map(f).collect();
        self.recompute_normals();
    }

    /// Recomputes every cached face normal from the current vertices.
    pub fn recompute_normals(&mut self) {
        let vertices = &self.vertices;
        let mut degenerate = 0_usize;
        for face in &mut self.faces {
            if !face.refresh_normal(vertices) {
                degenerate += 1;
            }
        }
        if degenerate > 0 {
            tracing::warn!(degenerate, "faces with degenerate normals");
        }
    }

    fn cache_normal(&self, face: &mut Face) {
        if !face.refresh_normal(&self.vertices) {
            tracing::warn!(indices = ?face.indices(), "face has a degenerate normal");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::Color;
    use crate::error::PolyError;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Mesh {
        Mesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![Face::new(vec![0, 1, 2, 3], Color::RED)],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_bad_faces() {
        let verts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let err = Mesh::new(verts.clone(), vec![Face::new(vec![0, 1, 3], Color::RED)]);
        assert!(matches!(
            err,
            Err(PolyError::Topology(TopologyError::IndexOutOfRange { index: 3, .. }))
        ));
        let err = Mesh::new(verts, vec![Face::new(vec![0, 1], Color::RED)]);
        assert!(matches!(
            err,
            Err(PolyError::Topology(TopologyError::FaceTooSmall { arity: 2 }))
        ));
    }

    #[test]
    fn normal_follows_winding() {
        let mesh = unit_square();
        assert_relative_eq!(*mesh.faces()[0].normal(), Vector3::z(), epsilon = 1e-12);

        let reversed = Mesh::new(
            mesh.vertices().to_vec(),
            vec![Face::new(vec![3, 2, 1, 0], Color::RED)],
        )
        .unwrap();
        assert_relative_eq!(*reversed.faces()[0].normal(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn add_vertex_returns_new_index() {
        let mut mesh = unit_square();
        assert_eq!(mesh.add_vertex(p(5.0, 5.0, 5.0)), 4);
        assert_eq!(mesh.vertex_count(), 5);
    }

    #[test]
    fn replace_face_keeps_slot_and_appends_rest() {
        let mut mesh = unit_square();
        mesh.add_face(Face::new(vec![0, 2, 3], Color::BLUE)).unwrap();
        let c = mesh.add_vertex(p(0.5, 0.5, 0.0));
        let fan = vec![
            Face::new(vec![0, 1, c], Color::GREEN),
            Face::new(vec![1, 2, c], Color::GREEN),
            Face::new(vec![2, 3, c], Color::GREEN),
        ];
        mesh.replace_face(0, fan).unwrap();

        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.faces()[0].indices(), &[0, 1, c]);
        assert_eq!(mesh.faces()[1].color, Color::BLUE);
        assert_eq!(mesh.faces()[2].indices(), &[1, 2, c]);
        assert_eq!(mesh.faces()[3].indices(), &[2, 3, c]);
    }

    #[test]
    fn failed_replace_leaves_mesh_untouched() {
        let mut mesh = unit_square();
        let before = mesh.faces().to_vec();

        let bad = vec![
            Face::new(vec![0, 1, 2], Color::GREEN),
            Face::new(vec![0, 1, 42], Color::GREEN),
        ];
        assert!(mesh.replace_face(0, bad).is_err());
        assert!(mesh.replace_face(0, Vec::new()).is_err());
        assert!(mesh.replace_face(3, vec![Face::new(vec![0, 1, 2], Color::GREEN)]).is_err());
        assert_eq!(mesh.faces(), before.as_slice());
    }

    #[test]
    fn category_queries() {
        let mut mesh = unit_square();
        mesh.add_face(Face::new(vec![0, 1, 2], Color::RED).with_category(1)).unwrap();
        mesh.add_face(Face::new(vec![0, 2, 3], Color::RED).with_category(3)).unwrap();

        assert_eq!(mesh.faces_with_category(None), vec![0, 1, 2]);
        assert_eq!(mesh.faces_with_category(Some(1)), vec![1]);
        assert!(mesh.faces_with_category(Some(2)).is_empty());
        assert_eq!(mesh.next_free_category(), 2);
        assert_eq!(mesh.next_free_categories(3), vec![2, 4, 5]);
    }

    #[test]
    fn edges_are_shared_once() {
        let mesh = Mesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![
                Face::new(vec![0, 1, 2], Color::RED),
                Face::new(vec![0, 2, 3], Color::RED),
            ],
        )
        .unwrap();
        let edges: Vec<_> = mesh.edges().into_iter().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let mesh = unit_square();
        assert_relative_eq!(mesh.face_centroid(0).unwrap(), p(0.5, 0.5, 0.0));
        assert!(mesh.face_centroid(1).is_err());
    }

    #[test]
    fn map_vertices_refreshes_normals() {
        let mut mesh = unit_square();
        mesh.map_vertices(|v| p(v.x, 0.0, v.y));
        // the ring now lies in the XZ plane
        assert_relative_eq!(*mesh.faces()[0].normal(), -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn set_vertices_requires_same_count() {
        let mut mesh = unit_square();
        assert!(mesh.set_vertices(vec![p(0.0, 0.0, 0.0)]).is_err());
        assert_eq!(mesh.vertex_count(), 4);
        let flipped: Vec<_> = mesh.vertices().iter().map(|v| p(v.y, v.x, 0.0)).collect();
        mesh.set_vertices(flipped).unwrap();
        assert_relative_eq!(*mesh.faces()[0].normal(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_face_is_tolerated() {
        let mesh = Mesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
            vec![Face::new(vec![0, 1, 2], Color::RED)],
        )
        .unwrap();
        assert!(mesh.faces()[0].is_degenerate());
    }
}
