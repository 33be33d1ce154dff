use super::fan_triangles;
use crate::mesh::Mesh;

/// Computes the total surface area of a mesh.
///
/// Faces are split into fans from their first corner, so the result is
/// exact for convex planar faces.
pub struct Area<'a> {
    mesh: &'a Mesh,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the total surface area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        fan_triangles(self.mesh)
            .map(|[a, b, c]| (b - a).cross(&(c - a)).norm() * 0.5)
            .sum()
    }
}
