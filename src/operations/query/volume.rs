use super::fan_triangles;
use crate::mesh::Mesh;

/// Computes the enclosed volume of a closed mesh.
///
/// Sums the signed volume `(1/6) * a . (b x c)` of the tetrahedron each fan
/// triangle forms with the origin. Outward winding gives a positive result;
/// open or inward-wound meshes give meaningless values.
pub struct Volume<'a> {
    mesh: &'a Mesh,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        fan_triangles(self.mesh)
            .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)) / 6.0)
            .sum()
    }
}
