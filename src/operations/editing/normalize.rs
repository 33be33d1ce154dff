use crate::error::{GeometryError, Result};
use crate::math::{normalized_to, Point3};
use crate::mesh::Mesh;

/// Moves every vertex onto a sphere around the origin, in place.
///
/// This squashes a shape towards a sphere. Where an edge has one large face
/// on one side and several smaller faces on the other, as happens after
/// subdividing only some faces, the edge splits open into a visible seam.
#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    length: f64,
}

impl Default for Normalize {
    fn default() -> Self {
        Self { length: 1.0 }
    }
}

impl Normalize {
    /// Creates a `Normalize` operation with the given sphere radius.
    #[must_use]
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    /// Executes the normalization and refreshes every face normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if the length is not a
    /// positive finite number, or [`GeometryError::ZeroVector`] if any
    /// vertex sits at the origin. No vertex is moved on error.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "length",
                value: self.length,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }

        let moved = mesh
            .vertices()
            .iter()
            .map(|v| normalized_to(&v.coords, self.length).map(Point3::from))
            .collect::<Result<Vec<_>>>()?;
        mesh.set_vertices(moved)?;

        tracing::debug!(vertices = mesh.vertex_count(), length = self.length, "normalized");
        Ok(())
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
    use crate::mesh::Face;
    use crate::operations::creation::{MakeCube, MakeIcosahedron};
    use crate::operations::editing::Subdivide;

    #[test]
    fn every_vertex_lands_on_sphere() {
        let mut mesh = MakeIcosahedron::new(1.0).execute().unwrap();
        Subdivide::new().execute(&mut mesh).unwrap();
        Normalize::new(3.0).execute(&mut mesh).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.coords.norm(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut once = MakeCube::new(2.0).execute().unwrap();
        Subdivide::new().execute(&mut once).unwrap();
        Normalize::new(2.0).execute(&mut once).unwrap();
        let mut twice = once.clone();
        Normalize::new(2.0).execute(&mut twice).unwrap();
        for (a, b) in once.vertices().iter().zip(twice.vertices()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn normals_are_recomputed() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        Subdivide::new().faces(vec![1]).execute(&mut mesh).unwrap();
        Normalize::default().execute(&mut mesh).unwrap();
        // the first corner of the right face now leans towards its corner
        let face = &mesh.faces()[1];
        let [a, b, c] = [0, 1, 2].map(|i| mesh.vertices()[face.corner(i)]);
        let expected = (c - b).cross(&(a - b)).normalize();
        assert_relative_eq!(*face.normal(), expected, epsilon = 1e-12);
        assert!(face.normal().dot(&Vector3::x()) < 1.0 - 1e-6);
    }

    #[test]
    fn vertex_at_origin_is_rejected_atomically() {
        let mut mesh = Mesh::new(
            vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::origin(),
            ],
            vec![Face::new(vec![0, 1, 2], Color::RED)],
        )
        .unwrap();
        let err = Normalize::default().execute(&mut mesh);
        assert!(matches!(err, Err(PolyError::Geometry(GeometryError::ZeroVector))));
        assert_relative_eq!(mesh.vertices()[0], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn non_positive_length_is_rejected() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        assert!(Normalize::new(0.0).execute(&mut mesh).is_err());
        assert!(Normalize::new(f64::NAN).execute(&mut mesh).is_err());
    }
}
