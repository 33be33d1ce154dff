use super::{build_mesh, require_positive, FacePalette};
use crate::error::Result;
use crate::mesh::Mesh;

/// Golden ratio.
pub(super) const PHI: f64 = 1.618_033_988_749_895;

/// Creates a regular icosahedron centered on the origin.
///
/// The twelve corners lie on three mutually perpendicular golden
/// rectangles.
#[derive(Debug, Clone)]
pub struct MakeIcosahedron {
    radius: f64,
    palette: FacePalette,
}

impl MakeIcosahedron {
    /// Creates a new `MakeIcosahedron` operation with the given
    /// circumradius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            palette: FacePalette::default(),
        }
    }

    /// Sets the face colors.
    #[must_use]
    pub fn palette(mut self, palette: impl Into<FacePalette>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the palette is
    /// shorter than the twenty faces.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("icosahedron radius", self.radius)?;
        let s = self.radius / PHI.mul_add(PHI, 1.0).sqrt();
        let p = PHI * s;
        let mesh = build_mesh(
            &[
                [p, s, 0.0],
                [p, -s, 0.0],
                [-p, -s, 0.0],
                [-p, s, 0.0],
                [-s, 0.0, p],
                [s, 0.0, p],
                [s, 0.0, -p],
                [-s, 0.0, -p],
                [0.0, p, s],
                [0.0, p, -s],
                [0.0, -p, -s],
                [0.0, -p, s],
            ],
            &[
                &[5, 4, 11],
                &[5, 11, 1],
                &[5, 1, 0],
                &[0, 8, 5],
                &[5, 8, 4],
                &[6, 7, 9],
                &[9, 7, 3],
                &[3, 7, 2],
                &[2, 7, 10],
                &[10, 7, 6],
                &[9, 3, 8],
                &[9, 8, 0],
                &[9, 0, 6],
                &[6, 0, 1],
                &[6, 1, 10],
                &[10, 1, 11],
                &[10, 11, 2],
                &[2, 11, 4],
                &[2, 4, 3],
                &[3, 4, 8],
            ],
            &self.palette,
        )?;
        tracing::debug!(radius = self.radius, "made icosahedron");
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn corners_lie_on_circumsphere() {
        let mesh = MakeIcosahedron::new(2.5).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 20);
        for v in mesh.vertices() {
            assert_relative_eq!(v.coords.norm(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn all_edges_have_equal_length() {
        let mesh = MakeIcosahedron::new(1.0).execute().unwrap();
        let lengths: Vec<f64> = mesh
            .edges()
            .into_iter()
            .map(|(a, b)| (mesh.vertices()[a] - mesh.vertices()[b]).norm())
            .collect();
        assert_eq!(lengths.len(), 30);
        for length in &lengths {
            assert_relative_eq!(*length, lengths[0], epsilon = 1e-12);
        }
    }
}
