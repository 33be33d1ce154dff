use super::make_icosahedron::PHI;
use super::{build_mesh, require_positive, FacePalette};
use crate::error::Result;
use crate::mesh::Mesh;

/// Creates a regular dodecahedron centered on the origin.
#[derive(Debug, Clone)]
pub struct MakeDodecahedron {
    radius: f64,
    palette: FacePalette,
}

impl MakeDodecahedron {
    /// Creates a new `MakeDodecahedron` operation with the given
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
    /// shorter than the twelve faces.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("dodecahedron radius", self.radius)?;
        // eight corners of an inscribed cube plus twelve on the axis planes
        let a = self.radius * PHI / 3.0_f64.sqrt();
        let b = a / PHI;
        let c = a * (2.0 - PHI);
        let mesh = build_mesh(
            &[
                [0.0, a, c],
                [0.0, a, -c],
                [0.0, -a, c],
                [0.0, -a, -c],
                [a, c, 0.0],
                [a, -c, 0.0],
                [b, b, b],
                [b, b, -b],
                [b, -b, b],
                [b, -b, -b],
                [c, 0.0, a],
                [c, 0.0, -a],
                [-a, c, 0.0],
                [-a, -c, 0.0],
                [-b, b, b],
                [-b, b, -b],
                [-b, -b, b],
                [-b, -b, -b],
                [-c, 0.0, a],
                [-c, 0.0, -a],
            ],
            &[
                &[6, 0, 14, 18, 10],
                &[16, 2, 8, 10, 18],
                &[9, 3, 17, 19, 11],
                &[15, 1, 7, 11, 19],
                &[1, 0, 6, 4, 7],
                &[0, 1, 15, 12, 14],
                &[3, 2, 16, 13, 17],
                &[2, 3, 9, 5, 8],
                &[6, 10, 8, 5, 4],
                &[9, 11, 7, 4, 5],
                &[15, 19, 17, 13, 12],
                &[16, 18, 14, 12, 13],
            ],
            &self.palette,
        )?;
        tracing::debug!(radius = self.radius, "made dodecahedron");
        Ok(mesh)
    }
}
