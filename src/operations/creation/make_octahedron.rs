use super::{build_mesh, require_positive, FacePalette};
use crate::error::Result;
use crate::mesh::Mesh;

/// Creates a regular octahedron with its corners on the coordinate axes.
#[derive(Debug, Clone)]
pub struct MakeOctahedron {
    radius: f64,
    palette: FacePalette,
}

impl MakeOctahedron {
    /// Creates a new `MakeOctahedron` operation with the given
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
    /// shorter than the eight faces.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("octahedron radius", self.radius)?;
        let r = self.radius;
        let mesh = build_mesh(
            &[
                [r, 0.0, 0.0],
                [0.0, r, 0.0],
                [0.0, 0.0, r],
                [0.0, -r, 0.0],
                [0.0, 0.0, -r],
                [-r, 0.0, 0.0],
            ],
            &[
                &[0, 1, 2],
                &[0, 2, 3],
                &[0, 3, 4],
                &[0, 4, 1],
                &[5, 2, 1],
                &[5, 3, 2],
                &[5, 4, 3],
                &[5, 1, 4],
            ],
            &self.palette,
        )?;
        tracing::debug!(radius = r, "made octahedron");
        Ok(mesh)
    }
}
