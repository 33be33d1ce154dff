use super::{build_mesh, require_positive, FacePalette};
use crate::error::Result;
use crate::mesh::Mesh;

const CUBOID_FACES: [&[usize]; 6] = [
    &[0, 1, 3, 2],
    &[4, 6, 7, 5],
    &[7, 3, 1, 5],
    &[0, 2, 6, 4],
    &[3, 7, 6, 2],
    &[1, 0, 4, 5],
];

/// Creates an axis-aligned box centered on the origin.
///
/// Faces come in the order -X, +X, +Z, -Z, +Y, -Y.
#[derive(Debug, Clone)]
pub struct MakeCuboid {
    size: [f64; 3],
    palette: FacePalette,
}

impl MakeCuboid {
    /// Creates a new `MakeCuboid` operation with the given edge lengths
    /// along X, Y and Z.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            size: [x, y, z],
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
    /// Returns an error if any edge length is not positive or the palette is
    /// shorter than the six faces.
    pub fn execute(&self) -> Result<Mesh> {
        for (axis, length) in ["x", "y", "z"].into_iter().zip(self.size) {
            require_positive(&format!("cuboid {axis} length"), length)?;
        }
        let [x, y, z] = self.size.map(|length| length / 2.0);

        let mut corners = Vec::with_capacity(8);
        for cx in [-x, x] {
            for cy in [-y, y] {
                for cz in [-z, z] {
                    corners.push([cx, cy, cz]);
                }
            }
        }

        let mesh = build_mesh(&corners, &CUBOID_FACES, &self.palette)?;
        tracing::debug!(size = ?self.size, "made cuboid");
        Ok(mesh)
    }
}

/// Creates a cube centered on the origin.
#[derive(Debug, Clone)]
pub struct MakeCube {
    edge: f64,
    palette: FacePalette,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation with the given edge length.
    #[must_use]
    pub fn new(edge: f64) -> Self {
        Self {
            edge,
            palette: FacePalette::default(),
        }
    }

    /// Creates a cube whose corners lie at `radius` from the center.
    #[must_use]
    pub fn from_radius(radius: f64) -> Self {
        Self::new(2.0 * radius / 3.0_f64.sqrt())
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
    /// Returns an error if the edge is not positive or the palette is
    /// shorter than the six faces.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("cube edge", self.edge)?;
        MakeCuboid::new(self.edge, self.edge, self.edge)
            .palette(self.palette.clone())
            .execute()
    }
}
