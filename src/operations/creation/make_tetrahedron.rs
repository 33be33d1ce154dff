use super::{build_mesh, require_positive, FacePalette};
use crate::color::Color;
use crate::error::Result;
use crate::math::{Orientation, Placement, Vector3};
use crate::mesh::{CompositeMesh, Mesh, MeshStore};

/// Creates a regular tetrahedron centered on the origin.
#[derive(Debug, Clone)]
pub struct MakeTetrahedron {
    radius: f64,
    palette: FacePalette,
}

impl MakeTetrahedron {
    /// Creates a new `MakeTetrahedron` operation with the given
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
    /// shorter than the four faces.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("tetrahedron radius", self.radius)?;
        let s = self.radius / 3.0_f64.sqrt();
        let mesh = build_mesh(
            &[[s, s, s], [-s, -s, s], [-s, s, -s], [s, -s, -s]],
            &[&[0, 2, 1], &[1, 3, 0], &[2, 3, 1], &[0, 3, 2]],
            &self.palette,
        )?;
        tracing::debug!(radius = self.radius, "made tetrahedron");
        Ok(mesh)
    }
}

/// Creates two interpenetrating tetrahedra.
///
/// The second copy faces positive X, which turns it a quarter turn about
/// the vertical axis so its corners fill the cube corners the first one
/// leaves free.
#[derive(Debug, Clone)]
pub struct MakeDualTetrahedron {
    radius: f64,
    first: Color,
    second: Option<Color>,
}

impl MakeDualTetrahedron {
    /// Creates a new `MakeDualTetrahedron` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            first: Color::RED,
            second: None,
        }
    }

    /// Sets the color of each tetrahedron. The second defaults to the
    /// inverse of the first.
    #[must_use]
    pub fn colors(mut self, first: Color, second: Option<Color>) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    /// Executes the operation, storing both tetrahedra in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        let second = self.second.unwrap_or_else(|| self.first.inverted());
        let a = store.insert(MakeTetrahedron::new(self.radius).palette(self.first).execute()?);
        let b = store.insert(MakeTetrahedron::new(self.radius).palette(second).execute()?);

        let mut composite = CompositeMesh::new();
        composite.add(a, Placement::default());
        composite.add(b, Placement::oriented(Orientation::new(Vector3::x(), None)?));
        tracing::debug!(radius = self.radius, "made dual tetrahedron");
        Ok(composite)
    }
}
