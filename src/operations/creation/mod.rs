mod make_cube;
mod make_cube_groups;
mod make_dodecahedron;
mod make_icosahedron;
mod make_octahedron;
mod make_ring;
mod make_tetrahedron;
mod make_truncated_cube;

pub use make_cube::{MakeCube, MakeCuboid};
pub use make_cube_groups::{
    MakeCubeCluster, MakeCubeCorners, MakeCubeCross, MakeCubeGlob, MakeRgbCubeCluster,
};
pub use make_dodecahedron::MakeDodecahedron;
pub use make_icosahedron::MakeIcosahedron;
pub use make_octahedron::MakeOctahedron;
pub use make_ring::{MakeRing, MakeTriRings};
pub use make_tetrahedron::{MakeDualTetrahedron, MakeTetrahedron};
pub use make_truncated_cube::{MakeSpaceStation, MakeTruncatedCube};

use crate::color::Color;
use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::{Face, Mesh};

/// Colors handed to a shape factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacePalette {
    /// One color for every face.
    Uniform(Color),
    /// One color per face, in the factory's face order.
    PerFace(Vec<Color>),
}

impl Default for FacePalette {
    fn default() -> Self {
        Self::Uniform(Color::WHITE)
    }
}

impl From<Color> for FacePalette {
    fn from(color: Color) -> Self {
        Self::Uniform(color)
    }
}

impl From<Vec<Color>> for FacePalette {
    fn from(colors: Vec<Color>) -> Self {
        Self::PerFace(colors)
    }
}

impl FacePalette {
    /// Expands the palette to exactly `face_count` colors.
    fn colors(&self, face_count: usize) -> Result<Vec<Color>> {
        match self {
            Self::Uniform(color) => Ok(vec![*color; face_count]),
            Self::PerFace(colors) if colors.len() >= face_count => {
                Ok(colors[..face_count].to_vec())
            }
            Self::PerFace(colors) => Err(OperationError::InvalidInput(format!(
                "palette has {} colors for {face_count} faces",
                colors.len()
            ))
            .into()),
        }
    }
}

/// Builds a mesh from literal coordinates and index rings.
fn build_mesh(vertices: &[[f64; 3]], rings: &[&[usize]], palette: &FacePalette) -> Result<Mesh> {
    let colors = palette.colors(rings.len())?;
    let vertices = vertices.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect();
    let faces = rings
        .iter()
        .zip(colors)
        .map(|(ring, color)| Face::new(ring.to_vec(), color))
        .collect();
    Mesh::new(vertices, faces)
}

/// Rejects sizes that are not positive and finite.
fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= TOLERANCE {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!("{name} must be positive, got {value}")).into())
    }
}
