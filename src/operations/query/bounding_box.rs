use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::mesh::Mesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Edge lengths along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a mesh's vertices.
///
/// Unreferenced vertices are included.
pub struct BoundingBox<'a> {
    mesh: &'a Mesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let (first, rest) = self
            .mesh
            .vertices()
            .split_first()
            .ok_or_else(|| OperationError::InvalidInput("mesh has no vertices".into()))?;
        Ok(rest.iter().fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |acc, v| Aabb {
                min: acc.min.inf(v),
                max: acc.max.sup(v),
            },
        ))
    }
}
