use std::f64::consts::TAU;

use super::require_positive;
use crate::error::{OperationError, Result};
use crate::math::{Orientation, Placement, Vector3};
use crate::mesh::{CompositeMesh, Node};

/// Arranges copies of a shape in a circle around the X axis.
///
/// Copies sit in the YZ plane at equal angles, starting one step past
/// positive Z and ending on it. Each copy is turned with its position, so
/// the ring looks the same from every copy.
#[derive(Debug, Clone)]
pub struct MakeRing {
    shape: Node,
    radius: f64,
    count: u32,
}

impl MakeRing {
    /// Creates a new `MakeRing` operation placing `count` copies of `shape`
    /// at `radius` from the axis.
    #[must_use]
    pub fn new(shape: impl Into<Node>, radius: f64, count: u32) -> Self {
        Self {
            shape: shape.into(),
            radius,
            count,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the count is zero.
    pub fn execute(&self) -> Result<CompositeMesh> {
        require_positive("ring radius", self.radius)?;
        if self.count == 0 {
            return Err(OperationError::InvalidInput("ring needs at least one copy".into()).into());
        }

        let delta = TAU / f64::from(self.count);
        let mut orientation = Orientation::default();
        let mut ring = CompositeMesh::new();
        for step in 1..=self.count {
            let angle = delta * f64::from(step);
            let (sin, cos) = angle.sin_cos();
            orientation.pitch(-delta)?;
            ring.add(
                self.shape.clone(),
                Placement::new(Vector3::new(0.0, self.radius * sin, self.radius * cos), orientation),
            );
        }

        tracing::debug!(radius = self.radius, count = self.count, "made ring");
        Ok(ring)
    }
}

/// Three rings of the same shape, one around each axis.
#[derive(Debug, Clone)]
pub struct MakeTriRings {
    ring: MakeRing,
}

impl MakeTriRings {
    /// Creates a new `MakeTriRings` operation.
    #[must_use]
    pub fn new(shape: impl Into<Node>, radius: f64, count: u32) -> Self {
        Self {
            ring: MakeRing::new(shape, radius, count),
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the count is zero.
    pub fn execute(&self) -> Result<CompositeMesh> {
        let ring = self.ring.execute()?;
        let mut rings = CompositeMesh::new();
        for orientation in [
            Orientation::new(Vector3::x(), None)?,
            Orientation::new(Vector3::y(), None)?,
            Orientation::new(Vector3::z(), Some(Vector3::x()))?,
        ] {
            rings.add(ring.clone(), Placement::oriented(orientation));
        }
        Ok(rings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::Color;
    use crate::math::Point3;
    use crate::mesh::{Face, Mesh, MeshStore};

    /// A marker triangle whose first corner sits one unit ahead.
    fn marker(store: &mut MeshStore) -> crate::mesh::MeshId {
        let mesh = Mesh::new(
            vec![
                Point3::new(0.0, 0.0, -1.0),
                Point3::new(0.1, 0.0, 0.0),
                Point3::new(0.0, 0.1, 0.0),
            ],
            vec![Face::new(vec![0, 1, 2], Color::WHITE)],
        )
        .unwrap();
        store.insert(mesh)
    }

    #[test]
    fn copies_sit_on_circle_facing_center() {
        let mut store = MeshStore::new();
        let id = marker(&mut store);
        let ring = MakeRing::new(id, 5.0, 4).execute().unwrap();
        assert_eq!(ring.leaf_count(), 4);

        let expected = [
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(0.0, -5.0, 0.0),
            Vector3::new(0.0, 0.0, 5.0),
        ];
        for ((_, placement), position) in ring.children().iter().zip(expected) {
            assert_relative_eq!(placement.position, position, epsilon = 1e-12);
        }

        let flat = ring.flatten(&store).unwrap();
        for copy in 0..4 {
            let ahead = flat.vertices()[copy * 3];
            assert_relative_eq!(ahead.coords.norm(), 4.0, epsilon = 1e-12);
            assert_relative_eq!(ahead.x, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn tri_rings_cover_three_planes() {
        let mut store = MeshStore::new();
        let id = marker(&mut store);
        let rings = MakeTriRings::new(id, 3.0, 6).execute().unwrap();
        assert_eq!(rings.leaf_count(), 18);

        let flat = rings.flatten(&store).unwrap();
        // each ring is flat in one plane through the origin
        for (ring, axis) in [Vector3::z(), Vector3::x(), Vector3::y()].into_iter().enumerate() {
            for copy in 0..6 {
                let ahead = flat.vertices()[(ring * 6 + copy) * 3];
                assert_relative_eq!(ahead.coords.dot(&axis), 0.0, epsilon = 1e-12);
                assert_relative_eq!(ahead.coords.norm(), 2.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn empty_ring_is_rejected() {
        let mut store = MeshStore::new();
        let id = marker(&mut store);
        assert!(MakeRing::new(id, 1.0, 0).execute().is_err());
        assert!(MakeRing::new(id, 0.0, 3).execute().is_err());
    }
}
