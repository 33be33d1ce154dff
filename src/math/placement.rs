use super::{Matrix4, Orientation, Point3, Vector3};

/// Position and orientation of a child inside a composite mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    /// Offset of the child's origin from the parent's origin.
    pub position: Vector3,
    /// Rotation of the child's local axes.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement from a position and an orientation.
    #[must_use]
    pub fn new(position: Vector3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            orientation: Orientation::default(),
        }
    }

    /// A pure rotation about the parent's origin.
    #[must_use]
    pub fn oriented(orientation: Orientation) -> Self {
        Self {
            position: Vector3::zeros(),
            orientation,
        }
    }

    /// Homogeneous matrix mapping local coordinates into the parent frame.
    ///
    /// Local X maps to `right`, local Y to `up` and local Z to `-forward`, so
    /// the default orientation yields the identity.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> Matrix4 {
        let r = self.orientation.right();
        let u = self.orientation.up();
        let f = self.orientation.forward();
        let p = &self.position;

        Matrix4::new(
            r.x, u.x, -f.x, p.x,
            r.y, u.y, -f.y, p.y,
            r.z, u.z, -f.z, p.z,
            0.0, 0.0,  0.0, 1.0,
        )
    }
}

/// Transforms a point by a 4x4 matrix.
pub(crate) fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}
