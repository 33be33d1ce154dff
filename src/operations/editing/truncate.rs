//! Experimental corner truncation.
//!
//! Only the original faces are produced, shrunk away from their corners.
//! The faces that should close the cut-off corners are missing because the
//! order of the new corner vertices around each original vertex is not
//! determined yet, so the result has holes and its layout may change.

use crate::error::{GeometryError, Result};
use crate::mesh::{Face, Mesh};

/// Shrinks every face away from its corners into a new mesh.
///
/// Each corner of an n-sided face is replaced by two points, one on each
/// adjacent edge, `amount / 2` of the way along it. An amount of 0 keeps
/// the corners (as zero-length edges), 1 makes neighbouring cuts meet at
/// the edge midpoints. Colors and categories are kept.
#[derive(Debug, Clone, Copy)]
pub struct Truncate {
    amount: f64,
}

impl Truncate {
    /// Creates a new `Truncate` operation.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Executes the truncation, returning a new mesh.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `amount` is not in
    /// `[0, 1]`.
    pub fn execute(&self, original: &Mesh) -> Result<Mesh> {
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "amount",
                value: self.amount,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        let t = self.amount / 2.0;
        let source = original.vertices();
        let mut vertices = Vec::new();
        let mut faces = Vec::with_capacity(original.face_count());

        for face in original.faces() {
            let n = face.arity();
            let mut ring = Vec::with_capacity(2 * n);
            for i in 0..n {
                let here = source[face.corner(i)];
                let prev = source[face.corner(i + n - 1)];
                let next = source[face.corner(i + 1)];
                for target in [prev, next] {
                    vertices.push(here + (target - here) * t);
                    ring.push(vertices.len() - 1);
                }
            }
            faces.push(Face::new(ring, face.color).with_category(face.category));
        }

        tracing::warn!(
            faces = faces.len(),
            amount = self.amount,
            "experimental truncate produced an open mesh"
        );
        Mesh::new(vertices, faces)
    }
}
