use crate::color::Color;
use crate::error::{Result, TopologyError};
use crate::math::{triangle_normal, Point3, Vector3};

/// Opaque tag used to select a group of faces in later edits.
pub type Category = u32;

/// A flat polygon of a mesh.
///
/// The ring of vertex indices is closed implicitly: the last index connects
/// back to the first. Reversing the ring flips the normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    indices: Vec<usize>,
    /// Flat color of the whole face.
    pub color: Color,
    /// Selection tag, 0 unless set by a factory or an editor.
    pub category: Category,
    normal: Vector3,
}

impl Face {
    /// Creates a face with category 0.
    ///
    /// The normal is computed once the face is inserted into a
    /// [`Mesh`](super::Mesh); until then it is the zero vector.
    #[must_use]
    pub fn new(indices: Vec<usize>, color: Color) -> Self {
        Self {
            indices,
            color,
            category: 0,
            normal: Vector3::zeros(),
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// The vertex index ring.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of corners.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// The `i`th ring index, wrapping around the ring.
    ///
    /// Faces owned by a [`Mesh`](super::Mesh) always have at least three
    /// corners.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty, which only a face built with
    /// [`Face::new`] and never inserted into a mesh can be.
    #[must_use]
    pub fn corner(&self, i: usize) -> usize {
        self.indices[i % self.indices.len()]
    }

    /// Directed edges `(ring[i], ring[i + 1])`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// The cached unit normal, or zero if the face is degenerate.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// `true` if the first three corners do not span a plane.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::zeros()
    }

    /// Checks arity and index range against a vertex count.
    pub(crate) fn validate(&self, vertex_count: usize) -> Result<()> {
        if self.indices.len() < 3 {
            return Err(TopologyError::FaceTooSmall {
                arity: self.indices.len(),
            }
            .into());
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(TopologyError::IndexOutOfRange {
                index,
                vertex_count,
            }
            .into());
        }
        Ok(())
    }

    /// Recomputes the cached normal from the first three corners.
    ///
    /// Returns `false` and stores a zero normal if they are degenerate.
    /// The face must already be valid against `vertices`.
    pub(crate) fn refresh_normal(&mut self, vertices: &[Point3]) -> bool {
        let [a, b, c] = [0, 1, 2].map(|i| &vertices[self.indices[i]]);
        if let Some(n) = triangle_normal(a, b, c) {
            self.normal = n;
            true
        } else {
            self.normal = Vector3::zeros();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_wraps() {
        let f = Face::new(vec![4, 5, 6], Color::RED);
        assert_eq!(f.corner(3), 4);
        assert_eq!(f.corner(5), 6);
    }

    #[test]
    #[should_panic(expected = "remainder with a divisor of zero")]
    fn corner_of_empty_ring_panics() {
        let _ = Face::new(Vec::new(), Color::RED).corner(0);
    }

    #[test]
    fn edges_close_the_ring() {
        let f = Face::new(vec![0, 1, 2, 3], Color::RED);
        let edges: Vec<_> = f.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn validate_rejects_small_and_out_of_range() {
        assert!(Face::new(vec![0, 1], Color::RED).validate(3).is_err());
        assert!(Face::new(vec![0, 1, 3], Color::RED).validate(3).is_err());
        assert!(Face::new(vec![0, 1, 2], Color::RED).validate(3).is_ok());
    }

    #[test]
    fn new_face_has_category_zero() {
        let f = Face::new(vec![0, 1, 2], Color::RED);
        assert_eq!(f.category, 0);
        assert_eq!(f.with_category(7).category, 7);
    }
}
