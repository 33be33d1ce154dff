use crate::error::Result;
use crate::mesh::{Category, Face, Mesh};
use crate::operations::FaceSelection;

/// Raises a pyramid on faces, in place.
///
/// Each selected n-sided face is replaced by `n` triangles meeting at a new
/// apex. The apex sits above the face's vertex mean, along the face normal,
/// at `height` times the distance from that mean to the first corner. A
/// height of zero gives a flat fan in the original plane and negative
/// heights push the apex inwards.
///
/// The vertex mean only matches the true centroid for regular polygons.
#[derive(Debug, Clone, Default)]
pub struct Stellate {
    selection: FaceSelection,
    height: f64,
}

impl Stellate {
    /// Creates a `Stellate` operation over all faces.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            selection: FaceSelection::All,
            height,
        }
    }

    /// Restricts the operation to a selection of faces.
    #[must_use]
    pub fn faces(mut self, selection: impl Into<FaceSelection>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Executes the stellation, modifying the mesh in place.
    ///
    /// Returns the category given to every new triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection names a face that does not exist.
    /// The mesh is unchanged in that case.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<Category> {
        let targets = self.selection.resolve(mesh)?;
        let category = mesh.next_free_category();

        for &index in &targets {
            let face = mesh.face(index)?.clone();
            let centroid = mesh.face_centroid(index)?;
            let first = mesh.vertex(face.corner(0))?;
            let rise = (centroid - first).norm() * self.height;
            let apex = mesh.add_vertex(centroid + face.normal() * rise);

            let new_faces = face
                .edges()
                .map(|(a, b)| Face::new(vec![a, b, apex], face.color).with_category(category))
                .collect();
            mesh.replace_face(index, new_faces)?;
        }

        tracing::debug!(faces = targets.len(), category, height = self.height, "stellated");
        Ok(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeCube, MakeOctahedron};

    #[test]
    fn cube_face_and_vertex_counts() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        Stellate::new(1.0).execute(&mut mesh).unwrap();
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.face_count(), 24);
        mesh.validate().unwrap();
    }

    #[test]
    fn apex_height_scales_with_corner_distance() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        // right face, centered on (1, 0, 0); corners are sqrt(2) away
        Stellate::new(0.5).faces(vec![1]).execute(&mut mesh).unwrap();
        let apex = mesh.vertices()[8];
        assert_relative_eq!(
            apex,
            Point3::new(1.0 + 0.5 * 2.0_f64.sqrt(), 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_height_is_flat_fan() {
        let mut mesh = MakeOctahedron::new(1.0).execute().unwrap();
        let normal = *mesh.faces()[0].normal();
        Stellate::new(0.0).faces(vec![0]).execute(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 8 + 2);
        for i in [0, 8, 9] {
            assert_relative_eq!(*mesh.faces()[i].normal(), normal, epsilon = 1e-9);
        }
    }

    #[test]
    fn triangles_inherit_color_and_share_category() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        let color = mesh.faces()[3].color;
        let category = Stellate::new(1.0).faces(vec![3]).execute(&mut mesh).unwrap();
        let tagged = mesh.faces_with_category(Some(category));
        assert_eq!(tagged.len(), 4);
        assert!(tagged.iter().all(|&i| mesh.faces()[i].color == color));
        assert_eq!(mesh.face_count(), 6 + 3);
    }
}
