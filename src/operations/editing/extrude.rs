use crate::error::Result;
use crate::mesh::{Category, Face, Mesh};
use crate::operations::FaceSelection;

/// Categories allocated by an [`Extrude`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtrudeOutcome {
    /// Tag of the side quads, colored with the inverse of the source face.
    pub side_category: Category,
    /// Tag of the end caps, which keep the source color.
    pub end_category: Category,
}

/// Pushes faces out along their normals, in place.
///
/// Each selected n-sided face is copied `offset` along its normal to form an
/// end cap, and the gap is closed with `n` side quads. The faces are not
/// shared with neighbours, so extruding two adjacent faces leaves an open
/// seam between their side walls.
#[derive(Debug, Clone, Default)]
pub struct Extrude {
    selection: FaceSelection,
    offset: f64,
}

impl Extrude {
    /// Creates an `Extrude` operation over all faces.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self {
            selection: FaceSelection::All,
            offset,
        }
    }

    /// Restricts the operation to a selection of faces.
    #[must_use]
    pub fn faces(mut self, selection: impl Into<FaceSelection>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Executes the extrusion, modifying the mesh in place.
    ///
    /// A zero offset is allowed: the side quads collapse onto the face
    /// boundary and get degenerate normals.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection names a face that does not exist.
    /// The mesh is unchanged in that case.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<ExtrudeOutcome> {
        let targets = self.selection.resolve(mesh)?;
        let categories = mesh.next_free_categories(2);
        let outcome = ExtrudeOutcome {
            side_category: categories[0],
            end_category: categories[1],
        };

        for &index in &targets {
            let face = mesh.face(index)?.clone();
            let displacement = face.normal() * self.offset;

            // End cap vertices, one per corner
            let mut cap = Vec::with_capacity(face.arity());
            for &i in face.indices() {
                let moved = mesh.vertex(i)? + displacement;
                cap.push(mesh.add_vertex(moved));
            }

            // Side faces: each edge of the original ring creates a quad
            let n = face.arity();
            let side_color = face.color.inverted();
            let mut new_faces = Vec::with_capacity(n + 1);
            for i in 0..n {
                let j = (i + 1) % n;
                let quad = vec![face.corner(i), face.corner(j), cap[j], cap[i]];
                new_faces.push(Face::new(quad, side_color).with_category(outcome.side_category));
            }
            new_faces.push(Face::new(cap, face.color).with_category(outcome.end_category));

            mesh.replace_face(index, new_faces)?;
        }

        tracing::debug!(
            faces = targets.len(),
            offset = self.offset,
            side_category = outcome.side_category,
            end_category = outcome.end_category,
            "extruded"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeCube;

    #[test]
    fn one_cube_face_adds_four_faces_and_vertices() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        Extrude::new(1.5).faces(vec![4]).execute(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 10);
        assert_eq!(mesh.vertex_count(), 12);
        mesh.validate().unwrap();
    }

    #[test]
    fn cap_moves_along_normal_and_keeps_color() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        let color = mesh.faces()[4].color;
        let outcome = Extrude::new(1.5).faces(vec![4]).execute(&mut mesh).unwrap();

        let ends = mesh.faces_with_category(Some(outcome.end_category));
        assert_eq!(ends.len(), 1);
        let end = &mesh.faces()[ends[0]];
        assert_eq!(end.color, color);
        assert_relative_eq!(*end.normal(), Vector3::y(), epsilon = 1e-12);
        for &i in end.indices() {
            assert_relative_eq!(mesh.vertices()[i].y, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn sides_are_inverted_and_face_outwards() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        let color = mesh.faces()[4].color;
        let outcome = Extrude::new(1.0).faces(vec![4]).execute(&mut mesh).unwrap();

        let sides = mesh.faces_with_category(Some(outcome.side_category));
        assert_eq!(sides.len(), 4);
        // the first side takes over the original slot
        assert_eq!(sides[0], 4);
        for &i in &sides {
            let face = &mesh.faces()[i];
            assert_eq!(face.color, color.inverted());
            let centroid = mesh.face_centroid(i).unwrap();
            // outward: the normal points away from the cube's vertical axis
            let radial = Vector3::new(centroid.x, 0.0, centroid.z);
            assert!(face.normal().dot(&radial) > 0.0);
        }
    }

    #[test]
    fn zero_offset_is_well_defined() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        Extrude::new(0.0).faces(vec![0]).execute(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 10);
        mesh.validate().unwrap();
        assert!(mesh.faces()[0].is_degenerate());
        assert!(!mesh.faces().last().unwrap().is_degenerate());
    }

    #[test]
    fn extrude_all_faces() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        let outcome = Extrude::new(0.5).execute(&mut mesh).unwrap();
        assert_eq!(mesh.face_count(), 6 * 5);
        assert_eq!(mesh.vertex_count(), 8 + 6 * 4);
        assert_eq!(mesh.faces_with_category(Some(outcome.end_category)).len(), 6);
        assert_eq!(mesh.faces_with_category(Some(outcome.side_category)).len(), 24);
    }
}
