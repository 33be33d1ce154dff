mod extrude;
mod normalize;
mod stellate;
mod subdivide;
#[cfg(feature = "experimental")]
mod truncate;

pub use extrude::{Extrude, ExtrudeOutcome};
pub use normalize::Normalize;
pub use stellate::Stellate;
pub use subdivide::{Subdivide, SubdivideOutcome};
#[cfg(feature = "experimental")]
pub use truncate::Truncate;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::mesh::Mesh;
    use crate::operations::creation::{
        MakeCube, MakeDodecahedron, MakeIcosahedron, MakeOctahedron, MakeTetrahedron,
        MakeTruncatedCube,
    };
    use crate::operations::FaceSelection;

    fn zoo() -> Vec<Mesh> {
        vec![
            MakeTetrahedron::new(1.0).execute().unwrap(),
            MakeCube::new(2.0).execute().unwrap(),
            MakeOctahedron::new(1.0).execute().unwrap(),
            MakeIcosahedron::new(1.0).execute().unwrap(),
            MakeDodecahedron::new(1.0).execute().unwrap(),
            MakeTruncatedCube::new(2.0, 0.67).execute().unwrap(),
        ]
    }

    #[test]
    fn indices_stay_valid_through_edit_chains() {
        for mut mesh in zoo() {
            let sub = Subdivide::new().execute(&mut mesh).unwrap();
            mesh.validate().unwrap();
            Stellate::new(0.3)
                .faces(FaceSelection::Category(sub.center_category))
                .execute(&mut mesh)
                .unwrap();
            mesh.validate().unwrap();
            let ext = Extrude::new(0.2)
                .faces(FaceSelection::Category(sub.corner_category))
                .execute(&mut mesh)
                .unwrap();
            mesh.validate().unwrap();
            Subdivide::new()
                .faces(FaceSelection::Category(ext.end_category))
                .execute(&mut mesh)
                .unwrap();
            mesh.validate().unwrap();
            Normalize::new(1.5).execute(&mut mesh).unwrap();
            mesh.validate().unwrap();
            for v in mesh.vertices() {
                assert_relative_eq!(v.coords.norm(), 1.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn subdivide_counts_over_zoo() {
        for mut mesh in zoo() {
            let faces_before = mesh.face_count();
            let corners: usize = mesh.faces().iter().map(|f| f.arity()).sum();
            let edges = mesh.edges().len();
            let verts_before = mesh.vertex_count();

            let outcome = Subdivide::new().execute(&mut mesh).unwrap();

            assert_eq!(mesh.face_count(), corners + faces_before);
            assert_eq!(mesh.vertex_count(), verts_before + edges);
            assert_eq!(
                mesh.faces_with_category(Some(outcome.center_category)).len(),
                faces_before
            );
            assert_eq!(
                mesh.faces_with_category(Some(outcome.corner_category)).len(),
                corners
            );
        }
    }

    #[test]
    fn stellate_counts_over_zoo() {
        for mut mesh in zoo() {
            let faces_before = mesh.face_count();
            let corners: usize = mesh.faces().iter().map(|f| f.arity()).sum();
            let verts_before = mesh.vertex_count();
            Stellate::new(0.5).execute(&mut mesh).unwrap();
            assert_eq!(mesh.face_count(), corners);
            assert_eq!(mesh.vertex_count(), verts_before + faces_before);
        }
    }

    #[test]
    fn edits_only_touch_selected_category() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        let sub = Subdivide::new().faces(vec![0]).execute(&mut mesh).unwrap();
        let untouched: Vec<_> = mesh.faces_with_category(Some(0));
        assert_eq!(untouched.len(), 5);

        let before: Vec<_> = untouched.iter().map(|&i| mesh.faces()[i].clone()).collect();
        Stellate::new(1.0)
            .faces(FaceSelection::Category(sub.center_category))
            .execute(&mut mesh)
            .unwrap();
        let after: Vec<_> = untouched.iter().map(|&i| mesh.faces()[i].clone()).collect();
        assert_eq!(before, after);
    }
}
