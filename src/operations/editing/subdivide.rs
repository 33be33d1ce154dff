use std::collections::HashMap;

use crate::color::Color;
use crate::error::Result;
use crate::mesh::{Category, Face, Mesh};
use crate::operations::FaceSelection;

/// Categories allocated by a [`Subdivide`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdivideOutcome {
    /// Tag of the corner faces, which keep the original colors.
    pub corner_category: Category,
    /// Tag of the central faces, which use the secondary color.
    pub center_category: Category,
}

/// Cuts the corners off faces, in place.
///
/// ```text
///                  v0
///                  /\
///                 /  \
///          mid[0]/----\mid[2]
///               / \  / \
///              /___\/___\
///            v1  mid[1]  v2
/// ```
///
/// An n-sided face becomes `n` corner triangles plus one n-sided center
/// face built from the edge midpoints. Midpoints are shared between faces
/// edited in the same call, so every distinct edge gains exactly one vertex.
#[derive(Debug, Clone)]
pub struct Subdivide {
    selection: FaceSelection,
    secondary_color: Color,
}

impl Default for Subdivide {
    fn default() -> Self {
        Self {
            selection: FaceSelection::All,
            secondary_color: Color::GREY,
        }
    }
}

impl Subdivide {
    /// Creates a `Subdivide` operation over all faces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the operation to a selection of faces.
    #[must_use]
    pub fn faces(mut self, selection: impl Into<FaceSelection>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Sets the color of the new center faces.
    #[must_use]
    pub fn secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = color;
        self
    }

    /// Executes the subdivision, modifying the mesh in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection names a face that does not exist.
    /// The mesh is unchanged in that case.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<SubdivideOutcome> {
        let targets = self.selection.resolve(mesh)?;
        let categories = mesh.next_free_categories(2);
        let outcome = SubdivideOutcome {
            corner_category: categories[0],
            center_category: categories[1],
        };

        let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
        for &index in &targets {
            let face = mesh.face(index)?.clone();
            let new_faces = self.subdivide_face(mesh, &face, &mut midpoints, outcome);
            mesh.replace_face(index, new_faces)?;
        }

        tracing::debug!(
            faces = targets.len(),
            new_vertices = midpoints.len(),
            corner_category = outcome.corner_category,
            center_category = outcome.center_category,
            "subdivided"
        );
        Ok(outcome)
    }

    fn subdivide_face(
        &self,
        mesh: &mut Mesh,
        face: &Face,
        midpoints: &mut HashMap<(usize, usize), usize>,
        outcome: SubdivideOutcome,
    ) -> Vec<Face> {
        let n = face.arity();
        let mids: Vec<usize> = face
            .edges()
            .map(|(a, b)| midpoint_index(mesh, midpoints, a, b))
            .collect();

        let mut new_faces = Vec::with_capacity(n + 1);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            new_faces.push(
                Face::new(vec![face.corner(i), mids[i], mids[prev]], face.color)
                    .with_category(outcome.corner_category),
            );
        }
        new_faces.push(
            Face::new(mids, self.secondary_color).with_category(outcome.center_category),
        );
        new_faces
    }
}

/// Index of the midpoint vertex of edge `a`-`b`, added on first use.
fn midpoint_index(
    mesh: &mut Mesh,
    midpoints: &mut HashMap<(usize, usize), usize>,
    a: usize,
    b: usize,
) -> usize {
    let key = (a.min(b), a.max(b));
    *midpoints.entry(key).or_insert_with(|| {
        let vertices = mesh.vertices();
        let mid = nalgebra::center(&vertices[a], &vertices[b]);
        mesh.add_vertex(mid)
    })
}
