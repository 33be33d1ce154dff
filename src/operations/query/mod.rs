mod area;
mod bounding_box;
mod is_valid;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::{IsClosed, IsValid};
pub use volume::Volume;

use crate::math::Point3;
use crate::mesh::Mesh;

/// Fan triangles of every face, as vertex positions.
fn fan_triangles(mesh: &Mesh) -> impl Iterator<Item = [Point3; 3]> + '_ {
    let vertices = mesh.vertices();
    mesh.faces().iter().flat_map(move |face| {
        let first = vertices[face.corner(0)];
        (1..face.arity() - 1)
            .map(move |i| [first, vertices[face.corner(i)], vertices[face.corner(i + 1)]])
    })
}
