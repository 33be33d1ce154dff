use std::collections::{HashMap, HashSet};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3, TOLERANCE};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Fan triangles over ring positions `0..arity`, all sharing corner 0.
pub(super) fn fan(arity: usize) -> Vec<[usize; 3]> {
    (1..arity.saturating_sub(1)).map(|i| [0, i, i + 1]).collect()
}

/// Triangulates a planar ring with a constrained Delaunay triangulation.
///
/// The ring is projected onto a basis `u`, `v` with `u × v` along the
/// ring's area vector, so the ring runs counter-clockwise in the plane and
/// every emitted triangle keeps its winding even when the first three
/// corners turn the other way. Returns triangles over ring positions. A
/// ring with no area falls back to [`fan`].
pub(super) fn constrained(ring: &[Point3]) -> Result<Vec<[usize; 3]>> {
    let Some((u, v)) = plane_basis(ring) else {
        return Ok(fan(ring.len()));
    };

    let origin = ring[0];
    let projected: Vec<_> = ring
        .iter()
        .map(|p| {
            let d = p - origin;
            SpadePoint2::new(d.dot(&u), d.dot(&v))
        })
        .collect();

    let mut cdt = Cdt::new();
    let (handles, positions) = insert_constraint_loop(&mut cdt, &projected)?;

    let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));
    for face in interior_faces(&cdt, &handles) {
        let [a, b, c] = cdt
            .face(face)
            .vertices()
            .map(|vh| positions.get(&vh.fix().index()).copied());
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => triangles.push([a, b, c]),
            _ => {
                return Err(
                    TessellationError::Failed("triangle uses a vertex outside the ring".into()).into(),
                )
            }
        }
    }
    Ok(triangles)
}

/// Sum of `p[i] × p[i + 1]` around the ring, twice its vector area.
fn area_vector(ring: &[Point3]) -> Vector3 {
    let Some(origin) = ring.first() else {
        return Vector3::zeros();
    };
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| (a - origin).cross(&(b - origin)))
        .sum()
}

fn plane_basis(ring: &[Point3]) -> Option<(Vector3, Vector3)> {
    let normal = area_vector(ring);
    let area = normal.norm();
    if area < TOLERANCE {
        return None;
    }
    let normal = normal / area;
    let edge = ring
        .iter()
        .map(|p| p - ring[0])
        .map(|d| d - normal * d.dot(&normal))
        .find(|d| d.norm() >= TOLERANCE)?;
    let u = edge.normalize();
    Some((u, normal.cross(&u)))
}

/// Inserts a closed polygon as constraint edges into the CDT.
///
/// Returns the vertex handle of every ring position, and a map from spade
/// vertex index to the first ring position that produced it; coincident
/// ring points share one vertex.
fn insert_constraint_loop(
    cdt: &mut Cdt,
    points: &[SpadePoint2<f64>],
) -> Result<(Vec<FixedVertexHandle>, HashMap<usize, usize>)> {
    let mut handles = Vec::with_capacity(points.len());
    let mut positions = HashMap::with_capacity(points.len());
    for (position, &pt) in points.iter().enumerate() {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        positions.entry(h.index()).or_insert(position);
        handles.push(h);
    }

    for (&from, &to) in handles.iter().zip(handles.iter().cycle().skip(1)) {
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed("face ring intersects itself".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok((handles, positions))
}

/// Collects the inner faces enclosed by a counter-clockwise constraint ring.
///
/// The face left of each ring edge is inside. Those faces seed a flood fill
/// that never crosses a constraint edge.
fn interior_faces(cdt: &Cdt, ring: &[FixedVertexHandle]) -> Vec<FixedFaceHandle<InnerTag>> {
    let mut seen = HashSet::new();
    let mut stack: Vec<FixedFaceHandle<InnerTag>> = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .filter_map(|(&from, &to)| cdt.get_edge_from_neighbors(from, to))
        .filter_map(|edge| edge.face().as_inner().map(|face| face.fix()))
        .collect();

    let mut interior = Vec::new();
    while let Some(face) = stack.pop() {
        if !seen.insert(face.index()) {
            continue;
        }
        interior.push(face);
        for edge in cdt.face(face).adjacent_edges() {
            if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                continue;
            }
            if let Some(neighbor) = edge.rev().face().as_inner() {
                stack.push(neighbor.fix());
            }
        }
    }
    interior
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn area(ring: &[Point3], triangles: &[[usize; 3]]) -> f64 {
        triangles
            .iter()
            .map(|&[a, b, c]| (ring[b] - ring[a]).cross(&(ring[c] - ring[a])).z * 0.5)
            .sum()
    }

    #[test]
    fn fan_shares_first_corner() {
        assert_eq!(fan(5), vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
        assert!(fan(2).is_empty());
    }

    #[test]
    fn square_produces_2_triangles() {
        let ring = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let tris = constrained(&ring).unwrap();
        assert_eq!(tris.len(), 2);
        approx::assert_relative_eq!(area(&ring, &tris), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn l_shape_concave_tessellates() {
        let ring = [
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        let tris = constrained(&ring).unwrap();
        assert_eq!(tris.len(), 4);
        // every triangle keeps the counter-clockwise winding, so no area
        // cancels out and none lies in the notch
        approx::assert_relative_eq!(area(&ring, &tris), 3.0, epsilon = 1e-12);
        for tri in &tris {
            assert!(area(&ring, &[*tri]) > 0.0);
        }
    }

    #[test]
    fn ring_starting_at_reflex_corner_keeps_winding() {
        // corner 1 is the notch at (1, 1), so the first three corners turn
        // clockwise while the ring as a whole runs counter-clockwise
        let ring = [
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
            p(2.0, 0.0),
        ];
        let tris = constrained(&ring).unwrap();
        assert_eq!(tris.len(), 4);
        approx::assert_relative_eq!(area(&ring, &tris), 3.0, epsilon = 1e-12);
        for tri in &tris {
            assert!(area(&ring, &[*tri]) > 0.0);
        }
    }

    #[test]
    fn area_vector_follows_ring_not_first_corners() {
        let ring = [p(2.0, 1.0), p(1.0, 1.0), p(1.0, 2.0), p(0.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)];
        approx::assert_relative_eq!(area_vector(&ring), Vector3::new(0.0, 0.0, 6.0), epsilon = 1e-12);
    }

    #[test]
    fn clockwise_ring_keeps_winding() {
        // clockwise seen from +Z, so it faces -Z
        let ring = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let tris = constrained(&ring).unwrap();
        assert_eq!(tris.len(), 2);
        approx::assert_relative_eq!(area(&ring, &tris), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_ring_falls_back_to_fan() {
        let ring = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert_eq!(constrained(&ring).unwrap(), vec![[0, 1, 2]]);
    }

    #[test]
    fn self_intersecting_ring_is_an_error() {
        let bowtie = [p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(constrained(&bowtie).is_err());
    }
}
