use crate::error::{GeometryError, Result};

use super::{Matrix3, Point3, Vector3, TOLERANCE};

/// Returns a vector with the direction of `v` and the given `length`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has no direction.
pub fn normalized_to(v: &Vector3, length: f64) -> Result<Vector3> {
    let norm = v.norm();
    if norm < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v * (length / norm))
}

/// Rotates `v` about `axis` by `angle` radians.
///
/// Positive angles rotate counter-clockwise when looking down the axis
/// towards the origin. The axis does not need to be unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the axis is zero-length.
pub fn rotate_about(v: &Vector3, axis: &Vector3, angle: f64) -> Result<Vector3> {
    let len = axis.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(rotation_matrix(&(axis / len), angle) * v)
}

/// Builds a 3x3 rotation matrix around a unit axis by an angle (Rodrigues).
#[must_use]
#[rustfmt::skip]
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    )
}

/// Arithmetic mean of a set of points, or `None` if the set is empty.
///
/// This is the vertex average, which only matches the area centroid for
/// regular polygons.
pub fn mean_point<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Point3> {
    let mut sum = Vector3::zeros();
    let mut count = 0_u32;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    (count > 0).then(|| Point3::from(sum / f64::from(count)))
}

/// Unit normal of the corner `a`, `b`, `c`, computed as `(c - b) × (a - b)`.
///
/// Counter-clockwise winding seen from outside gives an outward normal.
/// Returns `None` when the three points are coincident or collinear.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Option<Vector3> {
    let n = (c - b).cross(&(a - b));
    let len = n.norm();
    (len >= TOLERANCE).then(|| n / len)
}
