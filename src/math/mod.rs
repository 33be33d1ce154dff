mod orientation;
mod placement;
mod vector;

pub use orientation::Orientation;
pub use placement::Placement;
pub(crate) use placement::transform_point;
pub use vector::{mean_point, normalized_to, rotate_about, rotation_matrix, triangle_normal};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
