use thiserror::Error;

/// Top-level error type for the polykern mesh kernel.
#[derive(Debug, Error)]
pub enum PolyError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the face-vertex structure of a mesh.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("face has {arity} indices, at least 3 are required")]
    FaceTooSmall { arity: usize },

    #[error("vertex index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("face index {index} is out of range for {face_count} faces")]
    FaceNotFound { index: usize, face_count: usize },

    #[error("face replacement list is empty")]
    EmptyReplacement,

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to mesh operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PolyError`].
pub type Result<T> = std::result::Result<T, PolyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_display_transparently() {
        let err: PolyError = TopologyError::IndexOutOfRange {
            index: 9,
            vertex_count: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "vertex index 9 is out of range for 4 vertices"
        );

        let err: PolyError = GeometryError::ZeroVector.into();
        assert!(matches!(err, PolyError::Geometry(GeometryError::ZeroVector)));
    }
}
