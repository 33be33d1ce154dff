use super::require_positive;
use crate::color::Color;
use crate::error::{GeometryError, Result};
use crate::math::Point3;
use crate::mesh::{Category, Face, Mesh};

const OCTAGONS: [[usize; 8]; 6] = [
    [1, 2, 5, 4, 10, 11, 8, 7],
    [14, 13, 19, 20, 23, 22, 16, 17],
    [22, 21, 9, 10, 4, 3, 15, 16],
    [0, 1, 7, 6, 18, 19, 13, 12],
    [11, 9, 21, 23, 20, 18, 6, 8],
    [3, 5, 2, 0, 12, 14, 17, 15],
];

const CORNERS: [[usize; 3]; 8] = [
    [0, 2, 1],
    [3, 4, 5],
    [6, 7, 8],
    [9, 11, 10],
    [12, 13, 14],
    [15, 17, 16],
    [18, 20, 19],
    [21, 22, 23],
];

/// Category given to the triangles left by cutting off the cube's corners.
pub const CORNER_CATEGORY: Category = 1;

/// Creates a cube with its eight corners cut off.
///
/// The six octagons keep category 0 and come first, followed by the eight
/// corner triangles in [`CORNER_CATEGORY`]. Corner vertices are grouped in
/// threes, one group per cube corner.
#[derive(Debug, Clone)]
pub struct MakeTruncatedCube {
    edge: f64,
    truncation: f64,
    primary: Color,
    secondary: Option<Color>,
}

impl MakeTruncatedCube {
    /// Creates a new `MakeTruncatedCube` operation.
    ///
    /// `truncation` is the fraction of each half edge that is cut away: 0
    /// leaves a cube with zero-area corner triangles, 1 cuts to the edge
    /// midpoints.
    #[must_use]
    pub fn new(edge: f64, truncation: f64) -> Self {
        Self {
            edge,
            truncation,
            primary: Color::WHITE,
            secondary: None,
        }
    }

    /// Sets the octagon color and, optionally, the corner color.
    ///
    /// Corners default to the inverse of the octagon color.
    #[must_use]
    pub fn colors(mut self, primary: Color, secondary: Option<Color>) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not positive or
    /// [`GeometryError::ParameterOutOfRange`] if the truncation is outside
    /// `[0, 1]`.
    pub fn execute(&self) -> Result<Mesh> {
        require_positive("truncated cube edge", self.edge)?;
        if !(0.0..=1.0).contains(&self.truncation) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "truncation",
                value: self.truncation,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        let half = self.edge / 2.0;
        let cut = half - half * self.truncation;
        let mut vertices = Vec::with_capacity(24);
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    vertices.push(Point3::new(sx * cut, sy * half, sz * half));
                    vertices.push(Point3::new(sx * half, sy * cut, sz * half));
                    vertices.push(Point3::new(sx * half, sy * half, sz * cut));
                }
            }
        }

        let secondary = self.secondary.unwrap_or_else(|| self.primary.inverted());
        let faces = OCTAGONS
            .iter()
            .map(|ring| Face::new(ring.to_vec(), self.primary))
            .chain(CORNERS.iter().map(|ring| {
                Face::new(ring.to_vec(), secondary).with_category(CORNER_CATEGORY)
            }))
            .collect();

        let mesh = Mesh::new(vertices, faces)?;
        tracing::debug!(
            edge = self.edge,
            truncation = self.truncation,
            "made truncated cube"
        );
        Ok(mesh)
    }
}

/// Category of the door quad on [`MakeSpaceStation`].
pub const DOOR_CATEGORY: Category = 2;

const DOOR_HALF_HEIGHT: f64 = 0.075;
const DOOR_HALF_WIDTH: f64 = 0.25;

/// Creates an almost fully truncated cube with a black door quad floating
/// just off its +X octagon.
///
/// Octagons and corners share a grey-cyan color. The door comes last, in
/// [`DOOR_CATEGORY`].
#[derive(Debug, Clone)]
pub struct MakeSpaceStation {
    edge: f64,
}

impl MakeSpaceStation {
    /// Creates a new `MakeSpaceStation` operation.
    #[must_use]
    pub fn new(edge: f64) -> Self {
        Self { edge }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        let hull = Color::GREY.tinted(Color::CYAN, 0.5);
        let mut mesh = MakeTruncatedCube::new(self.edge, 0.999)
            .colors(hull, Some(hull))
            .execute()?;

        let half = self.edge / 2.0;
        let x = half * 1.001;
        let (h, w) = (half * DOOR_HALF_HEIGHT, half * DOOR_HALF_WIDTH);
        let door = [(-h, w), (-h, -w), (h, -w), (h, w)]
            .map(|(y, z)| mesh.add_vertex(Point3::new(x, y, z)));
        mesh.add_face(Face::new(door.to_vec(), Color::BLACK).with_category(DOOR_CATEGORY))?;
        Ok(mesh)
    }
}
