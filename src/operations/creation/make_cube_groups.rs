use std::collections::HashMap;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{require_positive, FacePalette, MakeCube};
use crate::color::Color;
use crate::error::{OperationError, Result};
use crate::math::{Orientation, Placement, Vector3, TOLERANCE};
use crate::mesh::{CompositeMesh, MeshId, MeshStore};

/// A large cube with a half-size cube centered on each of its faces.
#[derive(Debug, Clone)]
pub struct MakeCubeCross {
    edge: f64,
    body: Color,
    arms: Color,
}

impl MakeCubeCross {
    /// Creates a new `MakeCubeCross` operation.
    #[must_use]
    pub fn new(edge: f64, body: Color, arms: Color) -> Self {
        Self { edge, body, arms }
    }

    /// Executes the operation. The six small cubes share one stored mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not positive.
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        require_positive("cube cross edge", self.edge)?;
        let body = store.insert(MakeCube::new(self.edge).palette(self.body).execute()?);
        let arm = store.insert(MakeCube::new(self.edge / 2.0).palette(self.arms).execute()?);

        let mut cross = CompositeMesh::new();
        cross.add(body, Placement::default());
        for axis in [
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
            -Vector3::x(),
            -Vector3::y(),
            -Vector3::z(),
        ] {
            cross.add(arm, Placement::at(axis * (self.edge / 2.0)));
        }
        Ok(cross)
    }
}

/// A large cube with a half-size cube centered on each of its corners.
#[derive(Debug, Clone)]
pub struct MakeCubeCorners {
    edge: f64,
    body: Color,
    corners: Color,
}

impl MakeCubeCorners {
    /// Creates a new `MakeCubeCorners` operation.
    #[must_use]
    pub fn new(edge: f64, body: Color, corners: Color) -> Self {
        Self {
            edge,
            body,
            corners,
        }
    }

    /// Executes the operation. The eight small cubes share one stored mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not positive.
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        require_positive("cube corners edge", self.edge)?;
        let body = store.insert(MakeCube::new(self.edge).palette(self.body).execute()?);
        let corner = store.insert(MakeCube::new(self.edge / 2.0).palette(self.corners).execute()?);

        let half = self.edge / 2.0;
        let mut group = CompositeMesh::new();
        group.add(body, Placement::default());
        for x in [-half, half] {
            for y in [-half, half] {
                for z in [-half, half] {
                    group.add(corner, Placement::at(Vector3::new(x, y, z)));
                }
            }
        }
        Ok(group)
    }
}

/// Cubes at arbitrary positions, each with its own color.
#[derive(Debug, Clone)]
pub struct MakeCubeCluster {
    locations: Vec<(Vector3, Color)>,
    edge: f64,
}

impl MakeCubeCluster {
    /// Creates a new `MakeCubeCluster` operation from cube centers and
    /// colors.
    #[must_use]
    pub fn new(locations: impl IntoIterator<Item = (Vector3, Color)>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            edge: 1.0,
        }
    }

    /// Sets the cube edge length. Defaults to 1.
    #[must_use]
    pub fn edge(mut self, edge: f64) -> Self {
        self.edge = edge;
        self
    }

    /// Executes the operation. Cubes of the same color share one stored
    /// mesh.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are no locations or
    /// the edge is not positive.
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        require_positive("cube cluster edge", self.edge)?;
        if self.locations.is_empty() {
            return Err(OperationError::InvalidInput("cube cluster needs at least one cube".into()).into());
        }

        let mut cubes: HashMap<Color, MeshId> = HashMap::new();
        let mut cluster = CompositeMesh::new();
        for &(position, color) in &self.locations {
            let id = match cubes.get(&color) {
                Some(&id) => id,
                None => {
                    let id = store.insert(MakeCube::new(self.edge).palette(color).execute()?);
                    cubes.insert(color, id);
                    id
                }
            };
            cluster.add(id, Placement::at(position));
        }

        tracing::debug!(
            cubes = self.locations.len(),
            meshes = cubes.len(),
            "made cube cluster"
        );
        Ok(cluster)
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Unit cubes scattered through a spherical shell, each facing away from
/// the center.
///
/// Every cube lies between `gap` and `radius` from the origin. All cubes
/// share one stored mesh.
#[derive(Debug, Clone)]
pub struct MakeCubeGlob {
    radius: f64,
    count: usize,
    gap: f64,
    palette: FacePalette,
    seed: Option<u64>,
}

impl MakeCubeGlob {
    /// Creates a new `MakeCubeGlob` operation with `count` cubes.
    #[must_use]
    pub fn new(radius: f64, count: usize) -> Self {
        Self {
            radius,
            count,
            gap: 0.0,
            palette: FacePalette::default(),
            seed: None,
        }
    }

    /// Sets the radius of the empty core. Defaults to 0.
    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the cube face colors.
    #[must_use]
    pub fn palette(mut self, palette: impl Into<FacePalette>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Seeds the random placement. Unseeded globs differ on every run.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the count is zero, the
    /// radius is not positive, or the gap is not in `[0, radius)`.
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        require_positive("cube glob radius", self.radius)?;
        if self.count == 0 {
            return Err(OperationError::InvalidInput("cube glob needs at least one cube".into()).into());
        }
        let inner = self.radius - self.gap;
        if !(self.gap >= 0.0 && inner >= TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "cube glob gap {} must be in [0, {})",
                self.gap, self.radius
            ))
            .into());
        }

        let cube = store.insert(MakeCube::new(1.0).palette(self.palette.clone()).execute()?);
        let mut rng = rng(self.seed);
        let axis = Uniform::new_inclusive(-inner, inner);

        let mut glob = CompositeMesh::new();
        for _ in 0..self.count {
            let offset = loop {
                let p = Vector3::new(axis.sample(&mut rng), axis.sample(&mut rng), axis.sample(&mut rng));
                let len = p.norm();
                if len < inner && len >= TOLERANCE {
                    break p;
                }
            };
            let position = offset + offset.normalize() * self.gap;
            let orientation = Orientation::new(position, None)?;
            glob.add(cube, Placement::new(position, orientation));
        }

        tracing::debug!(cubes = self.count, radius = self.radius, "made cube glob");
        Ok(glob)
    }
}

/// Cubes on random integer grid points inside a cube-shaped volume, each
/// colored by where it sits: red, green and blue follow x, y and z.
///
/// Grid points lie in `[-extent, extent]` on every axis; the color channel
/// runs from 0 at `-extent` to 255 at `+extent`. Cubes of the same color
/// share one stored mesh. Positions may repeat.
#[derive(Debug, Clone)]
pub struct MakeRgbCubeCluster {
    edge: f64,
    extent: u32,
    count: usize,
    hole: f64,
    seed: Option<u64>,
}

impl MakeRgbCubeCluster {
    /// Creates a new `MakeRgbCubeCluster` operation placing `count` cubes of
    /// the given edge.
    #[must_use]
    pub fn new(edge: f64, extent: u32, count: usize) -> Self {
        Self {
            edge,
            extent,
            count,
            hole: 0.0,
            seed: None,
        }
    }

    /// Leaves grid points within `hole` of the origin empty. Defaults to 0,
    /// which only skips the origin itself.
    #[must_use]
    pub fn hole(mut self, hole: f64) -> Self {
        self.hole = hole;
        self
    }

    /// Seeds the random placement. Unseeded clusters differ on every run.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the extent or count is
    /// zero, the edge is not positive, or the hole covers the whole volume.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, store: &mut MeshStore) -> Result<CompositeMesh> {
        let extent = f64::from(self.extent);
        if self.extent == 0 || self.hole >= extent * 3.0_f64.sqrt() {
            return Err(OperationError::InvalidInput(format!(
                "hole {} leaves no grid points in extent {}",
                self.hole, self.extent
            ))
            .into());
        }

        let mut rng = rng(self.seed);
        let axis = Uniform::new_inclusive(-i64::from(self.extent), i64::from(self.extent));
        let locations: Vec<_> = (0..self.count)
            .map(|_| loop {
                let p = [axis.sample(&mut rng), axis.sample(&mut rng), axis.sample(&mut rng)]
                    .map(|c| c as f64);
                let position = Vector3::new(p[0], p[1], p[2]);
                if position.norm() > self.hole {
                    break (position, position_color(&position, extent));
                }
            })
            .collect();

        MakeCubeCluster::new(locations).edge(self.edge).execute(store)
    }
}

/// Maps each coordinate from `[-extent, extent]` to a `0..=255` channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn position_color(position: &Vector3, extent: f64) -> Color {
    let channel = |c: f64| ((c + extent) / extent / 2.0 * 255.0) as u8;
    Color::rgb(channel(position.x), channel(position.y), channel(position.z))
}
