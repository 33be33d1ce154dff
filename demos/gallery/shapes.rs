//! Shape dispatcher for the gallery.

use polykern::color::Color;
use polykern::math::Vector3;
use polykern::mesh::{Mesh, MeshStore};
use polykern::operations::creation::{
    MakeCube, MakeCubeCluster, MakeCubeCorners, MakeCubeCross, MakeCubeGlob, MakeDodecahedron,
    MakeDualTetrahedron, MakeIcosahedron, MakeRgbCubeCluster, MakeRing, MakeSpaceStation,
    MakeTetrahedron, MakeTriRings, MakeTruncatedCube,
};
use polykern::operations::editing::{Extrude, Normalize, Stellate, Subdivide};
use polykern::operations::FaceSelection;
use polykern::Result;

/// Names accepted by [`build`].
pub const SHAPES: &[&str] = &[
    "spiky_ball",
    "geodesic",
    "extruded_cube",
    "dodeca_star",
    "truncated_cube",
    "space_station",
    "dual_tetrahedron",
    "cube_cross",
    "cube_corners",
    "cube_cluster",
    "cube_glob",
    "rgb_cube_cluster",
    "ring",
    "tri_rings",
];

/// Builds the named shape, or `None` if the name is unknown.
pub fn build(name: &str) -> Result<Option<Mesh>> {
    let mut store = MeshStore::new();
    let mesh = match name {
        "spiky_ball" => {
            let mut mesh = MakeIcosahedron::new(1.0).palette(Color::ORANGE).execute()?;
            let sub = Subdivide::new().secondary_color(Color::YELLOW).execute(&mut mesh)?;
            Stellate::new(1.5)
                .faces(FaceSelection::Category(sub.center_category))
                .execute(&mut mesh)?;
            mesh
        }
        "geodesic" => {
            let mut mesh = MakeIcosahedron::new(1.0).palette(Color::TEAL).execute()?;
            Subdivide::new().execute(&mut mesh)?;
            Subdivide::new().execute(&mut mesh)?;
            Normalize::default().execute(&mut mesh)?;
            mesh
        }
        "extruded_cube" => {
            let mut mesh = MakeCube::new(2.0).palette(Color::BLUE).execute()?;
            let ext = Extrude::new(0.5).execute(&mut mesh)?;
            Extrude::new(0.25)
                .faces(FaceSelection::Category(ext.end_category))
                .execute(&mut mesh)?;
            mesh
        }
        "dodeca_star" => {
            let mut mesh = MakeDodecahedron::new(1.0).palette(Color::PURPLE).execute()?;
            Stellate::new(1.0).execute(&mut mesh)?;
            mesh
        }
        "truncated_cube" => MakeTruncatedCube::new(2.0, 0.67)
            .colors(Color::GREEN, None)
            .execute()?,
        "space_station" => MakeSpaceStation::new(2.0).execute()?,
        "dual_tetrahedron" => MakeDualTetrahedron::new(1.0)
            .execute(&mut store)?
            .flatten(&store)?,
        "cube_cross" => MakeCubeCross::new(2.0, Color::RED, Color::LIGHT_GREY)
            .execute(&mut store)?
            .flatten(&store)?,
        "cube_corners" => MakeCubeCorners::new(2.0, Color::DARK_GREY, Color::CYAN)
            .execute(&mut store)?
            .flatten(&store)?,
        "cube_cluster" => {
            let locations = (-2..=2).flat_map(|x| {
                (-2..=2).map(move |y| {
                    let color = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
                    (Vector3::new(f64::from(x), f64::from(y), 0.0), color)
                })
            });
            MakeCubeCluster::new(locations)
                .execute(&mut store)?
                .flatten(&store)?
        }
        "cube_glob" => MakeCubeGlob::new(20.0, 200)
            .gap(8.0)
            .palette(Color::LIGHT_GREY)
            .execute(&mut store)?
            .flatten(&store)?,
        "rgb_cube_cluster" => MakeRgbCubeCluster::new(0.8, 6, 300)
            .hole(3.0)
            .execute(&mut store)?
            .flatten(&store)?,
        "ring" => {
            let tetra = store.insert(MakeTetrahedron::new(0.5).palette(Color::RED).execute()?);
            MakeRing::new(tetra, 4.0, 12).execute()?.flatten(&store)?
        }
        "tri_rings" => {
            let cube = store.insert(MakeCube::new(0.5).palette(Color::YELLOW).execute()?);
            MakeTriRings::new(cube, 4.0, 16).execute()?.flatten(&store)?
        }
        _ => return Ok(None),
    };
    Ok(Some(mesh))
}
