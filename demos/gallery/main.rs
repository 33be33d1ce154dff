//! Polykern gallery: builds a named shape, runs an edit chain over it and
//! prints what the tessellator would hand to a renderer.
//!
//! ```text
//! main.rs     — entry point (this file)
//! shapes.rs   — shape dispatcher
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example gallery                          # default (spiky_ball)
//! cargo run --example gallery -- cube_cross            # composite shape
//! cargo run --example gallery -- --constrained ring    # CDT face splitting
//! ```

mod shapes;

use polykern::tessellation::{TessellateMesh, TessellationParams, TriangulationMode};
use polykern::PolyError;

fn main() -> Result<(), PolyError> {
    // Default: WARN for everything, INFO for the gallery and polykern.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polykern=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gallery=info".parse().unwrap_or_default())
        .add_directive("polykern=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = if args.iter().any(|a| a == "--constrained") {
        TriangulationMode::Constrained
    } else {
        TriangulationMode::Fan
    };
    let name = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map_or("spiky_ball", String::as_str);

    let Some(mesh) = shapes::build(name)? else {
        eprintln!("[gallery] unknown shape: {name}");
        eprintln!("[gallery] available: {}", shapes::SHAPES.join(", "));
        return Ok(());
    };

    let buffer = TessellateMesh::new(TessellationParams { mode }).execute(&mesh)?;
    tracing::info!(shape = name, ?mode, "tessellated");
    println!(
        "{name}: {} vertices, {} faces -> {} render vertices ({} bytes), {} triangles as {:?}",
        mesh.vertex_count(),
        mesh.face_count(),
        buffer.vertices.len(),
        buffer.vertex_bytes().len(),
        buffer.indices.triangle_count(),
        buffer.indices.format(),
    );
    Ok(())
}
