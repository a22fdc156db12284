/// Terrain pipeline demo: fill a voxel grid from a cosine heightfield,
/// build the surface mesh, and print buffer statistics.
///
/// Usage: terrain_demo [config.toml]
use anyhow::{Context, Result};
use voxel_terrain::{TerrainConfig, TerrainMesher, VoxelGrid};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path))?;
            TerrainConfig::from_toml_str(&text)
                .with_context(|| format!("failed to parse config file {}", path))?
        }
        None => TerrainConfig::default(),
    };

    println!("Terrain Demo");
    println!("============\n");

    let size = config.grid_size;
    let grid = VoxelGrid::generate(size, &config.generation)?;
    println!(
        "grid: {}x{}x{} ({} cells, {} solid)",
        size.x,
        size.y,
        size.z,
        size.volume(),
        grid.solid_count()
    );

    let mesh = TerrainMesher::generate_mesh(&grid, config.cube_edge)?;
    println!(
        "mesh: {} faces, {} vertices, {} triangles",
        mesh.face_count(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!(
        "buffers: {} vertex bytes, {} normal bytes, {} index bytes",
        mesh.vertex_bytes().len(),
        mesh.normal_bytes().len(),
        mesh.index_bytes().len()
    );

    if let Some(height) = grid.surface_height(size.x / 2, size.z / 2) {
        println!(
            "surface height at column ({}, {}): {}",
            size.x / 2,
            size.z / 2,
            height
        );
    }

    Ok(())
}
