//! End-to-end tests for the grid-fill and surface-meshing pipeline.

use voxel_terrain::mesh::cube;
use voxel_terrain::{
    CubeFace, GenerationParams, GridSize, TerrainConfig, TerrainError, TerrainMesher, VoxelGrid,
    VoxelPos,
};

fn wavy_params() -> GenerationParams {
    GenerationParams {
        land_level: 6.0,
        x_amplitude: 3.0,
        x_frequency: 0.4,
        x_phase: 0.7,
        z_amplitude: 2.0,
        z_frequency: 0.9,
        z_phase: 0.2,
    }
}

#[test]
fn buffer_shape_matches_independent_face_count() {
    let grid = VoxelGrid::generate(GridSize::new(12, 16, 12), &wavy_params()).unwrap();

    // Count exposed faces independently of the mesher.
    let expected_faces: usize = grid
        .iter()
        .filter(|(_, voxel)| voxel.voxel_type().is_solid())
        .map(|(pos, _)| grid.exposed_faces(pos).len())
        .sum();
    assert!(expected_faces > 0);

    let mesh = TerrainMesher::generate_mesh(&grid, 1.0).unwrap();
    assert_eq!(mesh.vertices.len(), cube::VERTICES_PER_FACE * expected_faces);
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    assert_eq!(mesh.indices.len(), cube::INDICES_PER_FACE * expected_faces);
    assert_eq!(mesh.indices.len() % 3, 0);
}

#[test]
fn every_index_references_a_vertex() {
    let grid = VoxelGrid::generate(GridSize::new(10, 12, 10), &wavy_params()).unwrap();
    let mesh = TerrainMesher::generate_mesh(&grid, 2.0).unwrap();

    let vertex_count = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < vertex_count));
}

#[test]
fn mesh_generation_is_reproducible() {
    let size = GridSize::new(8, 10, 8);
    let params = wavy_params();

    let mesh_a =
        TerrainMesher::generate_mesh(&VoxelGrid::generate(size, &params).unwrap(), 1.0).unwrap();
    let mesh_b =
        TerrainMesher::generate_mesh(&VoxelGrid::generate(size, &params).unwrap(), 1.0).unwrap();

    assert_eq!(mesh_a.vertices, mesh_b.vertices);
    assert_eq!(mesh_a.normals, mesh_b.normals);
    assert_eq!(mesh_a.indices, mesh_b.indices);
}

#[test]
fn fully_solid_grid_emits_exactly_the_outer_shell() {
    let params = GenerationParams {
        land_level: 100.0,
        x_amplitude: 0.0,
        z_amplitude: 0.0,
        ..Default::default()
    };
    let n = 4;
    let grid = VoxelGrid::generate(GridSize::new(n, n, n), &params).unwrap();
    assert_eq!(grid.solid_count(), (n * n * n) as usize);

    let mesh = TerrainMesher::generate_mesh(&grid, 1.0).unwrap();
    // Each of the 6 outer sides shows n*n voxel faces; nothing interior.
    let shell_faces = 6 * (n * n) as usize;
    assert_eq!(mesh.face_count(), shell_faces);
}

#[test]
fn boundary_faces_are_open_at_the_world_edge() {
    // A 2x1x1 pair of solid voxels: the touching faces (Right of the
    // first, Left of the second) are culled, everything else is open.
    let params = GenerationParams {
        land_level: 0.0,
        x_amplitude: 0.0,
        z_amplitude: 0.0,
        ..Default::default()
    };
    let grid = VoxelGrid::generate(GridSize::new(2, 1, 1), &params).unwrap();

    let left = grid.exposed_faces(VoxelPos::new(0, 0, 0));
    assert!(!left.contains(&CubeFace::Right));
    assert_eq!(left.len(), 5);

    let right = grid.exposed_faces(VoxelPos::new(1, 0, 0));
    assert!(!right.contains(&CubeFace::Left));
    assert_eq!(right.len(), 5);
}

#[test]
fn construction_errors_carry_the_offending_value() {
    let err = VoxelGrid::generate(GridSize::new(5, 5, -2), &GenerationParams::default())
        .expect_err("negative z size must fail");
    assert_eq!(
        err,
        TerrainError::InvalidDimension {
            axis: "z",
            value: -2
        }
    );

    let grid = VoxelGrid::generate(GridSize::new(2, 2, 2), &GenerationParams::default()).unwrap();
    let err = TerrainMesher::generate_mesh(&grid, -0.5).expect_err("negative edge must fail");
    assert!(matches!(err, TerrainError::InvalidParameter { .. }));
}

#[test]
fn config_drives_the_whole_pipeline() {
    let config = TerrainConfig::from_toml_str(
        r#"
        cube_edge = 2.0

        [grid_size]
        x = 6
        y = 8
        z = 6

        [generation]
        land_level = 3.0
        x_amplitude = 0.0
        z_amplitude = 0.0
        "#,
    )
    .unwrap();

    let grid = VoxelGrid::generate(config.grid_size, &config.generation).unwrap();
    let mesh = TerrainMesher::generate_mesh(&grid, config.cube_edge).unwrap();

    // Flat plane at land level 3: four solid layers, top at y = 3.
    assert_eq!(grid.surface_height(0, 0), Some(3));
    assert!(!mesh.is_empty());

    // Cube corners are scaled by the configured edge and translated by
    // the voxel position: the top face of the y = 3 layer sits at
    // 1 * 2.0 + 3 in world units.
    let max_y = mesh
        .vertices
        .iter()
        .map(|v| v[1])
        .fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(max_y, 5.0);
}
