use crate::error::{TerrainError, TerrainResult};
use crate::mesh::cube::{self, CubeFace};
use crate::mesh::TerrainMesh;
use crate::world::{VoxelGrid, VoxelPos};

/// Walks a voxel grid and emits the exposed faces of every solid voxel
/// as translated, scaled cube geometry.
pub struct TerrainMesher;

impl TerrainMesher {
    /// Build the surface mesh of `grid` with cubes of edge length
    /// `cube_edge`.
    ///
    /// Fails with [`TerrainError::InvalidParameter`] if `cube_edge` is
    /// not a positive finite value; never fails on grid content. An
    /// all-air grid yields empty buffers.
    ///
    /// Positions are visited x-outer, y-middle, z-inner, and faces in
    /// `CubeFace::ALL` order, so the buffer layout is reproducible.
    pub fn generate_mesh(grid: &VoxelGrid, cube_edge: f32) -> TerrainResult<TerrainMesh> {
        if !cube_edge.is_finite() || cube_edge <= 0.0 {
            return Err(TerrainError::InvalidParameter {
                name: "cube_edge",
                value: cube_edge,
            });
        }

        let mut mesh = TerrainMesh::new();
        // Index offsets must track *emitted* faces, not visited voxels:
        // culled faces leave no gap in the vertex buffer.
        let mut faces_emitted: usize = 0;

        let size = grid.size();
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    let pos = VoxelPos::new(x, y, z);
                    if !grid.is_solid_at(pos) {
                        continue;
                    }

                    for face in grid.exposed_faces(pos) {
                        Self::emit_face(&mut mesh, pos, face, cube_edge, faces_emitted);
                        faces_emitted += 1;
                    }
                }
            }
        }

        log::debug!(
            "[TerrainMesher] emitted {} faces ({} vertices, {} triangles)",
            faces_emitted,
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    fn emit_face(
        mesh: &mut TerrainMesh,
        pos: VoxelPos,
        face: CubeFace,
        cube_edge: f32,
        faces_emitted: usize,
    ) {
        let origin = pos.to_world_pos();
        for local in face.vertices() {
            mesh.vertices.push([
                local[0] * cube_edge + origin.x,
                local[1] * cube_edge + origin.y,
                local[2] * cube_edge + origin.z,
            ]);
        }

        let normal = face.normal();
        for _ in 0..cube::VERTICES_PER_FACE {
            mesh.normals.push(normal);
        }

        let base = (faces_emitted * cube::VERTICES_PER_FACE) as u32;
        for offset in cube::FACE_INDEX_PATTERN {
            mesh.indices.push(base + offset);
        }
    }
}
