use crate::mesh::cube::VERTICES_PER_FACE;

/// Vertex, normal, and index buffers produced by the mesher.
///
/// The three buffers are correlated: `normals[i]` belongs to
/// `vertices[i]`, and `indices` holds triangle triples referencing both.
/// The mesh is rebuilt in full on every generation; there is no
/// incremental update.
#[derive(Debug, Default)]
pub struct TerrainMesh {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of emitted faces (4 vertices each).
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normal buffer as raw bytes for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Index buffer as raw bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::cube::INDICES_PER_FACE;

    #[test]
    fn test_empty_mesh() {
        let mesh = TerrainMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.vertex_bytes().is_empty());
    }

    #[test]
    fn test_byte_views_cover_the_buffers() {
        let mesh = TerrainMesh {
            vertices: vec![[0.0, 1.0, 2.0]; VERTICES_PER_FACE],
            normals: vec![[0.0, 1.0, 0.0]; VERTICES_PER_FACE],
            indices: vec![0, 1, 3, 1, 2, 3],
        };

        assert_eq!(mesh.vertex_bytes().len(), VERTICES_PER_FACE * 3 * 4);
        assert_eq!(mesh.normal_bytes().len(), VERTICES_PER_FACE * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), INDICES_PER_FACE * 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
