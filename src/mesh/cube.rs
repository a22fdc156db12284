//! Geometry tables for building cube meshes.
//!
//! Faces are emitted independently and only when exposed, so each face
//! carries its own 4 vertices instead of sharing the cube's 8 corners.
//! That duplicates vertices along cube edges but keeps per-face normals
//! exact and the emission loop branch-free.

/// The number of faces of a cube.
pub const FACE_COUNT: usize = 6;
/// Unique vertices per face (one quad).
pub const VERTICES_PER_FACE: usize = 4;
/// Indices per face (two triangles).
pub const INDICES_PER_FACE: usize = 6;
/// Unique vertices of a fully emitted cube.
pub const VERTICES_PER_CUBE: usize = VERTICES_PER_FACE * FACE_COUNT;
/// Indices of a fully emitted cube.
pub const INDICES_PER_CUBE: usize = INDICES_PER_FACE * FACE_COUNT;

/// The fixed pattern mapping a face's 4 unique vertices onto 2 triangles.
/// Offsetting it by 4 per emitted face keeps winding consistent.
pub const FACE_INDEX_PATTERN: [u32; INDICES_PER_FACE] = [0, 1, 3, 1, 2, 3];

/// One of the six axis-aligned faces of a cube.
///
/// The declaration order is fixed and doubles as the integer index 0-5;
/// both the exposure query and the index-buffer arithmetic rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum CubeFace {
    Front,
    Right,
    Back,
    Left,
    Bottom,
    Top,
}

impl CubeFace {
    /// All faces in declaration order.
    pub const ALL: [CubeFace; FACE_COUNT] = [
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Bottom,
        CubeFace::Top,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The 4 distinct corners of this face of the unit cube
    /// (0,0,0)-(1,1,1), in consistent winding for back-face culling.
    pub const fn vertices(self) -> [[f32; 3]; VERTICES_PER_FACE] {
        match self {
            CubeFace::Front => [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            CubeFace::Right => [
                [1.0, 0.0, 0.0],
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, 0.0],
            ],
            CubeFace::Back => [
                [1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
            ],
            CubeFace::Left => [
                [0.0, 0.0, 1.0],
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 1.0],
            ],
            CubeFace::Bottom => [
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0],
            ],
            CubeFace::Top => [
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, 1.0, 1.0],
                [0.0, 1.0, 1.0],
            ],
        }
    }

    /// Outward unit normal of this face.
    pub const fn normal(self) -> [f32; 3] {
        match self {
            CubeFace::Front => [0.0, 0.0, -1.0],
            CubeFace::Right => [1.0, 0.0, 0.0],
            CubeFace::Back => [0.0, 0.0, 1.0],
            CubeFace::Left => [-1.0, 0.0, 0.0],
            CubeFace::Bottom => [0.0, -1.0, 0.0],
            CubeFace::Top => [0.0, 1.0, 0.0],
        }
    }

    /// Integer offset to the neighboring voxel across this face.
    pub const fn neighbor_offset(self) -> (i32, i32, i32) {
        match self {
            CubeFace::Front => (0, 0, -1),
            CubeFace::Right => (1, 0, 0),
            CubeFace::Back => (0, 0, 1),
            CubeFace::Left => (-1, 0, 0),
            CubeFace::Bottom => (0, -1, 0),
            CubeFace::Top => (0, 1, 0),
        }
    }
}
