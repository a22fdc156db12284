use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};
use crate::mesh::CubeFace;
use crate::world::{GenerationParams, Voxel, VoxelPos, VoxelType};

/// The 3D size of the world in voxels. Every component must be greater
/// than 0; `VoxelGrid::generate` validates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridSize {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Total cell count. Only meaningful once the components are known
    /// to be positive.
    pub fn volume(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }
}

/// A dense 3D grid of voxels filled once from a cosine heightfield and
/// read-only afterwards.
///
/// Storage is a flat row-major `Vec` (x outer, y middle, z inner), so
/// every query is O(1). The generation parameters are consumed by the
/// fill and not retained.
#[derive(Debug)]
pub struct VoxelGrid {
    size: GridSize,
    cells: Vec<Voxel>,
}

impl VoxelGrid {
    /// Build a grid of the given size and fill it from the heightfield.
    ///
    /// Fails with [`TerrainError::InvalidDimension`] if any size
    /// component is zero or negative; no partially built grid escapes.
    /// Every cell starts as `Air` and becomes `Dirt` iff its y coordinate
    /// is at or below the column's surface height. Columns are
    /// independent, so the fill runs one rayon task per x-slice and the
    /// result is identical to a serial fill.
    pub fn generate(size: GridSize, params: &GenerationParams) -> TerrainResult<Self> {
        for (axis, value) in [("x", size.x), ("y", size.y), ("z", size.z)] {
            if value <= 0 {
                return Err(TerrainError::InvalidDimension { axis, value });
            }
        }

        let mut cells = vec![Voxel::default(); size.volume()];
        let slice_len = size.y as usize * size.z as usize;

        cells
            .par_chunks_mut(slice_len)
            .enumerate()
            .for_each(|(x, slice)| {
                for z in 0..size.z {
                    let height = params.surface_height_at(x as i32, z);
                    for y in 0..size.y {
                        if y as f32 <= height {
                            slice[(y * size.z + z) as usize] = Voxel::new(VoxelType::Dirt);
                        }
                    }
                }
            });

        let grid = Self { size, cells };
        log::info!(
            "[VoxelGrid] generated {}x{}x{} grid, {} solid voxels",
            size.x,
            size.y,
            size.z,
            grid.solid_count()
        );

        Ok(grid)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// True iff the position lies inside the grid bounds.
    pub fn is_valid_position(&self, pos: VoxelPos) -> bool {
        pos.x >= 0
            && pos.x < self.size.x
            && pos.y >= 0
            && pos.y < self.size.y
            && pos.z >= 0
            && pos.z < self.size.z
    }

    /// The voxel type at `pos`, or `None` out of bounds. Out-of-bounds
    /// lookups are a normal outcome at the world's edges, not an error.
    pub fn voxel_at(&self, pos: VoxelPos) -> Option<VoxelType> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(self.cells[self.cell_index(pos)].voxel_type())
    }

    /// Occupancy query for the embedder: solid voxel at a valid position.
    pub fn is_solid_at(&self, pos: VoxelPos) -> bool {
        self.voxel_at(pos).is_some_and(VoxelType::is_solid)
    }

    /// The faces of the voxel at `pos` that border open space, in the
    /// fixed `CubeFace::ALL` order.
    ///
    /// A face is exposed iff its neighbor is out of bounds (the world
    /// boundary is open) or not solid. Only meaningful for solid voxels;
    /// returns the empty set for air or out-of-bounds positions.
    pub fn exposed_faces(&self, pos: VoxelPos) -> Vec<CubeFace> {
        if !self.is_solid_at(pos) {
            return Vec::new();
        }

        CubeFace::ALL
            .into_iter()
            .filter(|face| {
                let (dx, dy, dz) = face.neighbor_offset();
                !self.is_solid_at(pos.offset(dx, dy, dz))
            })
            .collect()
    }

    /// The y coordinate of the topmost solid voxel in the column at
    /// (x, z), or `None` if the column is out of range or all air. Used
    /// by embedders to place entities on the terrain surface.
    pub fn surface_height(&self, x: i32, z: i32) -> Option<i32> {
        if x < 0 || x >= self.size.x || z < 0 || z >= self.size.z {
            return None;
        }
        (0..self.size.y)
            .rev()
            .find(|&y| self.is_solid_at(VoxelPos::new(x, y, z)))
    }

    /// Iterate every cell as a `(position, voxel)` pair in x-outer,
    /// y-middle, z-inner order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, Voxel)> + '_ {
        let size = self.size;
        (0..size.x)
            .flat_map(move |x| {
                (0..size.y).flat_map(move |y| (0..size.z).map(move |z| VoxelPos::new(x, y, z)))
            })
            .map(move |pos| (pos, self.cells[self.cell_index(pos)]))
    }

    /// Number of solid cells, for diagnostics.
    pub fn solid_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|voxel| voxel.voxel_type().is_solid())
            .count()
    }

    fn cell_index(&self, pos: VoxelPos) -> usize {
        ((pos.x * self.size.y + pos.y) * self.size.z + pos.z) as usize
    }
}
