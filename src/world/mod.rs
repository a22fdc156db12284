//! World voxel data: positions, cell types, dense grid storage, and the
//! procedural fill that turns a heightfield into solid terrain.

mod generation;
mod grid;
mod position;
mod voxel;

pub use generation::GenerationParams;
pub use grid::{GridSize, VoxelGrid};
pub use position::VoxelPos;
pub use voxel::{Voxel, VoxelType};
