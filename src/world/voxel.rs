use serde::{Deserialize, Serialize};

/// The material of a voxel cell.
///
/// `Air` is the empty sentinel; every other variant is solid matter. New
/// terrain materials extend this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VoxelType {
    #[default]
    Air,
    Dirt,
}

impl VoxelType {
    #[inline]
    pub fn is_air(self) -> bool {
        self == VoxelType::Air
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}

/// A single cell of the world grid. Carries no identity beyond its grid
/// position; copied by value when queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Voxel {
    voxel_type: VoxelType,
}

impl Voxel {
    pub fn new(voxel_type: VoxelType) -> Self {
        Self { voxel_type }
    }

    #[inline]
    pub fn voxel_type(self) -> VoxelType {
        self.voxel_type
    }
}
