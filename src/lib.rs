//! Voxel terrain generation and surface meshing.
//!
//! The pipeline is: a [`TerrainConfig`] describes a grid and a cosine
//! heightfield, [`VoxelGrid::generate`] fills a dense voxel grid from it,
//! and [`TerrainMesher::generate_mesh`] walks the grid and emits vertex,
//! normal, and index buffers for every face that borders open space.
//! Faces between two solid voxels are culled, so the output is the grid's
//! outer surface rather than full per-cube geometry.
//!
//! Rendering the buffers is the embedder's job; the grid's occupancy
//! queries ([`VoxelGrid::is_solid_at`], [`VoxelGrid::surface_height`]) are
//! exposed so the embedder can place entities on the terrain.

pub mod config;
pub mod error;
pub mod mesh;
pub mod world;

pub use config::TerrainConfig;
pub use error::{TerrainError, TerrainResult};
pub use mesh::{CubeFace, TerrainMesh, TerrainMesher};
pub use world::{GenerationParams, GridSize, Voxel, VoxelGrid, VoxelPos, VoxelType};
