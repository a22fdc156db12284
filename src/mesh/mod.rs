//! Surface mesh extraction: cube face geometry tables, the output buffer
//! type, and the mesher that walks a grid and emits exposed faces.

pub mod cube;
mod mesh;
mod mesher;

pub use cube::CubeFace;
pub use mesh::TerrainMesh;
pub use mesher::TerrainMesher;
