use serde::{Deserialize, Serialize};

use crate::world::{GenerationParams, GridSize};

/// Embedder-facing terrain configuration.
///
/// Everything the pipeline needs is passed explicitly through this value:
/// the grid dimensions, the heightfield parameters, and the cube edge
/// length for mesh emission. Loadable from TOML; missing fields fall back
/// to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub grid_size: GridSize,
    pub generation: GenerationParams,
    pub cube_edge: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::new(32, 16, 32),
            generation: GenerationParams::default(),
            cube_edge: 1.0,
        }
    }
}

impl TerrainConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(input)?)
    }
}
