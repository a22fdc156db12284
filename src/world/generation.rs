use serde::{Deserialize, Serialize};

/// Heightfield parameters for the procedural fill.
///
/// The surface is two orthogonal cosine waves over the horizontal axes,
/// raised to `land_level`:
///
/// `h(x,z) = x_amplitude*cos(x_frequency*x + x_phase)
///         + z_amplitude*cos(z_frequency*z + z_phase)
///         + land_level`
///
/// A cell at height `y` is solid iff `y <= h(x,z)`. With both amplitudes
/// zero the terrain collapses to a flat plane at `land_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Baseline height of the land mass, in voxel coordinates.
    pub land_level: f32,

    pub x_amplitude: f32,
    pub x_frequency: f32,
    pub x_phase: f32,

    pub z_amplitude: f32,
    pub z_frequency: f32,
    pub z_phase: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            land_level: 0.0,
            x_amplitude: 1.0,
            x_frequency: 1.0,
            x_phase: 0.0,
            z_amplitude: 1.0,
            z_frequency: 1.0,
            z_phase: 0.0,
        }
    }
}

impl GenerationParams {
    /// Surface height of the column at (x, z).
    ///
    /// Pure and order-independent: the fill may evaluate columns in any
    /// order (or in parallel) and produce identical terrain.
    pub fn surface_height_at(&self, x: i32, z: i32) -> f32 {
        let x_wave = self.x_amplitude * (self.x_frequency * x as f32 + self.x_phase).cos();
        let z_wave = self.z_amplitude * (self.z_frequency * z as f32 + self.z_phase).cos();
        x_wave + z_wave + self.land_level
    }
}
