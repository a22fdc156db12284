//! Central error types for terrain generation and meshing.

use thiserror::Error;

/// Errors surfaced by grid construction and mesh building.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    /// A grid dimension was zero or negative at construction time.
    #[error("invalid grid dimension: {axis} size must be greater than 0, got {value}")]
    InvalidDimension { axis: &'static str, value: i32 },

    /// A build parameter was outside its valid range.
    #[error("invalid parameter: {name} must be a positive finite value, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}

/// Result type for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;
