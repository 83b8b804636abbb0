//! Core of a first-person voxel sandbox: seeded terrain, a sparse block store
//! with ray queries, break/place interaction and frame-stepped player physics.

pub mod config;
pub mod engine;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::{GameplayConfig, SandboxConfig, WorldGenConfig};
pub use engine::Sandbox;
pub use player::{Controls, FirstPersonCamera, InputState, Player};
pub use utils::error::{Result, SandboxError};
pub use world::{Block, BlockType, RayHit, TerrainGenerator, World};
