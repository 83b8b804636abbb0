pub mod core;
pub mod gameplay;
pub mod worldgen;

pub use self::core::SandboxConfig;
pub use gameplay::{GameplayConfig, GROUND_EPSILON, OCCUPANCY_TOLERANCE};
pub use worldgen::WorldGenConfig;
