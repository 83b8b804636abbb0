pub mod block;
pub mod face;
pub mod generator;
pub mod store;

pub use block::{voxel_at, voxel_center, Block, BlockType, BlockVisual, VoxelPos, BLOCK_VISUALS};
pub use face::BlockFace;
pub use generator::{GenerationStats, HeightField, TerrainGenerator};
pub use store::{RayHit, World};
