use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell coordinate. The cell spans `pos .. pos + 1` on every axis.
pub type VoxelPos = IVec3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Stone,
    Dirt,
    Grass,
    Log,
    Leaf,
}

impl BlockType {
    /// Hotbar order, one slot per type.
    pub const ALL: [BlockType; 5] = [
        BlockType::Stone,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Log,
        BlockType::Leaf,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    pub fn visual(self) -> &'static BlockVisual {
        &BLOCK_VISUALS[self.index()]
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockType::Stone => "Stone",
            BlockType::Dirt => "Dirt",
            BlockType::Grass => "Grass",
            BlockType::Log => "Log",
            BlockType::Leaf => "Leaf",
        };
        f.write_str(name)
    }
}

/// Static appearance of a block type, consumed by whatever draws the world.
/// Colours are sRGB, `noise` is the amount of per-pixel jitter for generated textures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockVisual {
    pub top: [u8; 3],
    pub side: [u8; 3],
    pub bottom: [u8; 3],
    pub noise: f32,
}

impl BlockVisual {
    const fn uniform(color: [u8; 3], noise: f32) -> Self {
        Self {
            top: color,
            side: color,
            bottom: color,
            noise,
        }
    }
}

/// Indexed by `BlockType::index`.
pub static BLOCK_VISUALS: [BlockVisual; 5] = [
    BlockVisual::uniform([0x80, 0x80, 0x80], 0.15), // Stone
    BlockVisual::uniform([0x8B, 0x45, 0x13], 0.1),  // Dirt
    BlockVisual {
        top: [0x22, 0x8B, 0x22],
        side: [0xA0, 0x52, 0x2D],
        bottom: [0x8B, 0x45, 0x13],
        noise: 0.05,
    }, // Grass
    BlockVisual {
        top: [0xA0, 0x82, 0x5A],
        side: [0x6B, 0x42, 0x26],
        bottom: [0xA0, 0x82, 0x5A],
        noise: 0.12,
    }, // Log
    BlockVisual::uniform([0x2E, 0x8B, 0x57], 0.2), // Leaf
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub position: VoxelPos,
    pub block_type: BlockType,
}

impl Block {
    pub fn new(position: VoxelPos, block_type: BlockType) -> Self {
        Self {
            position,
            block_type,
        }
    }

    pub fn center(&self) -> Vec3 {
        voxel_center(self.position)
    }
}

pub fn voxel_center(pos: VoxelPos) -> Vec3 {
    pos.as_vec3() + Vec3::splat(0.5)
}

/// The cell containing `point`.
pub fn voxel_at(point: Vec3) -> VoxelPos {
    point.floor().as_ivec3()
}
