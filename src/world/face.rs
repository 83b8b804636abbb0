use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned faces of a voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    East,   // +X
    West,   // -X
    Top,    // +Y
    Bottom, // -Y
    South,  // +Z
    North,  // -Z
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::East,
        BlockFace::West,
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::South,
        BlockFace::North,
    ];

    pub fn offset(self) -> IVec3 {
        match self {
            BlockFace::East => IVec3::X,
            BlockFace::West => IVec3::NEG_X,
            BlockFace::Top => IVec3::Y,
            BlockFace::Bottom => IVec3::NEG_Y,
            BlockFace::South => IVec3::Z,
            BlockFace::North => IVec3::NEG_Z,
        }
    }

    pub fn normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// Face whose outward normal points along `-step` on `axis`, i.e. the face a
    /// ray moving by `step` enters through.
    pub fn entered_from(axis: usize, step: i32) -> Self {
        match (axis, step > 0) {
            (0, true) => BlockFace::West,
            (0, false) => BlockFace::East,
            (1, true) => BlockFace::Bottom,
            (1, false) => BlockFace::Top,
            (_, true) => BlockFace::North,
            (_, false) => BlockFace::South,
        }
    }
}
