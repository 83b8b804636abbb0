//! Authoritative voxel occupancy.
//!
//! Blocks live in a hash map keyed by their cell, which doubles as the spatial
//! index for ray queries: a ray walks the grid cell by cell (Amanatides-Woo
//! traversal) and looks each one up, so the first occupied cell met is the nearest
//! hit and the cost is bounded by the distance travelled, not the block count.

use crate::world::block::{Block, BlockType, VoxelPos};
use crate::world::face::BlockFace;
use glam::{IVec3, Vec3};
use std::collections::HashMap;

/// Nearest block struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub block: Block,
    /// Distance from the ray origin to the struck face, along the normalised direction.
    pub distance: f32,
    pub face: BlockFace,
    /// Point on the struck face. The coordinate along the face normal is exactly
    /// the face plane.
    pub point: Vec3,
}

impl RayHit {
    pub fn normal(&self) -> Vec3 {
        self.face.normal()
    }

    /// The empty cell adjacent to the struck face.
    pub fn adjacent(&self) -> VoxelPos {
        self.block.position + self.face.offset()
    }
}

#[derive(Debug, Default, Clone)]
pub struct World {
    blocks: HashMap<VoxelPos, Block>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the block at `position`, returning the replaced block.
    pub fn insert(&mut self, position: VoxelPos, block_type: BlockType) -> Option<Block> {
        self.blocks.insert(position, Block::new(position, block_type))
    }

    /// Inserts only when the cell is empty. Returns whether the block was placed.
    pub fn insert_if_vacant(&mut self, position: VoxelPos, block_type: BlockType) -> bool {
        if self.blocks.contains_key(&position) {
            return false;
        }
        self.blocks.insert(position, Block::new(position, block_type));
        true
    }

    /// Removing an empty cell is a no-op.
    pub fn remove(&mut self, position: VoxelPos) -> Option<Block> {
        self.blocks.remove(&position)
    }

    pub fn get(&self, position: VoxelPos) -> Option<&Block> {
        self.blocks.get(&position)
    }

    pub fn is_occupied(&self, position: VoxelPos) -> bool {
        self.blocks.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Faces of the block at `position` that border an empty cell. An empty
    /// `position` reports no faces.
    pub fn exposed_faces(&self, position: VoxelPos) -> Vec<BlockFace> {
        if !self.is_occupied(position) {
            return Vec::new();
        }
        BlockFace::ALL
            .into_iter()
            .filter(|face| !self.is_occupied(position + face.offset()))
            .collect()
    }

    /// Blocks with at least one exposed face; fully enclosed blocks can never be
    /// seen and are skipped.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values().filter(|block| {
            BlockFace::ALL
                .iter()
                .any(|face| !self.is_occupied(block.position + face.offset()))
        })
    }

    /// Nearest occupied cell whose cube the ray enters within `max_distance`.
    ///
    /// The cell containing `origin` is never reported: the ray starts inside it
    /// and only its back faces are in front of the origin. At exact edge and
    /// corner crossings the x axis is stepped first, then y, then z. A
    /// non-positive or non-finite `max_distance` finds nothing.
    pub fn query_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        if self.blocks.is_empty()
            || !(max_distance > 0.0 && max_distance.is_finite())
            || !origin.is_finite()
        {
            return None;
        }
        let direction = direction.try_normalize()?;

        let mut cell: IVec3 = origin.floor().as_ivec3();
        let mut step = IVec3::ZERO;
        let mut t_max = Vec3::splat(f32::INFINITY);
        let mut t_delta = Vec3::splat(f32::INFINITY);

        for axis in 0..3 {
            let d = direction[axis];
            if d > 0.0 {
                step[axis] = 1;
                t_delta[axis] = 1.0 / d;
                t_max[axis] = (cell[axis] as f32 + 1.0 - origin[axis]) / d;
            } else if d < 0.0 {
                step[axis] = -1;
                t_delta[axis] = -1.0 / d;
                t_max[axis] = (origin[axis] - cell[axis] as f32) / -d;
            }
        }

        loop {
            let axis = if t_max.x <= t_max.y && t_max.x <= t_max.z {
                0
            } else if t_max.y <= t_max.z {
                1
            } else {
                2
            };

            let distance = t_max[axis];
            if distance > max_distance {
                return None;
            }

            cell[axis] += step[axis];
            t_max[axis] += t_delta[axis];

            if let Some(block) = self.blocks.get(&cell) {
                let face = BlockFace::entered_from(axis, step[axis]);
                let mut point = origin + direction * distance;
                // Pin the crossed coordinate to the face plane.
                point[axis] = if step[axis] > 0 {
                    cell[axis] as f32
                } else {
                    (cell[axis] + 1) as f32
                };
                return Some(RayHit {
                    block: *block,
                    distance,
                    face,
                    point,
                });
            }
        }
    }
}
