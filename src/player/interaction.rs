use glam::Vec3;
use log::debug;

use super::input::ClickButton;
use crate::config::OCCUPANCY_TOLERANCE;
use crate::world::{voxel_at, voxel_center, Block, BlockType, VoxelPos, World};

/// What a single click did to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    Broken(Block),
    Placed(Block),
    /// The target cell overlaps the player.
    Rejected(VoxelPos),
    /// Nothing within reach.
    Missed,
}

impl InteractionOutcome {
    pub fn changed_world(&self) -> bool {
        matches!(self, Self::Broken(_) | Self::Placed(_))
    }
}

/// Break/place resolution along the camera ray.
#[derive(Debug, Clone, Copy)]
pub struct InteractionController {
    reach: f32,
}

impl InteractionController {
    pub fn new(reach: f32) -> Self {
        Self { reach }
    }

    pub fn reach(&self) -> f32 {
        self.reach
    }

    pub fn handle_click(
        &self,
        world: &mut World,
        button: ClickButton,
        origin: Vec3,
        direction: Vec3,
        selected: BlockType,
    ) -> InteractionOutcome {
        match button {
            ClickButton::Break => self.break_block(world, origin, direction),
            ClickButton::Place => self.place_block(world, origin, direction, selected, origin),
        }
    }

    /// Removes the first block along the ray.
    pub fn break_block(&self, world: &mut World, origin: Vec3, direction: Vec3) -> InteractionOutcome {
        let Some(hit) = world.query_ray(origin, direction, self.reach) else {
            return InteractionOutcome::Missed;
        };
        match world.remove(hit.block.position) {
            Some(block) => {
                debug!("Broke {} at {}", block.block_type, block.position);
                InteractionOutcome::Broken(block)
            }
            None => InteractionOutcome::Missed,
        }
    }

    /// Places `selected` in the cell in front of the struck face, unless that
    /// cell holds the player at `player_position`.
    pub fn place_block(
        &self,
        world: &mut World,
        origin: Vec3,
        direction: Vec3,
        selected: BlockType,
        player_position: Vec3,
    ) -> InteractionOutcome {
        let Some(hit) = world.query_ray(origin, direction, self.reach) else {
            return InteractionOutcome::Missed;
        };
        let candidate = hit.adjacent();

        if Self::overlaps_player(candidate, player_position) {
            debug!("Rejected placement at {} inside player", candidate);
            return InteractionOutcome::Rejected(candidate);
        }

        world.insert(candidate, selected);
        debug!("Placed {} at {}", selected, candidate);
        InteractionOutcome::Placed(Block::new(candidate, selected))
    }

    /// True if `cell` is the player's feet cell or the one above it.
    pub fn overlaps_player(cell: VoxelPos, player_position: Vec3) -> bool {
        let center = voxel_center(cell);
        let feet = voxel_center(voxel_at(player_position));
        let head = voxel_center(voxel_at(player_position + Vec3::Y));

        center.distance(feet) < OCCUPANCY_TOLERANCE || center.distance(head) < OCCUPANCY_TOLERANCE
    }
}
