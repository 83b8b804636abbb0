use serde::{Deserialize, Serialize};

/// Ground detection slack on top of the player height, absorbs snapping jitter.
pub const GROUND_EPSILON: f32 = 0.05;
/// Distance under which a placement candidate counts as the player's own voxel.
pub const OCCUPANCY_TOLERANCE: f32 = 0.1;

/// Movement and interaction tuning. Speeds, gravity and jump force are per-frame
/// amounts at `reference_frame_rate` and get scaled by the frame delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_force: f32,
    /// Eye height above the surface the player stands on.
    pub player_height: f32,
    pub interaction_distance: f32,
    pub reference_frame_rate: f32,
    /// Falling below this height teleports the player back to `spawn_point`.
    pub fall_limit: f32,
    pub spawn_point: [f32; 3],
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            gravity: 0.01,
            jump_force: 0.15,
            player_height: 1.7,
            interaction_distance: 5.0,
            reference_frame_rate: 60.0,
            fall_limit: -50.0,
            spawn_point: [0.0, 10.0, 5.0],
        }
    }
}

impl GameplayConfig {
    pub fn spawn(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.spawn_point)
    }

    /// Multiplier turning per-reference-frame amounts into amounts for `delta` seconds.
    /// Negative or non-finite deltas count as no elapsed time.
    pub fn frame_scale(&self, delta: f32) -> f32 {
        if !delta.is_finite() || delta < 0.0 {
            return 0.0;
        }
        delta * self.reference_frame_rate
    }
}
