use glam::{Vec2, Vec3};
use log::{info, trace};

use super::camera::Controls;
use super::input::InputState;
use crate::config::{GameplayConfig, GROUND_EPSILON};
use crate::world::{BlockType, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
}

/// Player tracked at eye height.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub state: MotionState,
    pub selected: BlockType,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            vertical_velocity: 0.0,
            state: MotionState::Airborne,
            selected: BlockType::default(),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.state == MotionState::Grounded
    }

    /// Selects a hotbar slot. Out-of-range slots are ignored.
    pub fn select_slot(&mut self, slot: usize) {
        if let Some(block_type) = BlockType::from_slot(slot) {
            self.selected = block_type;
        }
    }

    /// Advances the player by one frame of `delta` seconds.
    pub fn step(
        &mut self,
        delta: f32,
        input: &InputState,
        controls: &impl Controls,
        world: &World,
        config: &GameplayConfig,
    ) {
        let scale = config.frame_scale(delta);

        self.apply_movement(input.move_axes(), scale, controls, config);

        self.vertical_velocity -= config.gravity * scale;

        let reach = config.player_height + GROUND_EPSILON;
        let ground = world
            .query_ray(self.position, Vec3::NEG_Y, reach)
            .filter(|hit| hit.distance < reach);

        let mut snapped = false;
        match ground {
            Some(_) if input.jump() => {
                self.vertical_velocity = config.jump_force;
                self.set_state(MotionState::Airborne);
            }
            Some(hit) => {
                self.vertical_velocity = 0.0;
                self.set_state(MotionState::Grounded);
                self.position.y = hit.point.y + config.player_height;
                snapped = true;
            }
            None => self.set_state(MotionState::Airborne),
        }

        if !snapped {
            self.position.y += self.vertical_velocity * scale;
        }

        if self.position.y < config.fall_limit {
            info!(
                "Player fell below {} at {:?}, respawning",
                config.fall_limit, self.position
            );
            self.position = config.spawn();
            self.vertical_velocity = 0.0;
            self.state = MotionState::Airborne;
        }
    }

    fn apply_movement(
        &mut self,
        axes: Vec2,
        scale: f32,
        controls: &impl Controls,
        config: &GameplayConfig,
    ) {
        let direction = axes.normalize_or_zero();
        if direction == Vec2::ZERO {
            return;
        }
        let step = direction * config.move_speed * scale;
        self.position += controls.move_forward(step.y) + controls.move_right(step.x);
    }

    fn set_state(&mut self, state: MotionState) {
        if self.state != state {
            trace!("Player {:?} -> {:?} at {:?}", self.state, state, self.position);
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::camera::FirstPersonCamera;
    use approx::assert_relative_eq;
    use glam::IVec3;
    use winit::keyboard::KeyCode;

    fn floor(y: i32) -> World {
        let mut world = World::new();
        for x in -4..=4 {
            for z in -4..=4 {
                world.insert(IVec3::new(x, y, z), BlockType::Stone);
            }
        }
        world
    }

    fn camera() -> FirstPersonCamera {
        FirstPersonCamera {
            locked: true,
            ..Default::default()
        }
    }

    fn run(player: &mut Player, world: &World, input: &InputState, delta: f32, frames: usize) {
        let config = GameplayConfig::default();
        let controls = camera();
        for _ in 0..frames {
            player.step(delta, input, &controls, world, &config);
        }
    }

    #[test]
    fn test_grounded_snap() {
        // Floor top face is at y = 1
        let world = floor(0);
        let mut player = Player::new(Vec3::new(0.5, 5.0, 0.5));
        run(&mut player, &world, &InputState::new(), 1.0 / 60.0, 300);

        assert_eq!(player.position.y, 1.0 + 1.7);
        assert_eq!(player.vertical_velocity, 0.0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_frame_rate_independence() {
        let world = World::new();
        let input = InputState::new();
        let start = Vec3::new(0.5, 100.0, 0.5);

        let mut at_60 = Player::new(start);
        run(&mut at_60, &world, &input, 1.0 / 60.0, 120);

        let mut at_30 = Player::new(start);
        run(&mut at_30, &world, &input, 1.0 / 30.0, 60);

        let fallen_60 = start.y - at_60.position.y;
        let fallen_30 = start.y - at_30.position.y;
        assert!(fallen_60 > 50.0);
        assert_relative_eq!(fallen_60, fallen_30, max_relative = 0.01);
        assert_relative_eq!(at_60.vertical_velocity, at_30.vertical_velocity, epsilon = 1e-4);
    }

    #[test]
    fn test_frame_rate_independent_landing() {
        let world = floor(0);
        let input = InputState::new();

        let mut at_60 = Player::new(Vec3::new(0.5, 5.0, 0.5));
        run(&mut at_60, &world, &input, 1.0 / 60.0, 120);

        let mut at_30 = Player::new(Vec3::new(0.5, 5.0, 0.5));
        run(&mut at_30, &world, &input, 1.0 / 30.0, 60);

        assert_eq!(at_60.position.y, at_30.position.y);
        assert!(at_60.is_grounded() && at_30.is_grounded());
    }

    #[test]
    fn test_safety_net_respawns() {
        let config = GameplayConfig::default();
        let mut player = Player::new(Vec3::new(3.0, config.fall_limit - 1.0, 3.0));
        player.vertical_velocity = -2.0;
        player.step(1.0 / 60.0, &InputState::new(), &camera(), &World::new(), &config);

        assert_eq!(player.position, config.spawn());
        assert_eq!(player.vertical_velocity, 0.0);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let world = floor(0);
        let mut player = Player::new(Vec3::new(0.5, 5.0, 0.5));
        run(&mut player, &world, &InputState::new(), 1.0 / 60.0, 300);
        assert!(player.is_grounded());

        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        run(&mut player, &world, &input, 1.0 / 60.0, 1);

        assert!(!player.is_grounded());
        assert_relative_eq!(player.vertical_velocity, 0.15);
        assert!(player.position.y > 2.7);

        // Lands again after releasing jump
        run(&mut player, &world, &InputState::new(), 1.0 / 60.0, 120);
        assert!(player.is_grounded());
        assert_eq!(player.position.y, 2.7);
    }

    #[test]
    fn test_invalid_delta_keeps_state() {
        let config = GameplayConfig::default();
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        let start = Vec3::new(0.5, 8.0, 0.5);

        for delta in [f32::NAN, f32::INFINITY, -1.0] {
            let mut player = Player::new(start);
            player.vertical_velocity = -0.3;
            player.step(delta, &input, &camera(), &World::new(), &config);

            assert_eq!(player.position, start);
            assert_eq!(player.vertical_velocity, -0.3);
        }
    }

    #[test]
    fn test_horizontal_movement() {
        let world = floor(0);
        let mut player = Player::new(Vec3::new(0.5, 2.7, 0.5));
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        run(&mut player, &world, &input, 1.0 / 60.0, 10);

        assert_relative_eq!(player.position.z, 0.5 - 1.0, epsilon = 1e-4);
        assert_relative_eq!(player.position.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let world = floor(0);
        let mut player = Player::new(Vec3::new(0.5, 2.7, 0.5));
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyD, true);
        run(&mut player, &world, &input, 1.0 / 60.0, 1);

        let moved = Vec2::new(player.position.x - 0.5, player.position.z - 0.5);
        assert_relative_eq!(moved.length(), 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_no_input_no_drift() {
        let world = floor(0);
        let mut player = Player::new(Vec3::new(0.5, 2.7, 0.5));
        run(&mut player, &world, &InputState::new(), 1.0 / 60.0, 30);

        assert_eq!(player.position.x, 0.5);
        assert_eq!(player.position.z, 0.5);
    }

    #[test]
    fn test_select_slot() {
        let mut player = Player::new(Vec3::ZERO);
        player.select_slot(3);
        assert_eq!(player.selected, BlockType::Log);
        player.select_slot(9);
        assert_eq!(player.selected, BlockType::Log);
    }
}
