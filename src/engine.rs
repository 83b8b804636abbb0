use glam::Vec3;
use log::{debug, info};

use crate::config::SandboxConfig;
use crate::player::{
    Controls, InputEvent, InputState, InteractionController, InteractionOutcome, Player,
};
use crate::world::{Block, GenerationStats, TerrainGenerator, World};

/// Owns the world and the player and advances them frame by frame.
pub struct Sandbox {
    pub config: SandboxConfig,
    world: World,
    player: Player,
    stats: GenerationStats,
    frame_counter: u64,
}

impl Sandbox {
    /// Generates the world once and places the player at the spawn point.
    pub fn new(config: SandboxConfig) -> Self {
        let mut world = World::new();
        let stats = TerrainGenerator::new(config.worldgen.clone()).generate(&mut world);
        info!(
            "Sandbox ready: {} blocks, spawn at {:?}",
            world.len(),
            config.gameplay.spawn()
        );
        Self::with_world(config, world, stats)
    }

    /// Starts from an existing world instead of generating one.
    pub fn with_world(config: SandboxConfig, world: World, stats: GenerationStats) -> Self {
        let player = Player::new(config.gameplay.spawn());
        Self {
            config,
            world,
            player,
            stats,
            frame_counter: 0,
        }
    }

    /// Runs one frame: queued events in arrival order, then physics. Nothing
    /// happens while `controls` is unlocked and queued events are dropped.
    pub fn frame(
        &mut self,
        delta: f32,
        input: &mut InputState,
        controls: &impl Controls,
    ) -> Vec<InteractionOutcome> {
        if !controls.is_locked() {
            if input.pending_events() > 0 {
                debug!("Dropping {} events while unlocked", input.pending_events());
            }
            input.clear_events();
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        let interaction = InteractionController::new(self.config.gameplay.interaction_distance);

        for event in input.drain_events() {
            match event {
                InputEvent::Click(button) => {
                    let outcome = interaction.handle_click(
                        &mut self.world,
                        button,
                        self.player.position,
                        controls.look_direction(),
                        self.player.selected,
                    );
                    outcomes.push(outcome);
                }
                InputEvent::SelectSlot(slot) => self.player.select_slot(slot),
            }
        }

        self.player
            .step(delta, input, controls, &self.world, &self.config.gameplay);
        self.frame_counter += 1;

        outcomes
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Current block set for the renderer.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.world.iter()
    }

    /// Blocks with at least one face open to air.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.world.visible_blocks()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.player.position
    }

    pub fn generation_stats(&self) -> GenerationStats {
        self.stats
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }
}
