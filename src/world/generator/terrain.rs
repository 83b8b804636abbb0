use glam::IVec3;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use super::height::HeightField;
use crate::config::WorldGenConfig;
use crate::world::block::{BlockType, VoxelPos};
use crate::world::store::World;

// Dirt layers between the grass cap and the stone below
const DIRT_DEPTH: i32 = 2;

/// Counters reported after a generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub columns: usize,
    pub terrain_blocks: usize,
    pub trees: usize,
    pub tree_blocks: usize,
    /// Tree blocks later replaced by a neighbouring column's terrain.
    pub overwritten: usize,
}

pub struct TerrainGenerator {
    config: WorldGenConfig,
    height: HeightField,
}

impl TerrainGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        let height = HeightField::new(&config);
        Self { config, height }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height
    }

    /// Block type at depth `top_y - y` within a column.
    pub fn layer_for(top_y: i32, y: i32) -> BlockType {
        match top_y - y {
            0 => BlockType::Grass,
            d if d <= DIRT_DEPTH => BlockType::Dirt,
            _ => BlockType::Stone,
        }
    }

    /// Fills `world` with every column of the region, growing trees as each
    /// column is finished.
    pub fn generate(&self, world: &mut World) -> GenerationStats {
        let mut rng = ChaCha12Rng::seed_from_u64(self.config.seed as u64);
        let mut stats = GenerationStats::default();
        let range = self.config.column_range();
        let base = self.config.base_level;

        for x in range.clone() {
            for z in range.clone() {
                let top_y = self.height.surface_height(x, z);
                for y in base..=top_y {
                    let previous = world.insert(IVec3::new(x, y, z), Self::layer_for(top_y, y));
                    if previous.is_some() {
                        stats.overwritten += 1;
                    }
                    stats.terrain_blocks += 1;
                }
                stats.columns += 1;

                if self.config.tree_chance > 0.0
                    && rng.gen_bool(self.config.tree_chance.min(1.0))
                {
                    let placed = self.place_tree(world, IVec3::new(x, top_y, z), &mut rng);
                    if placed > 0 {
                        stats.trees += 1;
                        stats.tree_blocks += placed;
                    }
                }
            }
        }

        if stats.overwritten > 0 {
            debug!("Terrain replaced {} tree blocks", stats.overwritten);
        }
        info!(
            "Generated {} columns: {} terrain blocks, {} trees ({} blocks)",
            stats.columns, stats.terrain_blocks, stats.trees, stats.tree_blocks
        );

        stats
    }

    /// Grows a tree on the surface block at `ground`. Only vacant cells inside
    /// the region are filled. A blocked trunk stops short and the canopy forms
    /// around the logs actually placed. Returns the number of blocks placed.
    pub fn place_tree(&self, world: &mut World, ground: VoxelPos, rng: &mut impl Rng) -> usize {
        let trunk_height = rng.gen_range(self.config.trunk_height_range()) as i32;

        let mut logs = 0;
        for y in ground.y + 1..=ground.y + trunk_height {
            if !world.insert_if_vacant(IVec3::new(ground.x, y, ground.z), BlockType::Log) {
                break;
            }
            logs += 1;
        }
        if logs == 0 {
            return 0;
        }

        let top = ground.y + logs;
        let mut placed = logs as usize;

        for (dy, radius) in [(-1, 2i32), (0, 2), (1, 1), (2, 1)] {
            let y = top + dy;
            for dx in -radius..=radius {
                for dz in -radius..=radius {
                    // Rounded silhouette
                    if dx.abs() == radius && dz.abs() == radius {
                        continue;
                    }
                    // Trunk and the gap above its top log
                    if dx == 0 && dz == 0 && y <= top + 1 {
                        continue;
                    }
                    let (lx, lz) = (ground.x + dx, ground.z + dz);
                    if !self.config.contains_column(lx, lz) {
                        continue;
                    }
                    if world.insert_if_vacant(IVec3::new(lx, y, lz), BlockType::Leaf) {
                        placed += 1;
                    }
                }
            }
        }

        placed
    }
}
