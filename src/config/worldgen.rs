use serde::{Deserialize, Serialize};

/// Terrain generation parameters. Columns span `-world_size / 2 .. world_size / 2`
/// on both horizontal axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub seed: u32,
    pub world_size: u32,
    pub base_level: i32,
    /// Smaller values give broader hills.
    pub frequency: f64,
    /// Vertical range of the surface above `base_level`.
    pub amplitude: f64,
    pub octaves: usize,
    /// Per-column probability of growing a tree on the surface.
    pub tree_chance: f64,
    /// Inclusive trunk height range in blocks.
    pub trunk_height: (u32, u32),
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            world_size: 32,
            base_level: -8,
            frequency: 0.05,
            amplitude: 8.0,
            octaves: 2,
            tree_chance: 0.01,
            trunk_height: (4, 6),
        }
    }
}

impl WorldGenConfig {
    /// Half-open column range covered on each horizontal axis.
    pub fn column_range(&self) -> std::ops::Range<i32> {
        let half = (self.world_size / 2) as i32;
        -half..(self.world_size as i32 - half)
    }

    pub fn contains_column(&self, x: i32, z: i32) -> bool {
        let range = self.column_range();
        range.contains(&x) && range.contains(&z)
    }

    pub fn trunk_height_range(&self) -> std::ops::RangeInclusive<u32> {
        let (a, b) = self.trunk_height;
        a.min(b)..=a.max(b)
    }
}
