use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::config::WorldGenConfig;

/// Seeded 2D height function driving the terrain surface.
pub struct HeightField {
    noise: Fbm<Perlin>,
    base_level: i32,
    amplitude: f64,
}

impl HeightField {
    pub fn new(config: &WorldGenConfig) -> Self {
        let noise = Fbm::<Perlin>::new(config.seed)
            .set_octaves(config.octaves.max(1))
            .set_frequency(config.frequency);

        Self {
            noise,
            base_level: config.base_level,
            amplitude: config.amplitude,
        }
    }

    /// Raw noise in `[-1, 1]` for the column at `(x, z)`.
    pub fn sample(&self, x: i32, z: i32) -> f64 {
        let value = self.noise.get([x as f64, z as f64]);
        if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Y of the topmost block in the column.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let normalized = (self.sample(x, z) + 1.0) / 2.0;
        let offset = normalized * self.amplitude;
        if !offset.is_finite() {
            return self.base_level;
        }
        (self.base_level as f64 + offset).floor() as i32
    }

    pub fn base_level(&self) -> i32 {
        self.base_level
    }
}
