pub mod height;
pub mod terrain;

pub use height::HeightField;
pub use terrain::{GenerationStats, TerrainGenerator};
