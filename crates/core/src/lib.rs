pub mod config;
pub mod mapgen;
pub mod topology;
pub mod types;

pub use config::{ConfigError, GeneratorConfig};
pub use mapgen::{
    Algorithm, CarveFault, FallbackEvent, Grid, LevelDescriptor, LevelRequest, MazeGenerator,
    SeedInput, generate_level,
};
pub use types::{CellKind, Pos};
