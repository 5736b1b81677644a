//! Procedural maze generation split into coherent submodules.

pub mod model;
pub mod progression;

mod algorithms;
pub(crate) mod disjoint_set;
mod fault;
mod generator;
mod grid;
mod rng;
mod seed;

pub use fault::CarveFault;
pub use generator::MazeGenerator;
pub use grid::Grid;
pub use model::{FallbackEvent, LevelDescriptor, LevelRequest};
pub use progression::{Algorithm, MAX_TOTAL_LEVEL, UnknownAlgorithm};
pub use rng::MazeRng;
pub use seed::SeedInput;

/// Generates one level with the default configuration.
pub fn generate_level(request: &LevelRequest) -> LevelDescriptor {
    MazeGenerator::default().generate(request)
}

#[cfg(test)]
mod tests {
    use super::{LevelRequest, MazeGenerator};

    #[test]
    fn generate_level_matches_maze_generator_output() {
        let request = LevelRequest::new(4, 2, 123);

        let from_helper = super::generate_level(&request);
        let from_generator = MazeGenerator::default().generate(&request);

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn default_request_starts_at_the_first_level() {
        let request = LevelRequest::default();
        assert_eq!((request.realm, request.level), (1, 1));
        let level = super::generate_level(&request);
        assert_eq!(level.width, 25);
    }
}
