//! Level generation orchestration: table lookup, seeding, carving, fallback, finishing.

use log::{debug, error, warn};

use crate::config::GeneratorConfig;
use crate::types::{CellKind, Pos};

use super::algorithms::{self, CarveContext};
use super::fault::{CarveFault, StepBudget};
use super::grid::Grid;
use super::model::{FallbackEvent, LevelDescriptor, LevelRequest};
use super::progression::{self, Algorithm};
use super::rng::MazeRng;
use super::seed::derive_rng_seed;

#[derive(Clone, Debug, Default)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Total and deterministic: identical requests yield identical descriptors.
    pub fn generate(&self, request: &LevelRequest) -> LevelDescriptor {
        let total_level = progression::total_level_index(request.realm, request.level);
        let size = progression::grid_size(total_level);
        let seed = request.seed.resolve();
        let mode = Algorithm::for_realm(request.realm);

        let last = size as i32 - 2;
        let start = Pos::new(1, 1);
        let goal = Pos::new(last, last);

        let mut grid = Grid::filled(size);
        let mut rng = MazeRng::new(derive_rng_seed(seed, request.realm, request.level));
        let mut context = CarveContext {
            grid: &mut grid,
            rng: &mut rng,
            budget: StepBudget::limited(self.config.step_budget),
            start,
            goal,
        };
        let fallback = carve_with_fallback(mode, &mut context);
        if let Some(event) = fallback {
            warn!(
                "{} faulted for realm={} level={} seed={seed}: {}; carved with backtracker instead",
                event.requested, request.realm, request.level, event.fault
            );
        }

        if let Err(fault) = finish(&mut grid, start, goal) {
            error!("failed to stamp start/goal on {size}x{size} grid: {fault}");
        }
        debug!("generated {mode} level total={total_level} size={size} seed={seed}");

        LevelDescriptor {
            grid,
            width: size,
            height: size,
            start,
            goal,
            total_level,
            realm: request.realm,
            level: request.level,
            seed,
            mode,
            fallback,
        }
    }
}

/// Runs `mode`; on a fault, resets the grid and reruns the backtracker without a budget.
fn carve_with_fallback(mode: Algorithm, context: &mut CarveContext<'_>) -> Option<FallbackEvent> {
    let fault = algorithms::run(mode, context).err()?;

    context.grid.reset();
    context.budget = StepBudget::unlimited();
    if let Err(retry_fault) = algorithms::run(Algorithm::Backtracker, context) {
        error!("backtracker fallback faulted after {mode} failed: {retry_fault}");
    }
    Some(FallbackEvent { requested: mode, fault })
}

fn finish(grid: &mut Grid, start: Pos, goal: Pos) -> Result<(), CarveFault> {
    grid.seal_border();
    grid.set(start, CellKind::Start)?;
    grid.set(goal, CellKind::Goal)
}
