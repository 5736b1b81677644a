use anyhow::{Context, Result, ensure};
use clap::Parser;
use mazegen::topology::{RoomGraph, walkable_cells_connected};
use mazegen::{CellKind, LevelDescriptor, LevelRequest, Pos, SeedInput, generate_level};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    cases: u32,
}

fn random_seed(rng: &mut ChaCha8Rng) -> SeedInput {
    // Bias towards numeric seeds; text seeds exercise the string fold.
    if rng.next_u64() % 4 == 0 {
        SeedInput::Textual(format!("fuzz-{:x}", rng.next_u64()))
    } else {
        SeedInput::Numeric(rng.next_u64() as i64)
    }
}

fn check_invariants(level: &LevelDescriptor) -> Result<()> {
    let last = level.width as i32 - 1;
    for i in 0..=last {
        for pos in [Pos::new(i, 0), Pos::new(i, last), Pos::new(0, i), Pos::new(last, i)] {
            ensure!(level.cell_at(pos) == CellKind::Wall, "Invariant failed: border {pos:?} open");
        }
    }
    ensure!(level.start != level.goal, "Invariant failed: start equals goal");
    ensure!(level.width % 2 == 1, "Invariant failed: even grid size {}", level.width);
    ensure!(level.fallback.is_none(), "Invariant failed: unexpected fallback {:?}", level.fallback);

    if level.mode.produces_perfect_maze() {
        let graph = RoomGraph::analyze(&level.grid);
        ensure!(graph.is_perfect(), "Invariant failed: {} is not a perfect maze: {graph:?}", level.mode);
    } else {
        ensure!(
            walkable_cells_connected(&level.grid),
            "Invariant failed: {} left unreachable cells",
            level.mode
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting maze fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for case in 0..args.cases {
        let realm = 1 + (rng.next_u64() % 12) as u32;
        let level = 1 + (rng.next_u64() % 12) as u32;
        let request = LevelRequest { realm, level, seed: random_seed(&mut rng) };

        let generated = generate_level(&request);
        check_invariants(&generated).with_context(|| format!("case {case}: {request:?}"))?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
