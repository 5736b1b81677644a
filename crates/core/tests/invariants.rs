use mazegen::topology::{RoomGraph, walkable_cells_connected};
use mazegen::{
    Algorithm, CellKind, GeneratorConfig, LevelDescriptor, LevelRequest, MazeGenerator, Pos,
    generate_level,
};
use proptest::prelude::*;

fn check_invariants(level: &LevelDescriptor) -> Result<(), TestCaseError> {
    let last = level.width as i32 - 1;
    for i in 0..=last {
        for (x, y) in [(i, 0), (i, last), (0, i), (last, i)] {
            prop_assert_eq!(level.cell_at(Pos::new(x, y)), CellKind::Wall);
        }
    }
    prop_assert_ne!(level.start, level.goal);
    prop_assert_eq!(level.width % 2, 1);
    prop_assert_eq!(level.width, level.height);

    if level.mode.produces_perfect_maze() || level.fallback.is_some() {
        let graph = RoomGraph::analyze(&level.grid);
        prop_assert!(graph.is_perfect(), "{} produced {:?}", level.mode, graph);
    } else {
        prop_assert!(walkable_cells_connected(&level.grid));
    }
    Ok(())
}

#[test]
fn every_total_level_has_an_odd_non_decreasing_size() {
    let mut previous = 0;
    for total in 1..=100_u32 {
        let realm = (total - 1) / 10 + 1;
        let level = (total - 1) % 10 + 1;
        let generated = generate_level(&LevelRequest::new(realm, level, 5));
        assert_eq!(generated.total_level, total);
        assert_eq!(generated.width % 2, 1, "total level {total} is even-sized");
        assert!(generated.width >= previous, "size shrank at total level {total}");
        previous = generated.width;
    }
}

#[test]
fn forced_fault_still_yields_a_playable_perfect_maze() {
    let generator = MazeGenerator::new(GeneratorConfig { step_budget: 0 });
    for (realm, algorithm) in (1_u32..).zip(Algorithm::ALL) {
        let level = generator.generate(&LevelRequest::new(realm, 2, "fallback"));
        assert_eq!(level.mode, algorithm, "mode reports the requested algorithm");
        let event = level.fallback.expect("zero budget should force a fallback");
        assert_eq!(event.requested, algorithm);
        check_invariants(&level).expect("fallback output should satisfy every invariant");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn generated_levels_satisfy_structural_invariants(
        realm in 1_u32..=10,
        level in 1_u32..=10,
        seed in any::<i64>(),
    ) {
        let generated = generate_level(&LevelRequest::new(realm, level, seed));
        check_invariants(&generated)?;
    }

    #[test]
    fn text_seeds_are_deterministic(
        realm in 1_u32..=10,
        seed in "[a-zA-Z0-9 ]{0,16}",
    ) {
        let request = LevelRequest::new(realm, 1, seed.as_str());
        let first = generate_level(&request);
        let second = generate_level(&request);
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
    }
}
