use mazegen::topology::{RoomGraph, walkable_cells_connected};
use mazegen::{Algorithm, CellKind, LevelRequest, Pos, generate_level};

#[test]
fn first_realm_first_level_is_a_small_backtracker_maze() {
    let level = generate_level(&LevelRequest::new(1, 1, 42));
    assert_eq!(level.width, 25);
    assert_eq!(level.height, 25);
    assert_eq!(level.mode, Algorithm::Backtracker);
    assert_eq!(level.start, Pos::new(1, 1));
    assert_eq!(level.goal, Pos::new(23, 23));
    assert_eq!(level.cell_at(level.start), CellKind::Start);
    assert_eq!(level.cell_at(level.goal), CellKind::Goal);
}

#[test]
fn final_level_uses_largest_grid_and_sparse_backtracker() {
    let level = generate_level(&LevelRequest::new(10, 10, 42));
    assert_eq!(level.total_level, 100);
    assert_eq!(level.width, 91);
    assert_eq!(level.height, 91);
    assert_eq!(level.mode, Algorithm::BacktrackerSparse);
    assert_eq!(level.mode.name(), "backtracker_sparse");
    assert!(RoomGraph::analyze(&level.grid).is_perfect());
}

#[test]
fn kruskal_realm_opens_exactly_rooms_minus_one_connections() {
    let level = generate_level(&LevelRequest::new(3, 1, 7));
    assert_eq!(level.mode, Algorithm::Kruskal);
    let graph = RoomGraph::analyze(&level.grid);
    assert_eq!(graph.rooms, 144);
    assert_eq!(graph.connections, graph.rooms - 1);
    assert_eq!(graph.components, 1);
}

#[test]
fn recursive_division_keeps_start_and_goal_open() {
    let level = generate_level(&LevelRequest::new(9, 1, 1));
    assert_eq!(level.mode, Algorithm::RecursiveDivision);
    assert!(level.cell_at(level.start).is_walkable());
    assert!(level.cell_at(level.goal).is_walkable());
    assert!(walkable_cells_connected(&level.grid));
}

#[test]
fn descriptor_serializes_with_renderer_field_names() {
    let level = generate_level(&LevelRequest::new(1, 1, 42));
    let json = serde_json::to_value(&level).expect("descriptor should serialize");

    assert_eq!(json["width"], 25);
    assert_eq!(json["totalLevel"], 1);
    assert_eq!(json["mode"], "backtracker");
    assert_eq!(json["seed"], 42);
    assert_eq!(json["start"]["x"], 1);
    assert_eq!(json["goal"]["y"], 23);
    assert_eq!(json["grid"][1][1], 2);
    assert_eq!(json["grid"][23][23], 3);
    assert_eq!(json["grid"][0][0], 1);
    assert!(json.get("fallback").is_none(), "fallback is omitted when nothing faulted");
}
