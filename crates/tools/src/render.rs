//! Plain-text rendering of a generated level for terminal inspection.

use mazegen::{CellKind, LevelDescriptor};

pub fn render_ascii(level: &LevelDescriptor) -> String {
    let mut out = format!(
        "{} | {}x{} | total level {} (realm {}, level {}) | seed {}\n",
        level.mode, level.width, level.height, level.total_level, level.realm, level.level, level.seed
    );
    if let Some(event) = level.fallback {
        out.push_str(&format!("fallback: {} faulted ({})\n", event.requested, event.fault));
    }
    for row in level.grid.rows() {
        out.extend(row.iter().map(|&cell| glyph(cell)));
        out.push('\n');
    }
    out
}

fn glyph(cell: CellKind) -> char {
    match cell {
        CellKind::Wall => '#',
        CellKind::Path => ' ',
        CellKind::Start => 'S',
        CellKind::Goal => 'G',
    }
}
