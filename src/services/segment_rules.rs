// src/services/segment_rules.rs
// legality of a candidate route step against the current path and board

use crate::models::Board;
use crate::services::path_editor::EditorState;
use crate::utilities::segment_geometry::{segment_weakly_reverses, segments_cross};

/// Decides whether the path may step from its last committed point to
/// `(row, col)`. Runs for both hover previews and click commits, so it is
/// a pure predicate: no state is touched and repeated calls with the same
/// arguments agree.
///
/// Rules, in order:
/// 1. the candidate shares exactly one axis with the last point;
/// 2. the candidate is not already on the path;
/// 3. the new segment crosses no committed segment;
/// 4. with two or more points down, the new segment does not double back
///    over the immediately preceding one;
/// 5. no foreign-colored dot sits strictly between the last point and the
///    candidate;
/// 6. a dot on the candidate cell itself must match the active color.
pub fn is_segment_valid(state: &EditorState, board: &Board, row: u32, col: u32) -> bool {
    let pts = &state.points;
    let last = match pts.last() {
        Some(p) => p,
        None => return false,
    };

    let same_row = last.row == row;
    let same_col = last.col == col;
    if same_row == same_col {
        return false; // sharing both axes or neither
    }

    if pts.iter().any(|p| p.row == row && p.col == col) {
        return false;
    }

    // crossing against every committed segment except the one being formed
    for i in 1..pts.len().saturating_sub(1) {
        let a = pts[i - 1].cell();
        let b = pts[i].cell();
        if segments_cross(a, b, last.cell(), (row, col)) {
            return false;
        }
    }

    if pts.len() >= 2 {
        let a = pts[pts.len() - 2].cell();
        let b = pts[pts.len() - 1].cell();
        if segment_weakly_reverses(a, b, (row, col)) {
            return false;
        }
    }

    // foreign dots strictly between the endpoints
    let (min, max) = if same_row {
        (last.col.min(col), last.col.max(col))
    } else {
        (last.row.min(row), last.row.max(row))
    };
    for dot in &board.dots {
        if state.color.as_deref() == Some(dot.color.as_str()) {
            continue;
        }
        if same_row && dot.row == row && dot.col > min && dot.col < max {
            return false;
        }
        if same_col && dot.col == col && dot.row > min && dot.row < max {
            return false;
        }
    }

    if let Some(dot) = board.find_dot(row, col) {
        if state.color.as_deref() != Some(dot.color.as_str()) {
            return false;
        }
    }

    true
}
