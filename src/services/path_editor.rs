// src/services/path_editor.rs
//
// The path-construction state machine. Owns the editor state and applies
// user actions; everything that touches the path goes through `apply`.
// The machine knows nothing about windows, pointers or files.

use crate::models::{Board, PathPoint};
use crate::services::segment_rules::is_segment_valid;

/// Lifecycle stage of the path under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Building,
    Finished,
}

/// A user-level editing action, already resolved to grid coordinates by
/// the hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Click in `Idle`: start a path if the cell holds a dot.
    StartPath { row: u32, col: u32 },
    /// Click in `Building`: commit the next point if the segment is legal.
    ExtendPath { row: u32, col: u32 },
    /// Pointer entering a cell in `Building`: update the preview only.
    HoverPreview { row: u32, col: u32 },
    /// Remove the last committed point.
    UndoLast,
    /// Drop the whole path and return to `Idle`.
    ClearAll,
}

/// What an `apply` call did, so the hosting shell can react (redraw,
/// enable the save control, announce) without inspecting the state diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Started,
    Extended,
    Completed,
    PreviewMoved,
    Undone,
    Cleared,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub phase: Phase,
    pub color: Option<String>,
    pub points: Vec<PathPoint>,
    pub preview: Option<(u32, u32)>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            color: None,
            points: Vec::new(),
            preview: None,
        }
    }

    /// Rebuilds the state from persisted route points. A non-empty list
    /// opens the editor on the finished path; the color is inferred from
    /// the dot under the first point. An empty list stays `Idle`.
    pub fn from_route(points: Vec<PathPoint>, board: &Board) -> Self {
        if points.is_empty() {
            return Self::new();
        }
        let color = board
            .find_dot(points[0].row, points[0].col)
            .map(|d| d.color.clone());
        Self {
            phase: Phase::Finished,
            color,
            points,
            preview: None,
        }
    }

    /// Applies one action. Illegal actions leave the state untouched and
    /// report `Applied::Rejected`.
    pub fn apply(&mut self, action: EditorAction, board: &Board) -> Applied {
        match action {
            EditorAction::StartPath { row, col } => self.start(row, col, board),
            EditorAction::ExtendPath { row, col } => self.extend(row, col, board),
            EditorAction::HoverPreview { row, col } => self.hover(row, col, board),
            EditorAction::UndoLast => self.undo_last(),
            EditorAction::ClearAll => self.clear_all(),
        }
    }

    fn start(&mut self, row: u32, col: u32, board: &Board) -> Applied {
        if self.phase != Phase::Idle {
            return Applied::Rejected;
        }
        let dot = match board.find_dot(row, col) {
            Some(d) => d,
            None => return Applied::Rejected,
        };
        self.phase = Phase::Building;
        self.color = Some(dot.color.clone());
        self.points = vec![PathPoint { row, col, order: 1 }];
        self.preview = None;
        Applied::Started
    }

    fn extend(&mut self, row: u32, col: u32, board: &Board) -> Applied {
        if self.phase != Phase::Building {
            return Applied::Rejected;
        }
        if !is_segment_valid(self, board, row, col) {
            return Applied::Rejected;
        }
        let order = self.points.len() as u32 + 1;
        self.points.push(PathPoint { row, col, order });
        self.preview = None;

        let lands_on_terminus = board
            .find_dot(row, col)
            .map(|d| Some(d.color.as_str()) == self.color.as_deref())
            .unwrap_or(false);
        if lands_on_terminus && self.points.len() >= 2 {
            self.phase = Phase::Finished;
            Applied::Completed
        } else {
            Applied::Extended
        }
    }

    fn hover(&mut self, row: u32, col: u32, board: &Board) -> Applied {
        if self.phase != Phase::Building {
            return Applied::Rejected;
        }
        // an invalid hover target leaves any previous preview in place
        if !is_segment_valid(self, board, row, col) {
            return Applied::Rejected;
        }
        self.preview = Some((row, col));
        Applied::PreviewMoved
    }

    fn undo_last(&mut self) -> Applied {
        if self.phase == Phase::Idle {
            return Applied::Rejected;
        }
        // the first undo from Finished reopens editing and pops together
        if self.phase == Phase::Finished {
            self.phase = Phase::Building;
        }
        self.points.pop();
        if self.points.is_empty() {
            self.phase = Phase::Idle;
            self.color = None;
        }
        self.preview = None;
        Applied::Undone
    }

    fn clear_all(&mut self) -> Applied {
        self.phase = Phase::Idle;
        self.color = None;
        self.points.clear();
        self.preview = None;
        Applied::Cleared
    }

    pub fn is_path_cell(&self, row: u32, col: u32) -> bool {
        self.points.iter().any(|p| p.row == row && p.col == col)
    }

    /// Saving is only permitted on a completed path.
    pub fn can_save(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// `(row, col)` readout of the path in order, for the HUD point list.
    pub fn point_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| format!("({}, {})", p.row, p.col))
            .collect()
    }
}
