// src/models/board_model.rs
// the JSON-based board data model

use serde::{Deserialize, Serialize};

/// A fixed colored endpoint on the board. Colors are CSS-style hex
/// strings as produced by the board editor palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    pub row: u32,
    pub col: u32,
    pub color: String,
}

/// A playing board: grid dimensions plus the dot layout. The board editor
/// keeps at most two dots per color; this side only reads the data and
/// treats every dot of the active color as a valid path terminus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub title: String,
    pub rows: u32,
    pub cols: u32,
    #[serde(default)]
    pub dots: Vec<Dot>,
}

impl Board {
    /// An empty 0x0 board, used until a real one is loaded.
    pub fn empty() -> Self {
        Self {
            id: 0,
            title: String::new(),
            rows: 0,
            cols: 0,
            dots: Vec::new(),
        }
    }

    pub fn find_dot(&self, row: u32, col: u32) -> Option<&Dot> {
        self.dots.iter().find(|d| d.row == row && d.col == col)
    }

    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_json() {
        let json = r##"{
            "id": 3,
            "title": "First board",
            "rows": 5,
            "cols": 6,
            "dots": [
                { "row": 0, "col": 0, "color": "#ef4444" },
                { "row": 0, "col": 4, "color": "#ef4444" }
            ]
        }"##;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.rows, 5);
        assert_eq!(board.cols, 6);
        assert_eq!(board.dots.len(), 2);
        assert_eq!(board.find_dot(0, 4).unwrap().color, "#ef4444");
        assert!(board.find_dot(1, 1).is_none());
    }

    #[test]
    fn test_dots_field_is_optional() {
        let json = r#"{ "id": 1, "title": "bare", "rows": 4, "cols": 4 }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert!(board.dots.is_empty());
    }

    #[test]
    fn test_in_bounds() {
        let board = Board {
            id: 1,
            title: "b".to_string(),
            rows: 3,
            cols: 4,
            dots: Vec::new(),
        };
        assert!(board.in_bounds(2, 3));
        assert!(!board.in_bounds(3, 0));
        assert!(!board.in_bounds(0, 4));
    }
}
