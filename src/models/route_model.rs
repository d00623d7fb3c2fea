// src/models/route_model.rs
// route data as the editor sees it, plus the persisted wire shape

use serde::{Deserialize, Serialize};

/// A committed step of the path. `order` is 1-based and strictly
/// increasing along the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPoint {
    pub row: u32,
    pub col: u32,
    pub order: u32,
}

impl PathPoint {
    pub fn cell(&self) -> (u32, u32) {
        (self.row, self.col)
    }
}

/// A route point as it sits in the store. The stored coordinates are
/// transposed relative to the editor: `x` is the row and `y` the column.
/// The mapping is part of the stored schema and is applied only at this
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePointWire {
    pub x: u32,
    pub y: u32,
    pub order: u32,
}

impl From<&PathPoint> for RoutePointWire {
    fn from(p: &PathPoint) -> Self {
        Self {
            x: p.row,
            y: p.col,
            order: p.order,
        }
    }
}

impl From<&RoutePointWire> for PathPoint {
    fn from(w: &RoutePointWire) -> Self {
        Self {
            row: w.x,
            col: w.y,
            order: w.order,
        }
    }
}

/// A stored route: name, owning board, ordered points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: u64,
    pub name: String,
    pub background: u64,
    #[serde(default)]
    pub points: Vec<RoutePointWire>,
}

impl RouteRecord {
    /// The stored points in editor coordinates, sorted by `order`.
    pub fn path_points(&self) -> Vec<PathPoint> {
        let mut points: Vec<PathPoint> = self.points.iter().map(PathPoint::from).collect();
        points.sort_by_key(|p| p.order);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_transposition() {
        let p = PathPoint {
            row: 2,
            col: 7,
            order: 3,
        };
        let w = RoutePointWire::from(&p);
        assert_eq!((w.x, w.y, w.order), (2, 7, 3));
        let back = PathPoint::from(&w);
        assert_eq!(back, p);
    }

    #[test]
    fn test_path_points_sorted_by_order() {
        let record = RouteRecord {
            id: 1,
            name: "r".to_string(),
            background: 1,
            points: vec![
                RoutePointWire { x: 0, y: 4, order: 3 },
                RoutePointWire { x: 0, y: 0, order: 1 },
                RoutePointWire { x: 0, y: 2, order: 2 },
            ],
        };
        let points = record.path_points();
        assert_eq!(points[0].cell(), (0, 0));
        assert_eq!(points[1].cell(), (0, 2));
        assert_eq!(points[2].cell(), (0, 4));
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = RouteRecord {
            id: 9,
            name: "loop".to_string(),
            background: 2,
            points: vec![RoutePointWire { x: 1, y: 1, order: 1 }],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: RouteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 9);
        assert_eq!(back.points.len(), 1);
        assert_eq!(back.points[0].x, 1);
    }
}
