// src/services/route_store.rs
//
// File-backed board and route persistence. Boards are read-only JSON
// documents; routes live one-per-file under the store directory in the
// stored wire shape ({x, y, order}, transposed relative to editor
// coordinates).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Board, PathPoint, RoutePointWire, RouteRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("route {0} does not exist")]
    NoSuchRoute(u64),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode route: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct RouteStore {
    directory: PathBuf,
}

impl RouteStore {
    /// Opens a store rooted at `directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self, io::Error> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    fn route_path(&self, id: u64) -> PathBuf {
        self.directory.join(format!("route_{}.json", id))
    }

    /// Loads a board document. Any failure leaves the caller with its
    /// defaults; there is no partially-populated board.
    pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a stored route, or `None` when no file exists for the id.
    pub fn load_route(&self, id: u64) -> Result<Option<RouteRecord>, LoadError> {
        let path = self.route_path(id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        let record =
            serde_json::from_str(&content).map_err(|source| LoadError::Malformed { path, source })?;
        Ok(Some(record))
    }

    /// Finds the route belonging to `board_id`, if one was saved before.
    /// Each board holds at most one route.
    pub fn find_route_for_board(&self, board_id: u64) -> Result<Option<RouteRecord>, LoadError> {
        let entries = fs::read_dir(&self.directory).map_err(|source| LoadError::Io {
            path: self.directory.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            let record: RouteRecord = serde_json::from_str(&content)
                .map_err(|source| LoadError::Malformed { path, source })?;
            if record.background == board_id {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Saves a finished path in two steps: create the route (or rename an
    /// existing one), then replace its points wholesale. A failed point
    /// replace is reported to the caller but the create/rename is not
    /// rolled back.
    pub fn save_route(
        &self,
        id: Option<u64>,
        name: &str,
        board_id: u64,
        points: &[PathPoint],
    ) -> Result<u64, SaveError> {
        let id = match id {
            None => self.create_route(name, board_id)?,
            Some(id) => {
                self.rename_route(id, name)?;
                id
            }
        };
        self.replace_points(id, points)?;
        Ok(id)
    }

    fn create_route(&self, name: &str, board_id: u64) -> Result<u64, SaveError> {
        let id = self.next_id();
        let record = RouteRecord {
            id,
            name: name.to_string(),
            background: board_id,
            points: Vec::new(),
        };
        self.write_record(&record)?;
        Ok(id)
    }

    fn rename_route(&self, id: u64, name: &str) -> Result<(), SaveError> {
        let mut record = match self.load_route(id) {
            Ok(Some(record)) => record,
            Ok(None) => return Err(SaveError::NoSuchRoute(id)),
            Err(LoadError::Io { path, source }) => return Err(SaveError::Io { path, source }),
            Err(LoadError::Malformed { .. }) => return Err(SaveError::NoSuchRoute(id)),
        };
        record.name = name.to_string();
        self.write_record(&record)
    }

    /// The idempotent bulk replace: every stored point of the route is
    /// swapped for the given path, orders renumbered from 1.
    pub fn replace_points(&self, id: u64, points: &[PathPoint]) -> Result<(), SaveError> {
        let mut record = match self.load_route(id) {
            Ok(Some(record)) => record,
            Ok(None) => return Err(SaveError::NoSuchRoute(id)),
            Err(LoadError::Io { path, source }) => return Err(SaveError::Io { path, source }),
            Err(LoadError::Malformed { .. }) => return Err(SaveError::NoSuchRoute(id)),
        };
        record.points = points
            .iter()
            .enumerate()
            .map(|(i, p)| RoutePointWire {
                x: p.row,
                y: p.col,
                order: i as u32 + 1,
            })
            .collect();
        self.write_record(&record)
    }

    /// Removes a stored route. Missing files are fine; deletion is
    /// idempotent.
    pub fn delete_route(&self, id: u64) -> Result<(), SaveError> {
        let path = self.route_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SaveError::Io { path, source }),
        }
    }

    fn write_record(&self, record: &RouteRecord) -> Result<(), SaveError> {
        let path = self.route_path(record.id);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|source| SaveError::Io { path, source })
    }

    fn next_id(&self) -> u64 {
        let mut max = 0;
        if let Ok(entries) = fs::read_dir(&self.directory) {
            for entry in entries.flatten() {
                if let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) {
                    if let Some(id) = stem.strip_prefix("route_").and_then(|s| s.parse().ok()) {
                        max = u64::max(max, id);
                    }
                }
            }
        }
        max + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_store(tag: &str) -> RouteStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        let dir = std::env::temp_dir().join(format!(
            "routevis_store_{}_{}_{}",
            tag,
            std::process::id(),
            nanos
        ));
        RouteStore::new(dir).unwrap()
    }

    fn sample_path() -> Vec<PathPoint> {
        vec![
            PathPoint { row: 0, col: 0, order: 1 },
            PathPoint { row: 0, col: 2, order: 2 },
            PathPoint { row: 3, col: 2, order: 3 },
        ]
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("round_trip");
        let path = sample_path();
        let id = store.save_route(None, "morning run", 7, &path).unwrap();

        let record = store.load_route(id).unwrap().unwrap();
        assert_eq!(record.name, "morning run");
        assert_eq!(record.background, 7);
        // same (row, col, order) triples despite the {x, y} transposition
        assert_eq!(record.path_points(), path);
    }

    #[test]
    fn test_load_missing_route_is_none() {
        let store = temp_store("missing");
        assert!(store.load_route(42).unwrap().is_none());
    }

    #[test]
    fn test_save_existing_renames_and_replaces() {
        let store = temp_store("rename");
        let id = store.save_route(None, "first", 1, &sample_path()).unwrap();

        let shorter = vec![
            PathPoint { row: 4, col: 4, order: 1 },
            PathPoint { row: 4, col: 1, order: 2 },
        ];
        let same_id = store.save_route(Some(id), "second", 1, &shorter).unwrap();
        assert_eq!(same_id, id);

        let record = store.load_route(id).unwrap().unwrap();
        assert_eq!(record.name, "second");
        assert_eq!(record.path_points(), shorter);
    }

    #[test]
    fn test_replace_renumbers_orders() {
        let store = temp_store("renumber");
        let id = store.save_route(None, "r", 1, &sample_path()).unwrap();
        // orders in the input are ignored; the stored sequence counts from 1
        let scrambled = vec![
            PathPoint { row: 1, col: 1, order: 9 },
            PathPoint { row: 1, col: 3, order: 4 },
        ];
        store.replace_points(id, &scrambled).unwrap();
        let record = store.load_route(id).unwrap().unwrap();
        let orders: Vec<u32> = record.points.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_rename_missing_route_fails() {
        let store = temp_store("no_such");
        let err = store
            .save_route(Some(99), "ghost", 1, &sample_path())
            .unwrap_err();
        assert!(matches!(err, SaveError::NoSuchRoute(99)));
    }

    #[test]
    fn test_find_route_for_board() {
        let store = temp_store("find");
        store.save_route(None, "a", 3, &sample_path()).unwrap();
        let id_b = store.save_route(None, "b", 8, &sample_path()).unwrap();

        let found = store.find_route_for_board(8).unwrap().unwrap();
        assert_eq!(found.id, id_b);
        assert!(store.find_route_for_board(99).unwrap().is_none());
    }

    #[test]
    fn test_delete_route_is_idempotent() {
        let store = temp_store("delete");
        let id = store.save_route(None, "gone", 1, &sample_path()).unwrap();
        store.delete_route(id).unwrap();
        assert!(store.load_route(id).unwrap().is_none());
        store.delete_route(id).unwrap();
    }

    #[test]
    fn test_load_board_missing_file_is_io_error() {
        let err = RouteStore::load_board("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
