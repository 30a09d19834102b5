//! PlyChess - Position Store Module
//!
//! Optional key-value persistence mapping a board encoding to a previously
//! computed best move or score. The search runs without one by default.
//!
//! The file format stores one record per line pair: the odd line is the key
//! (a board encoding), the following even line is the value. I/O failures are
//! logged and swallowed so they can never interrupt play.

use crate::types::Coordinate;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Encode a move value as `"(x,y) (x,y)"`
pub fn encode_move(from: Coordinate, to: Coordinate) -> String {
    format!("{} {}", from, to)
}

/// Decode a move value written by `encode_move`
pub fn decode_move(value: &str) -> Option<(Coordinate, Coordinate)> {
    let (from, to) = value.trim().split_once(' ')?;
    Some((Coordinate::parse(from)?, Coordinate::parse(to)?))
}

/// Position -> best move / score store
pub trait PositionStore {
    /// Best move recorded for a position, as `(from, to)`
    fn best_move(&self, key: &str) -> Option<(Coordinate, Coordinate)>;

    /// Score recorded for a position
    fn score(&self, key: &str) -> Option<i32>;

    fn record_best_move(&mut self, key: &str, from: Coordinate, to: Coordinate);

    fn record_score(&mut self, key: &str, score: i32);
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    moves: HashMap<String, String>,
    scores: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl PositionStore for MemoryStore {
    fn best_move(&self, key: &str) -> Option<(Coordinate, Coordinate)> {
        self.moves.get(key).and_then(|value| decode_move(value))
    }

    fn score(&self, key: &str) -> Option<i32> {
        self.scores.get(key).and_then(|value| value.trim().parse().ok())
    }

    fn record_best_move(&mut self, key: &str, from: Coordinate, to: Coordinate) {
        self.moves.insert(key.to_string(), encode_move(from, to));
    }

    fn record_score(&mut self, key: &str, score: i32) {
        self.scores.insert(key.to_string(), score.to_string());
    }
}

/// Append-only file-backed store, loaded once when opened
#[derive(Debug)]
pub struct FileStore {
    move_path: PathBuf,
    score_path: PathBuf,
    cache: MemoryStore,
}

impl FileStore {
    /// Open a store over the two record files. Missing or unreadable files
    /// leave the corresponding map empty.
    pub fn open(move_path: impl Into<PathBuf>, score_path: impl Into<PathBuf>) -> Self {
        let move_path = move_path.into();
        let score_path = score_path.into();

        let mut cache = MemoryStore::new();
        load_records(&move_path, &mut cache.moves);
        load_records(&score_path, &mut cache.scores);
        debug!(
            moves = cache.moves.len(),
            scores = cache.scores.len(),
            "position store loaded"
        );

        FileStore {
            move_path,
            score_path,
            cache,
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl PositionStore for FileStore {
    fn best_move(&self, key: &str) -> Option<(Coordinate, Coordinate)> {
        self.cache.best_move(key)
    }

    fn score(&self, key: &str) -> Option<i32> {
        self.cache.score(key)
    }

    fn record_best_move(&mut self, key: &str, from: Coordinate, to: Coordinate) {
        self.cache.record_best_move(key, from, to);
        append_record(&self.move_path, key, &encode_move(from, to));
    }

    fn record_score(&mut self, key: &str, score: i32) {
        self.cache.record_score(key, score);
        append_record(&self.score_path, key, &score.to_string());
    }
}

/// Read key/value line pairs into `map`. A trailing key without value is dropped.
fn load_records(path: &Path, map: &mut HashMap<String, String>) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to open position store");
            return;
        }
    };

    let mut key: Option<String> = None;
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read position store");
                return;
            }
        };
        match key.take() {
            None => key = Some(line),
            Some(k) => {
                map.insert(k, line);
            }
        }
    }
}

fn append_record(path: &Path, key: &str, value: &str) {
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{}\n{}", key, value));

    if let Err(e) = result {
        warn!(path = %path.display(), error = %e, "failed to append to position store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_values_round_trip() {
        let from = Coordinate::new(1, 0).unwrap();
        let to = Coordinate::new(2, 2).unwrap();
        assert_eq!(encode_move(from, to), "(1,0) (2,2)");
        assert_eq!(decode_move("(1,0) (2,2)"), Some((from, to)));
        assert_eq!(decode_move("garbage"), None);
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        let a = Coordinate::new(0, 0).unwrap();
        let b = Coordinate::new(0, 1).unwrap();
        store.record_best_move("k", a, b);
        store.record_best_move("k", b, a);
        store.record_score("k", -7);

        assert_eq!(store.len(), 1);
        assert_eq!(store.best_move("k"), Some((b, a)));
        assert_eq!(store.score("k"), Some(-7));
        assert_eq!(store.score("other"), None);
    }
}
