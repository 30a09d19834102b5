//! PlyChess - Engine configuration
//!
//! Settings are read from TOML. Every field is optional:
//!
//! ```toml
//! depth = 3
//! max_plies = 200
//! move_store = "movedata.txt"
//! score_store = "scoredata.txt"
//! ```

use crate::error::{ChessError, Result};
use crate::search::DEFAULT_DEPTH;
use crate::store::FileStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper limit on half-moves in a self-play game
pub const DEFAULT_MAX_PLIES: u32 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Plies searched per move
    pub depth: u32,
    pub max_plies: u32,
    /// Record file for position -> best move
    pub move_store: Option<PathBuf>,
    /// Record file for position -> score
    pub score_store: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            max_plies: DEFAULT_MAX_PLIES,
            move_store: None,
            score_store: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| ChessError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        EngineConfig::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(ChessError::Config("depth must be at least 1".to_string()));
        }
        if self.move_store.is_some() != self.score_store.is_some() {
            return Err(ChessError::Config(
                "move_store and score_store must be set together".to_string(),
            ));
        }
        Ok(())
    }

    /// File store over the configured record files, if both are set
    pub fn open_store(&self) -> Option<FileStore> {
        match (&self.move_store, &self.score_store) {
            (Some(moves), Some(scores)) => Some(FileStore::open(moves, scores)),
            _ => None,
        }
    }
}
