//! High score persistence
//!
//! The only durable state is a single integer. [`JsonFileStore`] keeps it in a
//! small JSON document; [`MemoryStore`] keeps it in memory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default file name for the saved high score
pub const DEFAULT_HIGH_SCORE_FILE: &str = "snake_highscore.json";

/// Durable storage for the high score
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing has been saved
    fn load_high_score(&self) -> u32;

    /// Replace the stored high score
    fn save_high_score(&mut self, score: u32);
}

/// On-disk representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

/// High score kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, failing if the file is missing or malformed
    pub fn read_record(&self) -> Result<HighScoreRecord> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        serde_json::from_str(&json).context("Failed to deserialize high score")
    }

    /// Write the record, creating parent directories if needed
    pub fn write_record(&self, record: HighScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json =
            serde_json::to_string_pretty(&record).context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> u32 {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved high score");
            return 0;
        }

        match self.read_record() {
            Ok(record) => record.high_score,
            Err(err) => {
                warn!("{:#}; treating high score as 0", err);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(err) = self.write_record(HighScoreRecord { high_score: score }) {
            warn!("{:#}", err);
        }
    }
}

/// High score kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    /// Number of saves performed
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out holding a previously saved score
    pub fn with_high_score(score: u32) -> Self {
        Self {
            value: Some(score),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32) {
        self.value = Some(score);
        self.saves += 1;
    }
}
