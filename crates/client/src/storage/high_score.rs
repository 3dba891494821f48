//! High-score persistence.
//!
//! The high score is a single decimal integer. Anything that cannot be read
//! back as one (missing file, garbage, negative numbers) counts as zero.
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors surfaced by high-score stores.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("high score store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable storage for the best score across sessions.
pub trait HighScoreStore: Send + Sync {
    /// Stored value, or 0 when nothing usable has been stored.
    fn load(&self) -> Result<u64>;

    fn save(&self, score: u64) -> Result<()>;
}

/// Keeps the high score in a file named `highScore` under a data directory.
#[derive(Clone, Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub const FILE_NAME: &'static str = "highScore";

    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u64> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse().unwrap_or(0)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&self, score: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        std::fs::write(&self.path, score.to_string()).map_err(|err| self.io_error(err))
    }
}

/// In-memory store for tests. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScoreStore {
    score: Arc<Mutex<u64>>,
}

impl MemoryHighScoreStore {
    pub fn new(initial: u64) -> Self {
        Self {
            score: Arc::new(Mutex::new(initial)),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u64> {
        self.score
            .lock()
            .map(|score| *score)
            .map_err(|_| StorageError::LockPoisoned)
    }

    fn save(&self, score: u64) -> Result<()> {
        let mut slot = self.score.lock().map_err(|_| StorageError::LockPoisoned)?;
        *slot = score;
        Ok(())
    }
}
