//! Persistence for data that outlives a session.
mod high_score;

pub use high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, StorageError};
