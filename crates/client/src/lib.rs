//! Terminal frontend for the 2048 engine.
//!
//! The binary in `main.rs` is the composition root: it loads
//! [`ClientConfig`], installs file logging, and hands control to [`App`].
//! Everything that touches game rules goes through [`GameController`], which
//! keeps the current session and persists the high score.

pub mod app;
pub mod config;
pub mod controller;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod storage;

pub use app::App;
pub use config::ClientConfig;
pub use controller::{Dispatch, GameController};
pub use input::{KeyAction, key_action};
pub use storage::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, StorageError};
