//! Core game logic module for Snake
//!
//! This module contains the game state machine without any terminal I/O.
//! Drawing, high score storage and tick scheduling are reached through the
//! `Renderer`, `HighScoreStore` and `Ticker` traits so the engine can be
//! driven headlessly.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod speed;
pub mod state;
pub mod ticker;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{Controls, GameEngine, TickOutcome};
pub use speed::Difficulty;
pub use state::{CollisionType, GameOverReason, GameState, Position, RunState, Snake};
pub use ticker::{ManualTicker, Ticker, TokioTicker};
