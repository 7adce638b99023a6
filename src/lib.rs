//! TUI Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic: the tick-driven state machine (game module)
//! - High score storage (persistence module)
//! - Scene recording and ratatui drawing (render module)
//! - Keyboard mapping (input module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod persistence;
pub mod render;
