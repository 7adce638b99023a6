//! Presentation side of the game.
//!
//! The engine draws through the [`Renderer`] trait. The terminal front end
//! uses [`Scene`], which keeps whatever was last drawn so the ratatui
//! [`View`] can repaint it at its own frame rate.

pub mod renderer;
pub mod scene;

pub use renderer::{Hud, View};
pub use scene::Scene;

use crate::game::Position;

/// Drawing operations the engine issues
pub trait Renderer {
    /// Draw the empty board grid
    fn draw_grid(&mut self);

    /// Draw one frame: the snake (head first) and the food
    fn draw_frame(&mut self, snake: &[Position], food: Position);

    /// Draw the game-over overlay with the final score on top of the last frame
    fn draw_game_over(&mut self, score: u32);
}
