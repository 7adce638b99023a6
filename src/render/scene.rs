use super::Renderer;
use crate::game::Position;

/// What is currently on the canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Grid lines have been drawn
    pub grid: bool,
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    /// Final score shown by the game-over overlay, if it is up
    pub game_over: Option<u32>,
    /// Number of `draw_frame` calls so far
    pub frames_drawn: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_head(&self, pos: Position) -> bool {
        self.snake.first() == Some(&pos)
    }

    pub fn is_snake(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn is_food(&self, pos: Position) -> bool {
        self.food == Some(pos)
    }
}

impl Renderer for Scene {
    fn draw_grid(&mut self) {
        self.grid = true;
    }

    fn draw_frame(&mut self, snake: &[Position], food: Position) {
        self.snake.clear();
        self.snake.extend_from_slice(snake);
        self.food = Some(food);
        self.game_over = None;
        self.grid = true;
        self.frames_drawn += 1;
    }

    fn draw_game_over(&mut self, score: u32) {
        self.game_over = Some(score);
    }
}
