//! Food placement by rejection sampling.
//!
//! Food is drawn uniformly from the grid interior: row 0 and column 0 are
//! never chosen, so x lies in `1..=width-1` and y in `1..=height-1`.

use rand::Rng;

use super::state::{Position, Snake};

/// Whether any cell food may be placed on is not covered by the snake
pub fn has_free_cell(snake: &Snake, grid_width: usize, grid_height: usize) -> bool {
    let interior = grid_width.saturating_sub(1) * grid_height.saturating_sub(1);
    let covered = snake
        .body
        .iter()
        .filter(|p| {
            p.x >= 1 && p.y >= 1 && (p.x as usize) < grid_width && (p.y as usize) < grid_height
        })
        .count();
    covered < interior
}

/// Pick a random interior cell that the snake does not occupy.
///
/// Returns `None` only when no such cell exists; otherwise sampling repeats
/// until a free cell is drawn.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    grid_width: usize,
    grid_height: usize,
) -> Option<Position> {
    if !has_free_cell(snake, grid_width, grid_height) {
        return None;
    }

    let max_x = grid_width as i32 - 1;
    let max_y = grid_height as i32 - 1;

    loop {
        let pos = Position::new(rng.gen_range(1..=max_x), rng.gen_range(1..=max_y));

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
}
