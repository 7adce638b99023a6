use serde::{Deserialize, Serialize};

use super::speed::{
    clamp_speed_percent, Difficulty, DEFAULT_SPEED_PERCENT, MAX_SPEED_PERCENT, MIN_SPEED_PERCENT,
};

/// Side length of one grid cell on the canvas, in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded for each food eaten
    pub food_award: u32,
    /// Difficulty tier selecting the base tick interval
    pub difficulty: Difficulty,
    /// Speed percentage scaling the base interval (100 = unscaled)
    pub speed_percent: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            food_award: 10,
            difficulty: Difficulty::default(),
            speed_percent: DEFAULT_SPEED_PERCENT,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Derive the grid from a canvas size in pixels and a cell size
    pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self::new(
            (canvas_width / cell_size) as usize,
            (canvas_height / cell_size) as usize,
        )
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the speed percentage, clamped into the accepted range
    pub fn with_speed_percent(mut self, percent: u16) -> Self {
        self.speed_percent = clamp_speed_percent(percent);
        self
    }

    /// Validate configuration parameters
    ///
    /// Food is only ever placed away from row 0 and column 0, and the initial
    /// snake lies along row 0, so the grid needs at least two cells on each
    /// axis and room for the whole snake on its first row.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(format!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        if self.initial_snake_length > self.grid_width {
            return Err(format!(
                "initial_snake_length ({}) cannot exceed grid_width ({})",
                self.initial_snake_length, self.grid_width
            ));
        }

        if !(MIN_SPEED_PERCENT..=MAX_SPEED_PERCENT).contains(&self.speed_percent) {
            return Err(format!(
                "speed_percent must be in [{}, {}], got {}",
                MIN_SPEED_PERCENT, MAX_SPEED_PERCENT, self.speed_percent
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_award, 10);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.speed_percent, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
    }

    #[test]
    fn test_grid_from_canvas() {
        let config = GameConfig::from_canvas(400, 300, DEFAULT_CELL_SIZE);
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 15);

        // Partial cells at the edge are not part of the grid
        let config = GameConfig::from_canvas(410, 399, DEFAULT_CELL_SIZE);
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 19);
    }

    #[test]
    fn test_builder_clamps_speed() {
        let config = GameConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_speed_percent(999);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.speed_percent, MAX_SPEED_PERCENT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::new(1, 10).validate().is_err());
        assert!(GameConfig::new(10, 1).validate().is_err());
        assert!(GameConfig::new(2, 10).validate().is_err()); // snake of 3 won't fit

        let mut config = GameConfig::small();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.speed_percent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::small().with_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"difficulty\":\"easy\""));

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
