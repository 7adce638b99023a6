use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

use super::{
    config::GameConfig,
    direction::Direction,
    food::place_food,
    speed::{self, clamp_speed_percent, Difficulty},
    state::{GameOverReason, GameState, Position, RunState, Snake},
    ticker::Ticker,
};
use crate::persistence::HighScoreStore;
use crate::render::Renderer;

/// What a call to [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Ignored,
    /// The snake advanced one cell
    Moved,
    /// The snake advanced onto the food and grew
    AteFood,
    /// The game ended on this tick
    GameOver(GameOverReason),
}

/// Labels and enablement of the start and pause controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start_label: &'static str,
    pub pause_label: &'static str,
    pub pause_enabled: bool,
}

/// The game engine: owns all game state and drives it from ticks, key
/// presses and control changes
pub struct GameEngine<R, S, T, G = StdRng> {
    config: GameConfig,
    state: GameState,
    run_state: RunState,
    high_score: u32,
    tick_interval: Duration,
    game_over_reason: Option<GameOverReason>,
    renderer: R,
    store: S,
    ticker: T,
    rng: G,
}

impl<R, S, T> GameEngine<R, S, T, StdRng>
where
    R: Renderer,
    S: HighScoreStore,
    T: Ticker,
{
    /// Create a new game engine with an entropy-seeded random source
    pub fn new(config: GameConfig, renderer: R, store: S, ticker: T) -> anyhow::Result<Self> {
        Self::with_rng(config, renderer, store, ticker, StdRng::from_entropy())
    }
}

impl<R, S, T, G> GameEngine<R, S, T, G>
where
    R: Renderer,
    S: HighScoreStore,
    T: Ticker,
    G: Rng,
{
    /// Create a new game engine using the given random source for food placement.
    ///
    /// Loads the high score from the store and draws the empty grid. No game
    /// runs until [`GameEngine::start`] is called.
    pub fn with_rng(
        config: GameConfig,
        mut renderer: R,
        store: S,
        ticker: T,
        rng: G,
    ) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let high_score = store.load_high_score();
        info!(high_score, "loaded high score");

        let snake = Snake::initial(config.initial_snake_length);
        // Placeholder until the first start places real food
        let food = Position::new(1, 1);
        let state = GameState::new(snake, food, config.grid_width, config.grid_height);
        let tick_interval = speed::tick_interval(config.difficulty, config.speed_percent);

        renderer.draw_grid();

        Ok(Self {
            config,
            state,
            run_state: RunState::Idle,
            high_score,
            tick_interval,
            game_over_reason: None,
            renderer,
            store,
            ticker,
            rng,
        })
    }

    /// Start a new game, discarding any game in progress
    pub fn start(&mut self) {
        self.ticker.stop();

        let snake = Snake::initial(self.config.initial_snake_length);
        self.state = GameState::new(
            snake,
            Position::new(1, 1),
            self.config.grid_width,
            self.config.grid_height,
        );
        self.game_over_reason = None;
        self.run_state = RunState::Running;
        self.tick_interval = speed::tick_interval(self.config.difficulty, self.config.speed_percent);

        let Some(food) = self.spawn_food() else {
            self.finish(GameOverReason::BoardFilled);
            return;
        };
        self.state.food = food;

        self.ticker.start(self.tick_interval);
        self.draw_frame();

        info!(
            difficulty = %self.config.difficulty,
            speed_percent = self.config.speed_percent,
            interval_ms = self.tick_interval.as_millis() as u64,
            "game started"
        );
    }

    /// Pause a running game or resume a paused one. No effect otherwise.
    pub fn toggle_pause(&mut self) -> RunState {
        match self.run_state {
            RunState::Running => {
                self.ticker.stop();
                self.run_state = RunState::Paused;
                info!(score = self.state.score, "game paused");
            }
            RunState::Paused => {
                self.ticker.stop();
                self.ticker.start(self.tick_interval);
                self.run_state = RunState::Running;
                info!("game resumed");
            }
            RunState::Idle | RunState::GameOver => {}
        }

        self.run_state
    }

    /// Request a direction for the next tick.
    ///
    /// Only accepted while running, and never the reverse of the direction
    /// committed on the last tick. Returns whether the request was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }

        if self.state.snake.direction.is_opposite(direction) {
            debug!(?direction, "reverse turn ignored");
            return false;
        }

        self.state.pending_direction = direction;
        true
    }

    /// Change the difficulty tier
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.reconfigure();
    }

    /// Change the speed percentage (clamped into the accepted range)
    pub fn set_speed_percent(&mut self, percent: u16) {
        self.config.speed_percent = clamp_speed_percent(percent);
        self.reconfigure();
    }

    /// Nudge the speed percentage up or down
    pub fn adjust_speed(&mut self, delta: i32) {
        let percent = (i32::from(self.config.speed_percent) + delta).clamp(0, i32::from(u16::MAX));
        self.set_speed_percent(percent as u16);
    }

    /// Recompute the tick interval; a running game restarts its ticker at
    /// the new interval without any other change
    fn reconfigure(&mut self) {
        self.tick_interval = speed::tick_interval(self.config.difficulty, self.config.speed_percent);

        if self.run_state == RunState::Running {
            self.ticker.stop();
            self.ticker.start(self.tick_interval);
        }

        info!(
            difficulty = %self.config.difficulty,
            speed_percent = self.config.speed_percent,
            interval_ms = self.tick_interval.as_millis() as u64,
            "speed reconfigured"
        );
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state != RunState::Running {
            return TickOutcome::Ignored;
        }

        let direction = self.state.pending_direction;
        let new_head = self.state.snake.push_head(direction);

        // Food counts as eaten only when both coordinates match
        let ate_food = new_head == self.state.food;
        if !ate_food {
            self.state.snake.drop_tail();
        }
        self.state.steps += 1;

        if let Some(collision) = self.state.head_collision() {
            let reason = GameOverReason::Collision(collision);
            self.finish(reason);
            return TickOutcome::GameOver(reason);
        }

        if ate_food {
            self.state.score += self.config.food_award;
            debug!(score = self.state.score, length = self.state.snake.len(), "food eaten");

            if self.state.score > self.high_score {
                self.high_score = self.state.score;
                self.store.save_high_score(self.high_score);
            }

            match self.spawn_food() {
                Some(food) => self.state.food = food,
                None => {
                    self.finish(GameOverReason::BoardFilled);
                    return TickOutcome::GameOver(GameOverReason::BoardFilled);
                }
            }
        }

        self.draw_frame();

        if ate_food {
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    fn spawn_food(&mut self) -> Option<Position> {
        place_food(
            &mut self.rng,
            &self.state.snake,
            self.config.grid_width,
            self.config.grid_height,
        )
    }

    fn draw_frame(&mut self) {
        self.renderer
            .draw_frame(&self.state.snake.body, self.state.food);
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.ticker.stop();
        self.run_state = RunState::GameOver;
        self.game_over_reason = Some(reason);
        self.renderer.draw_game_over(self.state.score);

        info!(
            ?reason,
            score = self.state.score,
            high_score = self.high_score,
            "game over"
        );
    }

    /// Labels and enablement of the start and pause controls
    pub fn controls(&self) -> Controls {
        let start_label = match self.run_state {
            RunState::Idle | RunState::GameOver => "Start",
            RunState::Running | RunState::Paused => "Restart",
        };
        let pause_label = match self.run_state {
            RunState::Paused => "Resume",
            _ => "Pause",
        };

        Controls {
            start_label,
            pause_label,
            pause_enabled: matches!(self.run_state, RunState::Running | RunState::Paused),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Interval the ticker runs (or will run) at
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Tear the engine down, handing back its high score store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Mutable access to the game state, for setting up scenarios
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
