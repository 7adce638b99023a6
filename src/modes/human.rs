use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameEngine, TokioTicker};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::HighScoreStore;
use crate::render::{Hud, Scene, View};

/// Render at 30 FPS (33ms per frame), independent of the game tick rate
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive play in the terminal
pub struct HumanMode<S: HighScoreStore> {
    engine: GameEngine<Scene, S, TokioTicker>,
    view: View,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<S: HighScoreStore> HumanMode<S> {
    /// Set up a session. With a seed, food placement is reproducible.
    pub fn new(config: GameConfig, store: S, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let engine = GameEngine::with_rng(config, Scene::new(), store, TokioTicker::new(), rng)
            .context("Failed to create game engine")?;

        Ok(Self {
            engine,
            view: View::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(high_score = self.engine.high_score(), "session ended");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; pending forever while no game is running
                _ = self.engine.ticker_mut().tick() => {
                    self.engine.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    let hud = self.hud();
                    let scene = self.engine.renderer();
                    let view = &self.view;
                    terminal.draw(|frame| {
                        view.render(frame, scene, &hud);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.steer(direction);
                }
                KeyAction::Start => self.engine.start(),
                KeyAction::TogglePause => {
                    self.engine.toggle_pause();
                }
                KeyAction::SetDifficulty(difficulty) => self.engine.set_difficulty(difficulty),
                KeyAction::AdjustSpeed(delta) => self.engine.adjust_speed(delta),
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn hud(&self) -> Hud {
        let config = self.engine.config();
        Hud {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            score: self.engine.score(),
            high_score: self.engine.high_score(),
            difficulty: config.difficulty,
            speed_percent: config.speed_percent,
            run_state: self.engine.run_state(),
            controls: self.engine.controls(),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
