// Headless gameplay tests: the engine driven by hand with a recording scene,
// a manual ticker and seeded food placement.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tui_snake::game::speed::{effective_interval, tick_interval};
use tui_snake::game::{
    CollisionType, Difficulty, Direction, GameConfig, GameEngine, GameOverReason, ManualTicker,
    Position, RunState, TickOutcome, Ticker,
};
use tui_snake::persistence::{HighScoreStore, JsonFileStore, MemoryStore};
use tui_snake::render::Scene;

type Engine<S> = GameEngine<Scene, S, ManualTicker>;

fn engine_with<S: HighScoreStore>(config: GameConfig, store: S, seed: u64) -> Engine<S> {
    GameEngine::with_rng(
        config,
        Scene::new(),
        store,
        ManualTicker::new(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

/// Steer toward the food, never onto a wall or the body if avoidable
fn chase_food<S: HighScoreStore>(engine: &mut Engine<S>) {
    let state = engine.state();
    let head = state.snake.head();
    let food = state.food;
    let current = state.snake.direction;

    let mut preferred = Vec::new();
    if food.x > head.x {
        preferred.push(Direction::Right);
    }
    if food.x < head.x {
        preferred.push(Direction::Left);
    }
    if food.y > head.y {
        preferred.push(Direction::Down);
    }
    if food.y < head.y {
        preferred.push(Direction::Up);
    }
    preferred.extend([
        current,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);

    let is_safe = |direction: Direction| {
        let next = head.moved_in_direction(direction);
        let tail = *state.snake.body.last().unwrap();
        state.is_in_bounds(next) && (!state.snake.occupies(next) || next == tail)
    };

    if let Some(direction) = preferred
        .into_iter()
        .find(|d| !current.is_opposite(*d) && is_safe(*d))
    {
        engine.steer(direction);
    }
}

#[test]
fn length_grows_by_one_per_food_and_score_by_ten() {
    let mut engine = engine_with(GameConfig::default(), MemoryStore::new(), 11);
    engine.start();

    let mut eaten = 0usize;
    for _ in 0..2000 {
        chase_food(&mut engine);
        let score_before = engine.score();

        match engine.tick() {
            TickOutcome::AteFood => {
                eaten += 1;
                assert_eq!(engine.score(), score_before + 10);
            }
            TickOutcome::Moved => assert_eq!(engine.score(), score_before),
            TickOutcome::GameOver(_) | TickOutcome::Ignored => break,
        }

        assert_eq!(engine.state().snake.len(), 3 + eaten);
        assert_eq!(engine.score() as usize, 10 * eaten);
    }

    assert!(eaten > 0, "chaser never reached the food");
    assert_eq!(engine.high_score(), engine.score());
}

#[test]
fn invariants_hold_over_many_games() {
    for seed in 0..20 {
        let mut engine = engine_with(GameConfig::new(12, 9), MemoryStore::new(), seed);
        engine.start();

        let mut previous_direction = engine.state().snake.direction;
        let mut best = 0;

        for step in 0..400 {
            // Mix chasing with arbitrary (possibly reverse) key presses
            if step % 7 == 3 {
                engine.steer(previous_direction.opposite());
            } else {
                chase_food(&mut engine);
            }

            let outcome = engine.tick();
            let state = engine.state();

            if let TickOutcome::GameOver(_) = outcome {
                assert_eq!(engine.run_state(), RunState::GameOver);
                assert!(!engine.ticker().is_active());
                engine.start();
                previous_direction = engine.state().snake.direction;
                continue;
            }

            // Committed direction never reverses
            assert!(!previous_direction.is_opposite(state.snake.direction));
            previous_direction = state.snake.direction;

            // Head is not on its own body while alive
            assert!(!state.snake.collides_with_body(state.snake.head()));

            // Food is never under the snake and never on row/column 0
            assert!(!state.snake.occupies(state.food));
            assert!(state.food.x >= 1 && state.food.y >= 1);

            best = best.max(engine.score());
            assert_eq!(engine.high_score(), best);
        }
    }
}

#[test]
fn first_tick_moves_right_and_drops_tail() {
    let config = GameConfig::default().with_difficulty(Difficulty::Easy);
    let mut engine = engine_with(config, MemoryStore::new(), 5);
    engine.start();

    assert_eq!(engine.ticker().period(), Some(Duration::from_millis(150)));
    assert_eq!(
        engine.state().snake.body,
        vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
    );

    let outcome = engine.tick();

    // Food is never placed on row 0, so (3,0) cannot be food here
    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(
        engine.state().snake.body,
        vec![Position::new(3, 0), Position::new(2, 0), Position::new(1, 0)]
    );
    assert_eq!(engine.renderer().snake, engine.state().snake.body);
}

#[test]
fn five_long_snake_hits_right_wall() {
    let mut config = GameConfig::new(10, 10);
    config.initial_snake_length = 5;
    let mut engine = engine_with(config, MemoryStore::new(), 3);
    engine.start();
    assert_eq!(engine.state().snake.head(), Position::new(4, 0));

    let mut outcomes = Vec::new();
    loop {
        let outcome = engine.tick();
        outcomes.push(outcome);
        if outcome != TickOutcome::Moved {
            break;
        }
    }

    // x = 5..=9 are fine, x = 10 is outside the grid
    assert_eq!(outcomes.len(), 6);
    assert_eq!(
        outcomes.last(),
        Some(&TickOutcome::GameOver(GameOverReason::Collision(
            CollisionType::Wall
        )))
    );
    assert_eq!(engine.run_state(), RunState::GameOver);
    assert!(!engine.ticker().is_active());
    assert_eq!(engine.renderer().game_over, Some(0));
    assert_eq!(engine.state().snake.len(), 5);
}

#[test]
fn reverse_key_does_not_change_direction() {
    let mut engine = engine_with(GameConfig::default(), MemoryStore::new(), 8);
    engine.start();

    assert!(!engine.steer(Direction::Left));
    engine.tick();
    assert_eq!(engine.state().snake.direction, Direction::Right);

    assert!(engine.steer(Direction::Down));
    engine.tick();
    assert_eq!(engine.state().snake.direction, Direction::Down);

    assert!(!engine.steer(Direction::Up));
    engine.tick();
    assert_eq!(engine.state().snake.direction, Direction::Down);
}

#[test]
fn effective_interval_examples() {
    assert_eq!(effective_interval(100, 2.0), Duration::from_millis(50));
    assert_eq!(effective_interval(100, 0.5), Duration::from_millis(200));
    assert_eq!(tick_interval(Difficulty::Medium, 200), Duration::from_millis(50));
    assert_eq!(tick_interval(Difficulty::Medium, 50), Duration::from_millis(200));
}

#[test]
fn speed_change_restarts_running_ticker_only() {
    let mut engine = engine_with(GameConfig::default(), MemoryStore::new(), 2);

    engine.set_speed_percent(200);
    assert!(!engine.ticker().is_active());

    engine.start();
    assert_eq!(engine.ticker().period(), Some(Duration::from_millis(50)));
    let snake = engine.state().snake.clone();

    engine.set_speed_percent(50);
    assert_eq!(engine.ticker().period(), Some(Duration::from_millis(200)));
    assert_eq!(engine.state().snake, snake);
    assert_eq!(engine.run_state(), RunState::Running);
}

#[test]
fn high_score_survives_engine_restart() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("highscore.json");

    let mut engine = engine_with(GameConfig::default(), JsonFileStore::new(&path), 21);
    assert_eq!(engine.high_score(), 0);

    engine.start();
    for _ in 0..2000 {
        chase_food(&mut engine);
        if let TickOutcome::GameOver(_) = engine.tick() {
            break;
        }
    }
    let best = engine.high_score();
    assert!(best > 0);
    drop(engine);

    // A fresh engine over the same file sees the previous maximum
    let mut engine = engine_with(GameConfig::default(), JsonFileStore::new(&path), 22);
    assert_eq!(engine.high_score(), best);

    // A worse game leaves it alone
    engine.start();
    engine.tick();
    assert_eq!(engine.high_score(), best);
    assert_eq!(JsonFileStore::new(&path).load_high_score(), best);
}

#[test]
fn memory_store_handed_back_keeps_maximum() {
    let mut engine = engine_with(GameConfig::default(), MemoryStore::with_high_score(30), 4);
    assert_eq!(engine.high_score(), 30);

    engine.start();
    for _ in 0..2000 {
        chase_food(&mut engine);
        if let TickOutcome::GameOver(_) = engine.tick() {
            break;
        }
    }
    let best = engine.high_score().max(30);
    let store = engine.into_store();

    let engine = engine_with(GameConfig::default(), store, 5);
    assert_eq!(engine.high_score(), best);
}
