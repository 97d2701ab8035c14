use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::Clock;
use crate::collision::{is_out_of_bounds, is_self_collision};
use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::food::{self, RandomSource};
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Init,
    Playing,
    Suspended,
    Gameover,
}

/// Why a game reached [`GameStatus::Gameover`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    OutOfBounds,
    SelfCollision,
    BoardFull,
}

/// What one tick did to the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not playing, or no tick was due.
    Ignored,
    Moved,
    Ate,
    GameOver(EndReason),
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub body_length: usize,
    pub status: GameStatus,
    pub difficulty: Difficulty,
}

/// The whole simulation: board, snake, status, difficulty and tick clock.
///
/// Grid and snake are only ever mutated together, so the `Snake` cells of
/// the grid always mirror the body.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    status: GameStatus,
    difficulty: Difficulty,
    clock: Clock,
    tick_count: u64,
    end_reason: Option<EndReason>,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a game in [`GameStatus::Init`] using `rng` for food placement.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let difficulty = config.difficulty();
        let mut game = Self {
            config,
            grid: Grid::new(config.grid_size),
            snake: Snake::new(config.start, Direction::Up),
            food: None,
            status: GameStatus::Init,
            difficulty,
            clock: Clock::running(difficulty.interval()),
            tick_count: 0,
            end_reason: None,
            rng,
        };
        game.seed_board()?;
        Ok(game)
    }

    /// Init -> Playing, or resumes Suspended -> Playing.
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Init | GameStatus::Suspended => {
                info!("game started from {:?}", self.status);
                self.status = GameStatus::Playing;
            }
            other => debug!("start ignored while {other:?}"),
        }
    }

    /// Playing -> Suspended.
    pub fn stop(&mut self) {
        if self.status == GameStatus::Playing {
            info!("game suspended after {} ticks", self.tick_count);
            self.status = GameStatus::Suspended;
        } else {
            debug!("stop ignored while {:?}", self.status);
        }
    }

    /// Returns to Init with a fresh board.
    ///
    /// Difficulty goes back to the configured default level
    /// (`GameConfig::default_difficulty`, level 3 unless overridden), and the
    /// clock restarts at that level's interval. The previous clock schedule
    /// is cancelled before the new one starts.
    pub fn reset(&mut self) {
        self.clock.cancel();

        self.grid = Grid::new(self.config.grid_size);
        self.snake = Snake::new(self.config.start, Direction::Up);
        self.food = None;
        self.status = GameStatus::Init;
        self.difficulty = self.config.difficulty();
        self.tick_count = 0;
        self.end_reason = None;

        if let Err(error) = self.seed_board() {
            warn!("reset could not place food: {error}");
        }
        self.clock.restart(self.difficulty.interval());
        info!("game reset at difficulty {}", self.difficulty.level());
    }

    /// Turns the snake. Ignored unless playing or when reversing.
    pub fn update_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Playing {
            debug!("direction {direction:?} ignored while {:?}", self.status);
            return;
        }

        if !self.snake.set_direction(direction) {
            debug!(
                "direction {direction:?} rejected, reverses {:?}",
                self.snake.direction()
            );
        }
    }

    /// Changes difficulty and restarts the clock. Only accepted in Init and
    /// for levels inside the table.
    pub fn update_difficulty(&mut self, level: u8) {
        if self.status != GameStatus::Init {
            debug!("difficulty {level} ignored while {:?}", self.status);
            return;
        }

        let Some(difficulty) = Difficulty::from_level(level) else {
            debug!("difficulty {level} out of range");
            return;
        };

        self.difficulty = difficulty;
        self.clock.restart(difficulty.interval());
        info!(
            "difficulty set to {level} ({} ms per tick)",
            difficulty.interval().as_millis()
        );
    }

    /// Feeds elapsed wall time to the clock and runs a tick when one is due.
    pub fn advance_clock(&mut self, elapsed: Duration) -> TickOutcome {
        if self.clock.advance(elapsed) {
            self.tick()
        } else {
            TickOutcome::Ignored
        }
    }

    /// Advances the simulation by one step. Does nothing unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Ignored;
        }

        let next_head = self.snake.next_head(self.snake.direction());
        if is_out_of_bounds(self.grid.size(), next_head) {
            return self.finish(EndReason::OutOfBounds);
        }
        if is_self_collision(&self.grid, next_head) {
            return self.finish(EndReason::SelfCollision);
        }

        self.tick_count += 1;
        let ate_food = self.grid.get(next_head) == Cell::Food;

        if let Some(vacated) = self.snake.advance(next_head, ate_food) {
            self.grid.set(vacated, Cell::Empty);
        }
        self.grid.set(next_head, Cell::Snake);

        if !ate_food {
            return TickOutcome::Moved;
        }

        self.food = None;
        match self.place_food() {
            Ok(()) => TickOutcome::Ate,
            Err(error) => {
                warn!("{error}");
                self.finish(EndReason::BoardFull)
            }
        }
    }

    /// Read-only projection of the state for consumers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            body_length: self.snake.len(),
            status: self.status,
            difficulty: self.difficulty,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces snake and food wholesale and rebuilds the grid to match.
    ///
    /// Used to stage positions in tests and demos. Rejects segments off the
    /// board, repeated segments, and food that is off the board or under the
    /// body; the game is left untouched in that case.
    pub fn set_layout(&mut self, snake: Snake, food: Option<Position>) -> Result<()> {
        let size = self.config.grid_size;
        let mut body = HashSet::with_capacity(snake.len());

        for segment in snake.segments() {
            if is_out_of_bounds(size, *segment) {
                return Err(GameError::InvalidConfig(format!(
                    "segment ({}, {}) is outside the {size}x{size} board",
                    segment.x, segment.y
                )));
            }
            if !body.insert(*segment) {
                return Err(GameError::InvalidConfig(format!(
                    "segment ({}, {}) appears twice in the body",
                    segment.x, segment.y
                )));
            }
        }

        if let Some(food) = food {
            if is_out_of_bounds(size, food) {
                return Err(GameError::InvalidConfig(format!(
                    "food ({}, {}) is outside the {size}x{size} board",
                    food.x, food.y
                )));
            }
            if body.contains(&food) {
                return Err(GameError::InvalidConfig(format!(
                    "food ({}, {}) overlaps the snake",
                    food.x, food.y
                )));
            }
        }

        self.grid = Grid::from_body(size, snake.segments(), food);
        self.snake = snake;
        self.food = food;
        Ok(())
    }

    fn seed_board(&mut self) -> Result<()> {
        self.grid.set(self.snake.head(), Cell::Snake);
        self.place_food()
    }

    fn place_food(&mut self) -> Result<()> {
        let occupied: HashSet<Position> = self.snake.segments().copied().collect();
        let position = food::place(&mut self.rng, self.grid.size(), &occupied)?;
        self.grid.set(position, Cell::Food);
        self.food = Some(position);
        Ok(())
    }

    fn finish(&mut self, reason: EndReason) -> TickOutcome {
        self.clock.cancel();
        self.status = GameStatus::Gameover;
        self.end_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, length {}",
            self.tick_count,
            self.snake.len()
        );
        TickOutcome::GameOver(reason)
    }
}
