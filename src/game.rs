use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::food::Food;
use crate::geometry::{Direction, Grid};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

/// Player intent, already translated from raw host events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
    /// The window was asked to close.
    Close,
}

/// What a single call to [`Game::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to simulate, the round is over.
    Idle,
    Moved,
    Ate,
    Collided,
}

/// One round of snake plus everything needed to start the next one.
pub struct Game<R = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    running: bool,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let food = Food::spawn(&grid, &mut rng);
        Self {
            grid,
            snake: Snake::new(&grid),
            food,
            score: 0,
            state: GameState::Running,
            running: true,
            rng,
        }
    }

    /// Applies a command if it is legal in the current state; anything else is
    /// dropped.
    pub fn handle(&mut self, command: Command) {
        match (self.state, command) {
            (_, Command::Close) => self.running = false,
            (GameState::Running, Command::Turn(direction)) => {
                self.snake.set_direction(direction);
            }
            (GameState::GameOver, Command::Restart) => self.restart(),
            (GameState::GameOver, Command::Quit) => self.running = false,
            _ => {}
        }
    }

    /// Runs one simulation step: move, eat, then check for a crash.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Running || !self.running {
            return TickOutcome::Idle;
        }

        self.snake.advance();

        let mut outcome = TickOutcome::Moved;
        if self.snake.head() == self.food.position() {
            self.food.respawn(&self.grid, &mut self.rng);
            self.snake.grow();
            self.score += 1;
            info!("Score: {}", self.score);
            outcome = TickOutcome::Ate;
        }

        if self.snake.has_collided(&self.grid) {
            warn!("Snake collided");
            self.state = GameState::GameOver;
            outcome = TickOutcome::Collided;
        }
        outcome
    }

    /// Starts a fresh round: centered one-segment snake, new food, zero score.
    pub fn restart(&mut self) {
        self.snake = Snake::new(&self.grid);
        self.food = Food::spawn(&self.grid, &mut self.rng);
        self.score = 0;
        self.state = GameState::Running;
        info!("Game restarted");
    }
}

impl<R> Game<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// False once the player quit or closed the window.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replaces the snake, e.g. to set up a specific board.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }
}
