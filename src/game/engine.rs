use super::{
    action::Action,
    config::{FoodSpawn, GameConfig},
    state::{Board, EndReason, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake moved this tick
    pub moved: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Why the game ended, if it did
    pub end_reason: Option<EndReason>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(state: &GameState) -> Self {
        Self {
            terminated: state.terminated,
            info: StepInfo {
                moved: false,
                ate_food: false,
                end_reason: state.end_reason,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Start a new run: a one-segment snake in the middle of the board,
    /// waiting for its first heading
    pub fn reset(&mut self) -> GameState {
        let board = Board::new(
            self.config.board_width as i32,
            self.config.board_height as i32,
        );
        let snake = Snake::new(board.center());

        let food = match self.spawn_food(&board, &snake) {
            Some(food) => food,
            None => self.spawn_anywhere(&board),
        };

        info!(
            width = board.width,
            height = board.height,
            tick_delay_ms = self.config.tick_delay_ms,
            accelerate = self.config.accelerate,
            "new game"
        );

        GameState::new(snake, food, board, self.config.tick_delay_ms)
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.terminated {
            return StepResult::idle(state);
        }

        let was_waiting = state.snake.heading.is_none();

        if let Some(direction) = action.direction() {
            if state.snake.turn(direction) {
                debug!(?direction, "heading changed");
            }
        }

        // The tick that accepts the first heading does not move yet
        let heading = match state.snake.heading {
            Some(heading) if !was_waiting => heading,
            _ => return StepResult::idle(state),
        };

        let new_head = state.snake.head().moved_in_direction(heading);

        if let Some(reason) = self.check_collision(state, new_head) {
            state.terminate(reason);
            info!(?reason, length = state.length(), "game over");
            return StepResult::idle(state);
        }

        let ate_food = new_head == state.food;
        state.snake.advance_to(new_head, ate_food);

        if ate_food {
            debug!(length = state.length(), x = new_head.x, y = new_head.y, "food eaten");
            match self.spawn_food(&state.board, &state.snake) {
                Some(food) => state.food = food,
                None => {
                    state.terminate(EndReason::BoardFull);
                    info!(length = state.length(), "board full");
                }
            }
        }

        state.tick_delay_ms = self.config.delay_for_length(state.length());

        StepResult {
            terminated: state.terminated,
            info: StepInfo {
                moved: true,
                ate_food,
                end_reason: state.end_reason,
            },
        }
    }

    /// Check if the new head position causes a collision.
    /// The tail counts as occupied even though it would move away this tick.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<EndReason> {
        if !state.board.is_interior(pos) {
            return Some(EndReason::Wall);
        }

        if state.snake.occupies(pos) {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    /// Pick a food position according to the configured policy.
    /// Returns `None` when the snake leaves no room.
    fn spawn_food(&mut self, board: &Board, snake: &Snake) -> Option<Position> {
        match self.config.food_spawn {
            FoodSpawn::Anywhere => Some(self.spawn_anywhere(board)),
            FoodSpawn::AvoidSnake => {
                let free: Vec<Position> = board
                    .interior()
                    .filter(|pos| !snake.occupies(*pos))
                    .collect();
                free.choose(&mut self.rng).copied()
            }
        }
    }

    fn spawn_anywhere(&mut self, board: &Board) -> Position {
        let x = self.rng.gen_range(1..board.width);
        let y = self.rng.gen_range(1..board.height);
        Position::new(x, y)
    }
}
