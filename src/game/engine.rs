use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, CollisionKind, Food, GameState, Snake, FOOD_COLORS},
};
use crate::audio::{AudioCue, Cue};

/// Row (in cells) the snake is regenerated on
const START_ROW: i32 = 10;

/// What a single tick's update observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Collision that ended the game this tick, if any
    pub collision: Option<CollisionKind>,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Score of the finished game when a collision occurred
    pub final_score: Option<u32>,
}

/// The game engine.
///
/// Owns the configuration, the random source, the process-lifetime highscore
/// and the injected audio capability. Per-game state lives in [`GameState`]
/// and is handed back fresh from [`GameEngine::reset`].
///
/// A tick is split into two phases: [`GameEngine::update`] evaluates
/// collisions and food against the head placed by the previous tick's
/// movement, and [`GameEngine::advance`] performs the movement after the
/// frame is drawn. Eating works because the head that triggers the food check
/// was moved onto the food cell by the prior advance; the phases must not be
/// reordered.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    highscore: u32,
    audio: Arc<dyn AudioCue>,
}

impl GameEngine {
    /// Create a new game engine with the given configuration and audio sink
    pub fn new(config: GameConfig, audio: Arc<dyn AudioCue>) -> Self {
        Self::with_rng(config, audio, StdRng::from_entropy())
    }

    /// Create an engine with an explicit random source (deterministic runs)
    pub fn with_rng(config: GameConfig, audio: Arc<dyn AudioCue>, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            highscore: 0,
            audio,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Best score seen since the process started
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Build a fresh game: score 0, direction Right, a straight horizontal
    /// snake on the starting row and a newly placed food item.
    ///
    /// Never touches the highscore.
    pub fn reset(&mut self) -> GameState {
        let cell_size = self.config.cell_size;
        let head = Cell::new(
            self.config.initial_snake_length as i32 * cell_size,
            START_ROW * cell_size,
        );
        let snake = Snake::new(
            head,
            Direction::Right,
            self.config.initial_snake_length,
            cell_size,
        );
        let food = self.spawn_food();

        GameState::new(snake, food)
    }

    /// Commit a direction change unless it reverses the current direction.
    ///
    /// Called from the event path; the committed value is read once per tick
    /// by [`GameEngine::advance`].
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        if !state.snake.direction.is_opposite(direction) {
            state.snake.direction = direction;
        }
    }

    /// Evaluate one tick against the pre-move head.
    ///
    /// Checks boundary, then body, then food. On a collision the highscore is
    /// raised if beaten, the game-over cue fires and the state is replaced
    /// with a fresh game; the rest of the tick's update is skipped for the
    /// new state.
    pub fn update(&mut self, state: &mut GameState) -> TickOutcome {
        if let Some(kind) = self.check_collision(state) {
            let final_score = state.score;
            if final_score > self.highscore {
                self.highscore = final_score;
            }
            self.audio.trigger(Cue::GameOver);
            *state = self.reset();

            return TickOutcome {
                collision: Some(kind),
                ate_food: false,
                final_score: Some(final_score),
            };
        }

        let head = state.snake.head();
        if head == state.food.cell {
            self.audio.trigger(Cue::Eat);
            state.snake.grow(state.food.cell);
            state.food = self.spawn_food();
            state.score += 1;

            return TickOutcome {
                ate_food: true,
                ..Default::default()
            };
        }

        TickOutcome::default()
    }

    /// The draw-phase movement step; mutates the snake for the next tick's
    /// [`GameEngine::update`] to evaluate.
    pub fn advance(&self, state: &mut GameState) {
        state.snake.advance(self.config.cell_size);
    }

    /// Check the current head against the board bounds and the body
    fn check_collision(&self, state: &GameState) -> Option<CollisionKind> {
        let head = state.snake.head();

        if head.x < 0
            || head.y < 0
            || head.x > self.config.board_width - self.config.cell_size
            || head.y > self.config.board_height - self.config.cell_size
        {
            return Some(CollisionKind::Boundary);
        }

        if state.snake.hits_body(head) {
            return Some(CollisionKind::Body);
        }

        None
    }

    /// Place food uniformly at random over the grid, with a random palette
    /// color. Cells occupied by the snake body are not excluded.
    fn spawn_food(&mut self) -> Food {
        let cell = Cell::new(
            self.rng.gen_range(0..self.config.columns()) * self.config.cell_size,
            self.rng.gen_range(0..self.config.rows()) * self.config.cell_size,
        );
        let color = FOOD_COLORS[self.rng.gen_range(0..FOOD_COLORS.len())];

        Food { cell, color }
    }
}
