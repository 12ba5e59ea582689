//! The surface the input and display drivers talk to.
//!
//! [`GameController`] is the single owner of a game: the board, the random source
//! and the pending direction. Every mutation goes through `&mut self`, so a single
//! threaded host gets exclusion for free. Hosts where the input, display and tick
//! handlers really run in parallel should wrap the controller in a [`SharedGame`].
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::{OsRng, SmallRng};
use rand::SeedableRng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::engine::{self, StepOutcome};
use crate::error::GameError;
use crate::rng::RandomSource;
use crate::types::{
    ColumnRenderableGame, Direction, HeadGettableGame, LengthGettableGame, Position,
    RewardGettableGame, SizeDeterminableGame,
};

/// Owns one live game and the direction waiting to be applied on the next tick
#[derive(Debug, Clone)]
pub struct GameController<R, const W: usize, const H: usize> {
    board: Board<W, H>,
    pending: Option<Direction>,
    rng: R,
}

/// A controller for the 16x8 display, seeded from a `SmallRng`
pub type StandardGame = GameController<SmallRng, 16, 8>;

impl<R: RandomSource, const W: usize, const H: usize> GameController<R, W, H> {
    /// Create a controller and lay out the first game
    pub fn new(mut rng: R) -> Result<Self, GameError> {
        let board = engine::new_game(&mut rng)?;
        Ok(Self {
            board,
            pending: None,
            rng,
        })
    }

    /// Create a controller that resumes from an existing board
    pub fn with_board(board: Board<W, H>, rng: R) -> Self {
        Self {
            board,
            pending: None,
            rng,
        }
    }

    /// Throws the current game away and starts again
    pub fn init(&mut self) {
        engine::reset(&mut self.board, &mut self.rng);
        self.pending = None;
    }

    /// Advances one tick in `requested`, or straight on when None
    pub fn step(&mut self, requested: Option<Direction>) -> StepOutcome {
        engine::step(&mut self.board, requested, &mut self.rng)
    }

    /// Stores a direction for the next tick, replacing any unconsumed request
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// the direction the next tick will consume, if any
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Consumes the pending direction and advances one tick with it
    pub fn tick(&mut self) -> StepOutcome {
        let requested = self.pending.take();
        self.step(requested)
    }

    /// read-only view of the board
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }
}

impl<const W: usize, const H: usize> GameController<SmallRng, W, H> {
    /// Create a controller that always plays out the same way for `seed`
    pub fn seeded(seed: u64) -> Result<Self, GameError> {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Create a controller seeded by the operating system. Fails if no
    /// entropy is available rather than falling back to a fixed seed.
    pub fn from_entropy() -> Result<Self, GameError> {
        let rng = SmallRng::from_rng(OsRng)?;
        Self::new(rng)
    }

    /// Create a controller as described by `config`
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R, const W: usize, const H: usize> ColumnRenderableGame<H> for GameController<R, W, H> {
    fn render_column(&self, index: usize) -> [bool; H] {
        self.board.render_column(index)
    }
}

impl<R, const W: usize, const H: usize> SizeDeterminableGame for GameController<R, W, H> {
    fn get_width(&self) -> u32 {
        self.board.get_width()
    }

    fn get_height(&self) -> u32 {
        self.board.get_height()
    }
}

impl<R, const W: usize, const H: usize> HeadGettableGame for GameController<R, W, H> {
    fn get_head_as_position(&self) -> Position {
        self.board.get_head_as_position()
    }

    fn get_tail_as_position(&self) -> Position {
        self.board.get_tail_as_position()
    }
}

impl<R, const W: usize, const H: usize> LengthGettableGame for GameController<R, W, H> {
    fn get_length(&self) -> usize {
        self.board.get_length()
    }
}

impl<R, const W: usize, const H: usize> RewardGettableGame for GameController<R, W, H> {
    fn get_reward_as_position(&self) -> Option<Position> {
        self.board.get_reward_as_position()
    }
}

const NO_DIRECTION: u8 = u8::MAX;

/// A single slot holding the most recent direction request.
///
/// Writers overwrite whatever is there; the tick takes the value and empties the
/// slot in one atomic swap, so a request arriving mid-tick is kept for the next one.
#[derive(Debug)]
pub struct DirectionMailbox {
    slot: AtomicU8,
}

impl Default for DirectionMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionMailbox {
    #[allow(missing_docs)]
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(NO_DIRECTION),
        }
    }

    /// replace the pending request
    pub fn request(&self, direction: Direction) {
        self.slot.store(direction as u8, Ordering::Release);
    }

    /// take the pending request, leaving the slot empty
    pub fn take(&self) -> Option<Direction> {
        Direction::from_u8(self.slot.swap(NO_DIRECTION, Ordering::AcqRel))
    }

    #[cfg(test)]
    fn peek(&self) -> Option<Direction> {
        Direction::from_u8(self.slot.load(Ordering::Acquire))
    }
}

/// A controller that can be driven from several threads or interrupt contexts.
///
/// Direction requests go into a lock free [`DirectionMailbox`]. Ticks and column
/// reads take a mutex, so a display refresh never observes a half applied step.
#[derive(Debug)]
pub struct SharedGame<R, const W: usize, const H: usize> {
    game: Mutex<GameController<R, W, H>>,
    mailbox: DirectionMailbox,
}

impl<R: RandomSource, const W: usize, const H: usize> SharedGame<R, W, H> {
    #[allow(missing_docs)]
    pub fn new(game: GameController<R, W, H>) -> Self {
        Self {
            game: Mutex::new(game),
            mailbox: DirectionMailbox::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameController<R, W, H>> {
        // a poisoned lock still holds a readable board
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// called by the input driver, never blocks
    pub fn request_direction(&self, direction: Direction) {
        self.mailbox.request(direction);
    }

    /// called by the periodic tick, consumes the pending request
    pub fn tick(&self) -> StepOutcome {
        let mut game = self.lock();
        let requested = self.mailbox.take();
        game.step(requested)
    }

    /// called by the display driver
    pub fn render_column(&self, index: usize) -> [bool; H] {
        self.lock().render_column(index)
    }

    /// restart the game
    pub fn init(&self) {
        let mut game = self.lock();
        let _ = self.mailbox.take();
        game.init();
    }

    /// a copy of the board as of the last completed tick
    pub fn board(&self) -> Board<W, H> {
        *self.lock().board()
    }

    /// unwrap the controller again
    pub fn into_inner(self) -> GameController<R, W, H> {
        self.game
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
