//! The movement state machine.
//!
//! One call to [`step`] is one tick of the game. It never fails and never blocks;
//! losing and winning both restart the board in place before returning.
use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::GameError;
use crate::reward::place_reward;
use crate::rng::RandomSource;
use crate::types::Direction;

/// What a single tick did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// the snake moved one cell, same length
    Moved,
    /// the snake ate the reward and grew by one
    Grew,
    /// the snake ran into itself and the board was reset
    Collided,
    /// the snake filled the board and the board was reset
    Won,
}

impl StepOutcome {
    /// whether this tick restarted the game
    pub fn is_reset(self) -> bool {
        matches!(self, StepOutcome::Collided | StepOutcome::Won)
    }
}

/// Picks the direction to travel in. No request, or a request to reverse, keeps
/// the snake going the way it already is.
pub fn resolve_direction(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(direction) if !current.is_reverse_of(direction) => direction,
        _ => current,
    }
}

/// Builds a fresh board: starting snake plus one reward
pub fn new_game<R: RandomSource + ?Sized, const W: usize, const H: usize>(
    rng: &mut R,
) -> Result<Board<W, H>, GameError> {
    let mut board = Board::with_starting_snake()?;
    place_reward(&mut board, rng);
    Ok(board)
}

/// Wipes the board back to the starting layout with a newly placed reward
pub fn reset<R: RandomSource + ?Sized, const W: usize, const H: usize>(
    board: &mut Board<W, H>,
    rng: &mut R,
) {
    board.lay_starting_snake();
    place_reward(board, rng);
}

/// Advances the game by one tick.
///
/// The tail moves before the collision check, so the head may follow directly
/// behind it into the cell it just left. Eating the reward leaves the tail in
/// place and relocates the reward; if there is nowhere left to put it the board
/// is full and the game restarts.
#[instrument(level = "trace", skip_all)]
pub fn step<R: RandomSource + ?Sized, const W: usize, const H: usize>(
    board: &mut Board<W, H>,
    requested: Option<Direction>,
    rng: &mut R,
) -> StepOutcome {
    let direction = resolve_direction(board.head_direction(), requested);
    let new_head = board.head().step_wrapping(direction, W, H);
    let ate_reward = board.get(new_head).is_reward();

    if ate_reward {
        if place_reward(board, rng).is_none() {
            debug!(length = W * H, "board filled, restarting");
            reset(board, rng);
            return StepOutcome::Won;
        }
    } else {
        board.advance_tail();
    }

    if board.get(new_head).is_body() {
        debug!(length = board.length(), ?new_head, %direction, "snake hit itself, restarting");
        reset(board, rng);
        return StepOutcome::Collided;
    }

    board.push_head(new_head, direction);
    if ate_reward {
        StepOutcome::Grew
    } else {
        StepOutcome::Moved
    }
}
