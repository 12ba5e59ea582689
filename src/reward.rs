//! Picking a free cell for the reward.
//!
//! Column and row indices are shuffled independently and the board is scanned
//! column major in that order, taking the first empty cell. This is not a uniform
//! sample over the free cells: a cell is favoured when its column comes early in
//! the shuffled order and its row comes before the other free rows of that column.
use itertools::Itertools;
use tracing::trace;

use crate::board::{Board, Cell};
use crate::rng::{shuffle, RandomSource};
use crate::types::Position;

/// Finds an empty cell, or None if the snake and reward cover the whole board.
///
/// Draws `W - 1` values from `rng` for the columns and then `H - 1` for the rows.
pub fn find_free_cell<R: RandomSource + ?Sized, const W: usize, const H: usize>(
    board: &Board<W, H>,
    rng: &mut R,
) -> Option<Position> {
    let mut columns = [0u8; W];
    for (i, column) in columns.iter_mut().enumerate() {
        *column = i as u8;
    }
    let mut rows = [0u8; H];
    for (i, row) in rows.iter_mut().enumerate() {
        *row = i as u8;
    }
    shuffle(&mut columns, rng);
    shuffle(&mut rows, rng);

    columns
        .iter()
        .cartesian_product(rows.iter())
        .map(|(x, y)| Position::new(*x, *y))
        .find(|position| board.get(*position).is_empty())
}

/// Puts the reward on a free cell and reports where it went
pub fn place_reward<R: RandomSource + ?Sized, const W: usize, const H: usize>(
    board: &mut Board<W, H>,
    rng: &mut R,
) -> Option<Position> {
    let position = find_free_cell(board, rng)?;
    trace!(?position, "placing reward");
    board.set(position, Cell::Reward);
    Some(position)
}
