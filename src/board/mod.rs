//! A compact board representation that needs no allocation to simulate.
//!
//! The snake isn't stored as a list of segments. Each body cell holds a marker
//! pointing at the next segment toward the head, and the board remembers where
//! the head and tail are. Moving is then a matter of rewriting two or three
//! cells, and growing is simply not moving the tail.
use std::fmt::{self, Display};

use crate::error::GameError;
use crate::types::{Direction, Position};

mod cell;
mod queries;
mod snapshot;

pub use cell::Cell;
pub use snapshot::BoardSnapshot;

/// number of segments the snake starts a game with
pub const STARTING_LENGTH: usize = 3;

// per axis limits come first so the area can't overflow
fn supported_dimensions(width: usize, height: usize) -> bool {
    width <= 256
        && height <= 256
        && width >= STARTING_LENGTH
        && height > 0
        && width * height > STARTING_LENGTH
}

/// A `W` by `H` toroidal board, stored column major.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board<const W: usize, const H: usize> {
    cells: [[Cell; H]; W],
    head: Position,
    tail: Position,
}

/// Used to represent the 16x8 matrix display the engine was sized for.
pub type StandardBoard = Board<16, 8>;

impl<const W: usize, const H: usize> Board<W, H> {
    /// Checks that a `W` by `H` board can hold the starting snake plus a reward, and
    /// that every coordinate fits in a `u8`
    pub fn check_dimensions() -> Result<(), GameError> {
        if !supported_dimensions(W, H) {
            return Err(GameError::UnsupportedDimensions {
                width: W,
                height: H,
            });
        }
        Ok(())
    }

    /// Builds a board holding only the starting snake, no reward is placed
    pub fn with_starting_snake() -> Result<Self, GameError> {
        Self::check_dimensions()?;
        let (head, tail) = Self::starting_ends();
        let mut board = Board {
            cells: [[Cell::Empty; H]; W],
            head,
            tail,
        };
        board.lay_starting_snake();
        Ok(board)
    }

    /// Where the head and tail sit at the start of every game. The snake lies
    /// horizontally near the middle of the board, head leftmost, travelling left.
    pub fn starting_ends() -> (Position, Position) {
        let head = Position::new((W / 2) as u8, ((H - 1) / 2) as u8);
        let tail = head
            .step_wrapping(Direction::Right, W, H)
            .step_wrapping(Direction::Right, W, H);
        (head, tail)
    }

    /// wipes every cell and lays the starting snake, the reward is left to the caller
    pub(crate) fn lay_starting_snake(&mut self) {
        self.cells = [[Cell::Empty; H]; W];
        let (head, tail) = Self::starting_ends();
        let mut position = head;
        for _ in 0..STARTING_LENGTH {
            self.set(position, Cell::BodyLeft);
            position = position.step_wrapping(Direction::Right, W, H);
        }
        self.head = head;
        self.tail = tail;
    }

    /// read the cell at a position
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.x as usize][position.y as usize]
    }

    /// overwrite the cell at a position
    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.x as usize][position.y as usize] = cell;
    }

    #[allow(missing_docs)]
    pub fn head(&self) -> Position {
        self.head
    }

    #[allow(missing_docs)]
    pub fn tail(&self) -> Position {
        self.tail
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        W
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        H
    }

    /// all the cells of one column, top row first
    pub fn column(&self, x: usize) -> Option<&[Cell; H]> {
        self.cells.get(x)
    }

    /// Every cell packed into a byte, column major like the board itself. Unpack
    /// with [`Cell::from_u8`].
    pub fn packed_cells(&self) -> [[u8; H]; W] {
        let mut packed = [[0u8; H]; W];
        for (out, column) in packed.iter_mut().zip(self.cells.iter()) {
            for (byte, cell) in out.iter_mut().zip(column.iter()) {
                *byte = cell.pack_as_u8();
            }
        }
        packed
    }

    /// the direction the snake last travelled in, read off the head marker
    pub fn head_direction(&self) -> Direction {
        let cell = self.get(self.head);
        debug_assert!(cell.is_body(), "head sits on {:?}", cell);
        cell.direction().unwrap_or(Direction::Up)
    }

    fn tail_direction(&self) -> Direction {
        let cell = self.get(self.tail);
        debug_assert!(cell.is_body(), "tail sits on {:?}", cell);
        cell.direction().unwrap_or(Direction::Up)
    }

    /// pulls the tail one segment toward the head, clearing the cell it leaves
    pub(crate) fn advance_tail(&mut self) {
        let old_tail = self.tail;
        let new_tail = old_tail.step_wrapping(self.tail_direction(), W, H);
        self.set(old_tail, Cell::Empty);
        self.tail = new_tail;
    }

    /// marks the old head as pointing toward `new_head` and moves the head there
    pub(crate) fn push_head(&mut self, new_head: Position, direction: Direction) {
        let marker = Cell::marker_for(direction);
        self.set(self.head, marker);
        self.head = new_head;
        self.set(new_head, marker);
    }

    fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, cell)| (Position::new(x as u8, y as u8), *cell))
        })
    }

    /// number of body cells on the board
    pub fn length(&self) -> usize {
        self.cells().filter(|(_, c)| c.is_body()).count()
    }

    #[allow(missing_docs)]
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, c)| c.is_empty()).count()
    }

    /// position of the first reward found, scanning column by column
    pub fn reward(&self) -> Option<Position> {
        self.cells()
            .find(|(_, c)| c.is_reward())
            .map(|(position, _)| position)
    }

    /// Walks the body from tail to head by following markers. The walk stops at the
    /// head, at a cell without a marker, or after visiting `W * H` cells.
    pub fn body_path(&self) -> BodyPath<'_, W, H> {
        BodyPath {
            board: self,
            next: Some(self.tail),
            remaining: W * H,
        }
    }

    /// Checks that the tail's markers lead to the head through every body cell
    /// exactly once, and that there is exactly one reward while any cell is free
    pub fn assert_consistency(&self) -> bool {
        if !self.get(self.head).is_body() || !self.get(self.tail).is_body() {
            return false;
        }

        let mut visited = 0;
        let mut last = None;
        for position in self.body_path() {
            if !self.get(position).is_body() {
                return false;
            }
            visited += 1;
            last = Some(position);
        }
        if last != Some(self.head) || visited != self.length() {
            return false;
        }

        let rewards = self.cells().filter(|(_, c)| c.is_reward()).count();
        if self.empty_count() > 0 {
            rewards == 1
        } else {
            rewards == 0
        }
    }
}

/// Iterator over the body positions from tail to head, see [`Board::body_path`]
#[derive(Debug, Clone)]
pub struct BodyPath<'a, const W: usize, const H: usize> {
    board: &'a Board<W, H>,
    next: Option<Position>,
    remaining: usize,
}

impl<'a, const W: usize, const H: usize> Iterator for BodyPath<'a, W, H> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next.take()?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if current != self.board.head {
            self.next = self
                .board
                .get(current)
                .direction()
                .map(|d| current.step_wrapping(d, W, H));
        }
        Some(current)
    }
}

impl<const W: usize, const H: usize> Display for Board<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for y in 0..H {
            for x in 0..W {
                let position = Position::new(x as u8, y as u8);
                if position == self.head {
                    write!(f, "H")?;
                } else if position == self.tail {
                    write!(f, "t")?;
                } else {
                    write!(f, "{}", self.get(position).as_char())?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        let snapshot = serde_json::to_string(&self.to_snapshot()).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", snapshot)?;
        Ok(())
    }
}
