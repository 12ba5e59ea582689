//! various types that are useful for working with the snake board
use serde::{Deserialize, Serialize};
use std::fmt;

/// number of directions a snake can travel in
pub const N_DIRECTIONS: usize = 4;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset, positive is right
    pub x: i8,
    /// y offset, positive is down
    pub y: i8,
}

/// Represents a direction of travel.
///
/// The discriminants form the cycle `Up -> Left -> Down -> Right -> Up`. Reversal
/// is computed by rotating two places through this cycle, so the order of the
/// variants must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    #[allow(missing_docs)]
    Up = 0,
    #[allow(missing_docs)]
    Left = 1,
    #[allow(missing_docs)]
    Down = 2,
    #[allow(missing_docs)]
    Right = 3,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl Direction {
    /// returns all directions in cycle order
    pub fn all() -> [Direction; N_DIRECTIONS] {
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right]
    }

    /// converts this direction to its index in the cycle
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// converts an index to a direction, wrapping around the cycle
    pub fn from_index(index: usize) -> Direction {
        match index % N_DIRECTIONS {
            0 => Direction::Up,
            1 => Direction::Left,
            2 => Direction::Down,
            _ => Direction::Right,
        }
    }

    /// decodes a raw discriminant, returns None for anything outside the cycle
    pub fn from_u8(value: u8) -> Option<Direction> {
        if (value as usize) < N_DIRECTIONS {
            Some(Self::from_index(value as usize))
        } else {
            None
        }
    }

    /// the direction two steps further round the cycle
    pub fn reverse(self) -> Direction {
        Self::from_index(self.as_index() + 2)
    }

    /// checks if a given direction is the reversal of this one
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// convert this direction to a vector, y grows downward
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Up => Vector { x: 0, y: -1 },
            Direction::Down => Vector { x: 0, y: 1 },
            Direction::Left => Vector { x: -1, y: 0 },
            Direction::Right => Vector { x: 1, y: 0 },
        }
    }
}

/// A cell coordinate, column `x` and row `y`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: u8,
    #[allow(missing_docs)]
    pub y: u8,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// moves one cell in `direction`, wrapping round a `width` by `height` torus
    pub fn step_wrapping(self, direction: Direction, width: usize, height: usize) -> Position {
        let v = direction.to_vector();
        Position {
            x: wrap(self.x, v.x, width),
            y: wrap(self.y, v.y, height),
        }
    }

    /// checks that this position lies on a `width` by `height` board
    pub fn is_within(self, width: usize, height: usize) -> bool {
        (self.x as usize) < width && (self.y as usize) < height
    }
}

fn wrap(coordinate: u8, offset: i8, extent: usize) -> u8 {
    (coordinate as i32 + offset as i32).rem_euclid(extent as i32) as u8
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// A game for which the two ends of the snake can be got.
pub trait HeadGettableGame {
    /// the foremost segment
    fn get_head_as_position(&self) -> Position;

    /// the hindmost segment
    fn get_tail_as_position(&self) -> Position;
}

/// A game for which the length of the snake can be got.
pub trait LengthGettableGame {
    /// number of body cells on the board
    fn get_length(&self) -> usize;
}

/// A game for which the reward on the board can be queried
pub trait RewardGettableGame {
    /// position of the reward, None once the snake fills the board
    fn get_reward_as_position(&self) -> Option<Position>;
}

/// A game that can hand a column of lit cells to a display driver
pub trait ColumnRenderableGame<const H: usize> {
    /// `true` at row `y` iff that cell holds a body segment or the reward.
    /// Out of range columns render dark.
    fn render_column(&self, index: usize) -> [bool; H];
}
