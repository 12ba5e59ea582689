use crate::types::Direction;

/// The contents of a single board cell.
///
/// Body markers point at the next segment toward the head, so following them
/// from the tail walks the whole snake. The four body variants share their
/// discriminants with [`Direction`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[allow(missing_docs)]
    BodyUp = 0,
    #[allow(missing_docs)]
    BodyLeft = 1,
    #[allow(missing_docs)]
    BodyDown = 2,
    #[allow(missing_docs)]
    BodyRight = 3,
    #[allow(missing_docs)]
    Empty = 4,
    #[allow(missing_docs)]
    Reward = 5,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// the body marker pointing in `direction`
    pub fn marker_for(direction: Direction) -> Cell {
        match direction {
            Direction::Up => Cell::BodyUp,
            Direction::Left => Cell::BodyLeft,
            Direction::Down => Cell::BodyDown,
            Direction::Right => Cell::BodyRight,
        }
    }

    /// where this marker points, None for cells that aren't part of the snake
    pub fn direction(self) -> Option<Direction> {
        match self {
            Cell::BodyUp => Some(Direction::Up),
            Cell::BodyLeft => Some(Direction::Left),
            Cell::BodyDown => Some(Direction::Down),
            Cell::BodyRight => Some(Direction::Right),
            Cell::Empty | Cell::Reward => None,
        }
    }

    #[allow(missing_docs)]
    pub fn is_body(self) -> bool {
        self.direction().is_some()
    }

    #[allow(missing_docs)]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[allow(missing_docs)]
    pub fn is_reward(self) -> bool {
        self == Cell::Reward
    }

    /// whether a display should light this cell
    pub fn is_lit(self) -> bool {
        !self.is_empty()
    }

    /// one character per cell, used by the board's Display impl
    pub fn as_char(self) -> char {
        match self {
            Cell::BodyUp => '^',
            Cell::BodyLeft => '<',
            Cell::BodyDown => 'v',
            Cell::BodyRight => '>',
            Cell::Empty => '.',
            Cell::Reward => 'r',
        }
    }

    #[allow(missing_docs)]
    pub fn pack_as_u8(self) -> u8 {
        self as u8
    }

    /// decodes a packed cell, rejecting anything that isn't one of the six kinds
    pub fn from_u8(value: u8) -> Option<Cell> {
        match value {
            4 => Some(Cell::Empty),
            5 => Some(Cell::Reward),
            v => Direction::from_u8(v).map(Cell::marker_for),
        }
    }
}
