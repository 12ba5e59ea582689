use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{Direction, Position};

use super::{Board, Cell};

/// A plain description of a board, handy for fixtures and debugging output.
///
/// The body is listed from tail to head. Body markers are not stored, they are
/// recovered from the order of the segments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    #[allow(missing_docs)]
    pub width: usize,
    #[allow(missing_docs)]
    pub height: usize,
    /// segments from tail to head
    pub body: Vec<Position>,
    #[serde(default)]
    #[allow(missing_docs)]
    pub reward: Option<Position>,
}

impl BoardSnapshot {
    /// parse a snapshot from its json form
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// describe this board as a snapshot
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: W,
            height: H,
            body: self.body_path().collect(),
            reward: self.reward(),
        }
    }

    /// Builds a board from a snapshot. Fails if the snapshot has the wrong size, if
    /// consecutive segments aren't neighbours on the torus, if segments overlap, or if
    /// there are free cells but no reward.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, GameError> {
        Self::check_dimensions()?;
        if snapshot.width != W || snapshot.height != H {
            return Err(GameError::Snapshot(format!(
                "snapshot is {}x{} but the board is {}x{}",
                snapshot.width, snapshot.height, W, H
            )));
        }
        let (tail, head) = match (snapshot.body.first(), snapshot.body.last()) {
            (Some(tail), Some(head)) if snapshot.body.len() >= 2 => (*tail, *head),
            _ => {
                return Err(GameError::Snapshot(
                    "a snake needs at least two segments".to_string(),
                ))
            }
        };
        if let Some(outside) = snapshot
            .body
            .iter()
            .chain(snapshot.reward.iter())
            .find(|p| !p.is_within(W, H))
        {
            return Err(GameError::Snapshot(format!("{:?} is off the board", outside)));
        }

        let mut board = Board {
            cells: [[Cell::Empty; H]; W],
            head,
            tail,
        };
        let mut heading = Direction::Up;
        for (from, to) in snapshot.body.iter().tuple_windows() {
            heading = Direction::all()
                .iter()
                .copied()
                .find(|d| from.step_wrapping(*d, W, H) == *to)
                .ok_or_else(|| {
                    GameError::Snapshot(format!("{:?} doesn't touch {:?}", from, to))
                })?;
            if !board.get(*from).is_empty() {
                return Err(GameError::Snapshot(format!("{:?} appears twice", from)));
            }
            board.set(*from, Cell::marker_for(heading));
        }
        if !board.get(head).is_empty() {
            return Err(GameError::Snapshot(format!("{:?} appears twice", head)));
        }
        board.set(head, Cell::marker_for(heading));

        match snapshot.reward {
            Some(reward) if board.get(reward).is_body() => {
                return Err(GameError::Snapshot(format!(
                    "reward at {:?} is under the snake",
                    reward
                )));
            }
            Some(reward) => board.set(reward, Cell::Reward),
            None if board.empty_count() > 0 => {
                return Err(GameError::Snapshot(
                    "free cells remain but there is no reward".to_string(),
                ));
            }
            None => {}
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::StandardBoard;

    #[test]
    fn test_snapshot_round_trips() {
        let mut board = StandardBoard::with_starting_snake().unwrap();
        board.set(Position::new(3, 5), Cell::Reward);
        let snapshot = board.to_snapshot();
        assert_eq!(snapshot.body.len(), 3);
        assert_eq!(snapshot.reward, Some(Position::new(3, 5)));
        assert_eq!(StandardBoard::from_snapshot(&snapshot).unwrap(), board);
    }

    #[test]
    fn test_snapshot_from_json_recovers_markers() {
        let snapshot = BoardSnapshot::from_json(
            r#"{"width":16,"height":8,
                "body":[{"x":3,"y":3},{"x":4,"y":3},{"x":5,"y":3},{"x":5,"y":4},{"x":4,"y":4}],
                "reward":{"x":0,"y":0}}"#,
        )
        .unwrap();
        let board = StandardBoard::from_snapshot(&snapshot).unwrap();
        assert_eq!(board.tail(), Position::new(3, 3));
        assert_eq!(board.head(), Position::new(4, 4));
        assert_eq!(board.get(Position::new(3, 3)), Cell::BodyRight);
        assert_eq!(board.get(Position::new(5, 3)), Cell::BodyDown);
        assert_eq!(board.get(Position::new(5, 4)), Cell::BodyLeft);
        assert_eq!(board.get(Position::new(4, 4)), Cell::BodyLeft);
        assert!(board.assert_consistency());
    }

    #[test]
    fn test_snapshot_segments_may_cross_edges() {
        let snapshot = BoardSnapshot {
            width: 16,
            height: 8,
            body: vec![Position::new(1, 0), Position::new(0, 0), Position::new(15, 0)],
            reward: Some(Position::new(4, 4)),
        };
        let board = StandardBoard::from_snapshot(&snapshot).unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Cell::BodyLeft);
        assert_eq!(board.head_direction(), Direction::Left);
        assert!(board.assert_consistency());
    }

    #[test]
    fn test_invalid_snapshots_are_rejected() {
        let good = BoardSnapshot {
            width: 16,
            height: 8,
            body: vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)],
            reward: Some(Position::new(4, 4)),
        };
        assert!(StandardBoard::from_snapshot(&good).is_ok());

        let mut wrong_size = good.clone();
        wrong_size.width = 11;
        assert!(StandardBoard::from_snapshot(&wrong_size).is_err());

        let mut gap = good.clone();
        gap.body[2] = Position::new(5, 1);
        assert!(StandardBoard::from_snapshot(&gap).is_err());

        let mut overlap = good.clone();
        overlap.body.push(Position::new(2, 1));
        assert!(StandardBoard::from_snapshot(&overlap).is_err());

        let mut buried = good.clone();
        buried.reward = Some(Position::new(2, 1));
        assert!(StandardBoard::from_snapshot(&buried).is_err());

        let mut missing = good.clone();
        missing.reward = None;
        assert!(StandardBoard::from_snapshot(&missing).is_err());

        let mut off_board = good.clone();
        off_board.reward = Some(Position::new(16, 0));
        assert!(StandardBoard::from_snapshot(&off_board).is_err());

        let mut short = good;
        short.body.truncate(1);
        assert!(StandardBoard::from_snapshot(&short).is_err());
    }

    #[test]
    fn test_bad_json_is_rejected() {
        assert!(matches!(
            BoardSnapshot::from_json("{\"width\": 16"),
            Err(GameError::Json(_))
        ));
    }
}
