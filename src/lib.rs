#![deny(missing_debug_implementations, missing_docs)]
//! A snake engine for small wrapping displays driven by periodic ticks.
//!
//! The whole game lives in a fixed size grid. The snake's body is not kept in a
//! list: every body cell stores the direction of the next segment toward the head,
//! and the board remembers the head and tail coordinates. A tick rewrites at most
//! three cells plus, when the reward is eaten, one more for the new reward, so the
//! engine runs without touching the heap.
//!
//! Edges wrap round, so the only way to lose is to run into yourself. Losing and
//! filling the board both restart the game in place; from the outside the game is
//! always running.
//!
//! ```
//! use toroidal_snake::controller::StandardGame;
//! use toroidal_snake::types::{ColumnRenderableGame, Direction, HeadGettableGame};
//!
//! let mut game = StandardGame::seeded(7).unwrap();
//! assert_eq!(game.get_head_as_position().x, 8);
//!
//! // the input driver drops a request in, the tick consumes it
//! game.request_direction(Direction::Up);
//! game.tick();
//! assert_eq!(game.get_head_as_position().y, 2);
//!
//! // the display driver reads one column at a time
//! let column: [bool; 8] = game.render_column(8);
//! assert!(column[2]);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod reward;
pub mod rng;
pub mod types;

pub use board::{Board, BoardSnapshot, Cell, StandardBoard};
pub use config::GameConfig;
pub use controller::{GameController, SharedGame, StandardGame};
pub use engine::StepOutcome;
pub use error::GameError;
pub use rng::{RandomSource, ScriptedSource};
pub use types::{Direction, Position};
