//! Core game logic: board representation, player markers, and the turn
//! loop driving human and AI moves.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use session::{ControllerKind, Game, GameOutcome};
