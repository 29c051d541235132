use log::{debug, info};

use crate::ai::{GreedyPolicy, LookaheadPolicy, MovePolicy, RandomPolicy};
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::{BoardError, GameError};

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Who drives a marker's moves. Resolved once per turn to either the
/// human input loop or one of the AI policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    Human,
    Random,
    Greedy,
    Lookahead,
}

enum ControllerSlot {
    Human,
    Ai(Box<dyn MovePolicy>),
}

impl ControllerSlot {
    fn new(kind: ControllerKind) -> Self {
        match kind {
            ControllerKind::Human => ControllerSlot::Human,
            ControllerKind::Random => ControllerSlot::Ai(Box::new(RandomPolicy::new())),
            ControllerKind::Greedy => ControllerSlot::Ai(Box::new(GreedyPolicy::new())),
            ControllerKind::Lookahead => ControllerSlot::Ai(Box::new(LookaheadPolicy::new())),
        }
    }
}

/// One game: the board, the active marker, and a controller per marker.
/// The board is owned exclusively; AI policies only ever see it behind a
/// shared reference and simulate on clones.
pub struct Game {
    board: Board,
    current: Player,
    cross: ControllerSlot,
    circle: ControllerSlot,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.rows, config.cols)?;
        Ok(Game {
            board,
            current: Player::Cross,
            cross: ControllerSlot::new(config.cross),
            circle: ControllerSlot::new(config.circle),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Drive the game to a terminal state. Each turn: show the board,
    /// delegate the move, then check for a winner before checking for a
    /// draw (a full board with a completed shape is a win).
    pub fn run(&mut self, console: &mut dyn Console) -> Result<GameOutcome, GameError> {
        loop {
            self.show_board(console);
            console.display(&format!("{} to move.", self.current.name()));

            self.play_turn(console)?;

            if let Some(winner) = self.board.winner() {
                self.show_board(console);
                console.display(&format!("{} wins!", winner.name()));
                info!("game over: {} wins", winner.name());
                return Ok(GameOutcome::Winner(winner));
            }
            if self.board.is_full() {
                self.show_board(console);
                console.display("Draw: the board is full.");
                info!("game over: draw");
                return Ok(GameOutcome::Draw);
            }

            self.current = self.current.other();
        }
    }

    fn play_turn(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        let player = self.current;
        let slot = match player {
            Player::Cross => &mut self.cross,
            Player::Circle => &mut self.circle,
        };
        match slot {
            ControllerSlot::Human => human_move(&mut self.board, player, console),
            ControllerSlot::Ai(policy) => {
                let col = policy.select_column(&self.board, player);
                debug!("{} ({}) plays column {}", player.name(), policy.name(), col);
                // The policy guarantees an open column; a failure here is
                // a bug and propagates.
                self.board.insert(col, player.to_cell())?;
                Ok(())
            }
        }
    }

    fn show_board(&self, console: &mut dyn Console) {
        let header: Vec<String> = (0..self.board.cols()).map(|c| c.to_string()).collect();
        console.display(&header.join(" "));
        console.display(&self.board.to_display_text());
    }
}

/// Re-prompt until an insertion succeeds. Unparseable input and the
/// recoverable board errors are reported and retried; I/O failures and
/// anything else end the game.
fn human_move(
    board: &mut Board,
    player: Player,
    console: &mut dyn Console,
) -> Result<(), GameError> {
    let prompt = format!("{}, choose a column (0-{}): ", player.name(), board.cols() - 1);
    loop {
        let line = console.prompt(&prompt)?;
        let col = match line.trim().parse::<usize>() {
            Ok(col) => col,
            Err(_) => {
                console.display("Please enter a column number.");
                continue;
            }
        };
        match board.insert(col, player.to_cell()) {
            Ok(row) => {
                debug!("{} (Human) plays column {} (row {})", player.name(), col, row);
                return Ok(());
            }
            Err(
                err @ (BoardError::InvalidPosition { .. }
                | BoardError::InvalidSymbol
                | BoardError::ColumnFull { .. }),
            ) => {
                console.display(&err.to_string());
            }
            Err(err) => return Err(err.into()),
        }
    }
}
