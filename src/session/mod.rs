//! Match session management
//!
//! Owns the two player identities, turn order, status and scores, and
//! drives the board through the move-validation pipeline: status gate,
//! coordinate gate, occupancy gate, double-three gate, placement, win
//! check, draw check, turn switch. Presentation layers either poll the
//! read model after each call or register a [`MatchObserver`] for
//! synchronous notifications at the transition points.
//!
//! All operations are synchronous in-memory mutations behind `&mut self`;
//! concurrent callers must wrap the [`Match`] in an exclusive lock so each
//! multi-step operation appears atomic.

pub mod player;


pub use player::Player;

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules;

/// Default display names substituted for blank nickname input
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// Session status
///
/// `Won` carries the winner's color; [`Match::winner`] maps it back to
/// the player. Once `Won` or `Draw`, only [`Match::reset_game`] leaves
/// the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won(Stone),
    Draw,
}

/// Synchronous extension points for the presentation layer.
///
/// Every method has a no-op default body; implement the ones of interest
/// and register with [`Match::add_observer`]. Dispatch happens inline at
/// the moment of the transition, with no queuing.
pub trait MatchObserver {
    /// An ordinary move was committed, a move was undone, or the match
    /// was reset
    fn on_state_change(&mut self) {}
    /// The current game was won
    fn on_win(&mut self, _winner: &Player) {}
    /// The board filled up with no winner
    fn on_draw(&mut self) {}
}

/// Serializable read model of the match
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchSummary {
    pub current_player: String,
    pub current_stone: Stone,
    pub status: GameStatus,
    pub move_count: u32,
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: Option<String>,
}

/// A two-player match: board, players, turn order, status and scores
pub struct Match {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    move_count: u32,
    winning_line: Option<[Pos; 5]>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl Match {
    /// Create a match from nickname input.
    ///
    /// Names are trimmed; blank input falls back to the defaults.
    /// Returns `None` when both players would end up with the same name.
    /// Player 1 takes Black and moves first.
    pub fn new(player1_name: &str, player2_name: &str) -> Option<Self> {
        let name1 = sanitize_name(player1_name, DEFAULT_PLAYER1_NAME);
        let name2 = sanitize_name(player2_name, DEFAULT_PLAYER2_NAME);
        if name1 == name2 {
            debug!(name = %name1, "match rejected: duplicate nicknames");
            return None;
        }
        Some(Self::with_players(
            Player::new(name1, Stone::Black),
            Player::new(name2, Stone::White),
        ))
    }

    fn with_players(player1: Player, player2: Player) -> Self {
        Self {
            board: Board::new(),
            players: [player1, player2],
            current: 0,
            status: GameStatus::Playing,
            move_count: 0,
            winning_line: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for synchronous transition notifications
    pub fn add_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    /// Attempt a move at raw coordinates for the current player.
    ///
    /// Rejected with `false` and no side effect when the match is over,
    /// the coordinates are out of range, the cell is occupied, or the
    /// placement would be a double-three for the mover's color. Returns
    /// `true` for every committed placement, whether it ends the game or
    /// not.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.status != GameStatus::Playing {
            debug!(row, col, status = %self.status, "move rejected: match is over");
            return false;
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            debug!(row, col, "move rejected: out of range");
            return false;
        }

        let pos = Pos::new(row as u8, col as u8);
        let stone = self.players[self.current].stone();

        if !self.board.is_empty(pos) {
            debug!(row, col, "move rejected: cell occupied");
            return false;
        }
        if rules::is_double_three(&mut self.board, pos, stone) {
            debug!(row, col, %stone, "move rejected: double-three");
            return false;
        }
        if !self.board.place_stone(pos, stone) {
            return false;
        }
        self.move_count += 1;

        if rules::has_five_at_pos(&self.board, pos, stone) {
            self.handle_win(pos, stone);
            return true;
        }
        if self.board.is_full() {
            self.handle_draw();
            return true;
        }

        self.current = 1 - self.current;
        for observer in &mut self.observers {
            observer.on_state_change();
        }
        true
    }

    fn handle_win(&mut self, pos: Pos, stone: Stone) {
        self.status = GameStatus::Won(stone);
        self.winning_line = rules::five_line_at_pos(&self.board, pos, stone);
        self.players[self.current].add_score();
        info!(
            winner = %self.players[self.current],
            move_count = self.move_count,
            "match won"
        );
        let winner = &self.players[self.current];
        for observer in &mut self.observers {
            observer.on_win(winner);
        }
    }

    fn handle_draw(&mut self) {
        self.status = GameStatus::Draw;
        info!(move_count = self.move_count, "match drawn");
        for observer in &mut self.observers {
            observer.on_draw();
        }
    }

    /// Undo the most recent move and hand the turn back to the player
    /// who made it.
    ///
    /// Rejected once the match is over, or when no move has been made.
    pub fn undo_move(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            debug!("undo rejected: match is over");
            return false;
        }
        if self.board.undo_last_move().is_none() {
            debug!("undo rejected: no moves to undo");
            return false;
        }

        self.current = 1 - self.current;
        for observer in &mut self.observers {
            observer.on_state_change();
        }
        true
    }

    /// Start a fresh game. Cumulative player scores are preserved.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::Playing;
        self.move_count = 0;
        self.winning_line = None;
        info!("match reset");
        for observer in &mut self.observers {
            observer.on_state_change();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move()
    }

    /// The winning run of the current game, for highlighting
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn player1(&self) -> &Player {
        &self.players[0]
    }

    pub fn player2(&self) -> &Player {
        &self.players[1]
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Winner of the current game, if any
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(stone) => self.players.iter().find(|p| p.stone() == stone),
            _ => None,
        }
    }

    /// Snapshot of the match for presentation layers and logs
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            current_player: self.current_player().name().to_string(),
            current_stone: self.current_player().stone(),
            status: self.status,
            move_count: self.move_count,
            player1_score: self.players[0].score(),
            player2_score: self.players[1].score(),
            winner: self.winner().map(|p| p.name().to_string()),
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::with_players(
            Player::new(DEFAULT_PLAYER1_NAME, Stone::Black),
            Player::new(DEFAULT_PLAYER2_NAME, Stone::White),
        )
    }
}

fn sanitize_name(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
