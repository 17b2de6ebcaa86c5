//! Gomoku rules engine
//!
//! A two-player Gomoku (five-in-a-row) rules engine: board state with
//! move history, win and draw detection, and the double-three
//! forbidden-move rule, driven through a match session with turn order
//! and cumulative scorekeeping. There is no AI and no I/O; the
//! presentation layer is an external collaborator that calls in with
//! row/column coordinates and reads engine state back.
//!
//! # Architecture
//!
//! The engine is organized into three modules:
//! - [`board`]: board representation with bitboards and move history
//! - [`rules`]: game rules (win detection, forbidden moves)
//! - [`session`]: match state machine, players, scores and observers
//!
//! # Quick Start
//!
//! ```
//! use omok::{GameStatus, Match};
//!
//! let mut game = Match::new("Alice", "Bob").unwrap();
//!
//! // Black opens in the center
//! assert!(game.make_move(7, 7));
//! assert_eq!(game.current_player().name(), "Bob");
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Occupied cells are rejected without side effects
//! assert!(!game.make_move(7, 7));
//! ```
//!
//! # Error Handling
//!
//! Every expected, recoverable condition (out-of-range coordinates,
//! occupied cells, forbidden double-threes, moves after game end, undo
//! with nothing to undo) is reported as `false` or `None`, never as an
//! error type or panic. Presentation layers translate those returns into
//! user feedback, either by polling the read model after each call or by
//! registering a [`session::MatchObserver`].

pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use session::{GameStatus, Match, MatchObserver, MatchSummary, Player};
