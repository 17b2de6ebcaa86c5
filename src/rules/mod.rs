//! Game rules for Gomoku
//!
//! This module implements the rule set:
//! - Win condition (five-in-a-row, overlines included)
//! - Forbidden moves (double-three, for both players)

pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{count_open_threes, is_double_three, is_valid_move};
pub use win::{five_line_at_pos, has_five_at_pos};
