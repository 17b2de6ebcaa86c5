//! Double-three forbidden move rule
//!
//! A double-three is a move that creates two or more open threes
//! simultaneously and is disallowed for either player. An open three here
//! is a run of exactly three contiguous stones through the candidate cell
//! with the cell just beyond each end in-bounds and empty. Gapped runs
//! never qualify; this detector is deliberately narrower than a general
//! free-three detector.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for pattern checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Open-three test for one axis.
///
/// The candidate stone must already be on the board at `pos`. Counts
/// contiguous same-color stones strictly forward and strictly backward
/// (the candidate itself is not counted); the axis qualifies only when
/// the two counts sum to 2 and the cells just beyond both run ends are
/// in-bounds and empty. The candidate may sit anywhere inside the run.
fn is_open_three(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> bool {
    let mut forward = 0i32;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        forward += 1;
        r += dr;
        c += dc;
    }
    // First cell past the forward run (may be out of bounds)
    let (fr, fc) = (r, c);

    let mut backward = 0i32;
    r = pos.row as i32 - dr;
    c = pos.col as i32 - dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        backward += 1;
        r -= dr;
        c -= dc;
    }
    let (br, bc) = (r, c);

    // Exactly three stones in the run, candidate included
    if forward + backward != 2 {
        return false;
    }

    Pos::is_valid(fr, fc)
        && board.is_empty(Pos::new(fr as u8, fc as u8))
        && Pos::is_valid(br, bc)
        && board.is_empty(Pos::new(br as u8, bc as u8))
}

/// Count open threes created by placing `stone` at `pos`.
///
/// The cell must be empty; anything else counts as zero. A temporary stone
/// is placed for the scan and removed again before returning, so the board
/// is unchanged for every caller. Early-exits at 2: the double-three rule
/// only distinguishes "two or more".
pub fn count_open_threes(board: &mut Board, pos: Pos, stone: Stone) -> u8 {
    if !board.is_empty(pos) {
        return 0;
    }

    board.place_unrecorded(pos, stone);

    let mut count = 0u8;
    for &(dr, dc) in &DIRECTIONS {
        if is_open_three(board, pos, stone, dr, dc) {
            count += 1;
            if count >= 2 {
                break;
            }
        }
    }

    board.remove_unrecorded(pos);
    count
}

/// Check if placing `stone` at `pos` would be a forbidden double-three.
///
/// Returns `false` immediately if the cell is not empty.
pub fn is_double_three(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    if !board.is_empty(pos) {
        return false;
    }

    count_open_threes(board, pos, stone) >= 2
}

/// Check if a move is allowed: the cell is empty and the placement does
/// not create a double-three.
pub fn is_valid_move(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    if !board.is_empty(pos) {
        return false;
    }

    !is_double_three(board, pos, stone)
}
