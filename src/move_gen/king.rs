//! King move generation: eight fixed offsets with edge-wrap exclusion.
//!
//! Castling is not generated here; it depends on opponent attack
//! information only the player layer has.

use super::push_major;
use crate::board::Board;
use crate::figure::Figure;
use crate::geometry::{is_valid_coordinate, FIRST_COLUMN, EIGHTH_COLUMN};
use crate::moves::Move;

const CANDIDATE_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Offsets that would wrap from the a-file onto the previous rank.
fn is_first_column_exclusion(position: usize, offset: i32) -> bool {
    FIRST_COLUMN[position] && matches!(offset, -9 | -1 | 7)
}

/// Offsets that would wrap from the h-file onto the next rank.
fn is_eighth_column_exclusion(position: usize, offset: i32) -> bool {
    EIGHTH_COLUMN[position] && matches!(offset, -7 | 1 | 9)
}

pub(super) fn moves(board: &Board, king: &Figure, out: &mut Vec<Move>) {
    for offset in CANDIDATE_OFFSETS {
        if is_first_column_exclusion(king.coordinate, offset)
            || is_eighth_column_exclusion(king.coordinate, offset)
        {
            continue;
        }
        let candidate = king.coordinate as i32 + offset;
        if is_valid_coordinate(candidate) {
            push_major(board, king, candidate as usize, out);
        }
    }
}
