//! Sliding piece move generation: queen, rook, and bishop share one
//! direction walker.
//!
//! The walker repeatedly adds a direction vector, re-checking the
//! edge-wrap exclusion at every step, and stops at the board edge, at
//! an own-color occupant, or just after capturing an opposite-color
//! occupant. Sliding pieces block on the first obstruction.

use super::push_major;
use crate::board::Board;
use crate::figure::Figure;
use crate::geometry::{is_valid_coordinate, FIRST_COLUMN, EIGHTH_COLUMN};
use crate::moves::Move;

pub(super) const QUEEN_DIRECTIONS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub(super) const ROOK_DIRECTIONS: [i32; 4] = [-8, -1, 1, 8];
pub(super) const BISHOP_DIRECTIONS: [i32; 4] = [-9, -7, 7, 9];

/// Directions that would wrap westward off the a-file.
fn is_first_column_exclusion(position: usize, direction: i32) -> bool {
    FIRST_COLUMN[position] && matches!(direction, -9 | -1 | 7)
}

/// Directions that would wrap eastward off the h-file.
fn is_eighth_column_exclusion(position: usize, direction: i32) -> bool {
    EIGHTH_COLUMN[position] && matches!(direction, -7 | 1 | 9)
}

pub(super) fn moves(board: &Board, figure: &Figure, directions: &[i32], out: &mut Vec<Move>) {
    for &direction in directions {
        let mut position = figure.coordinate as i32;
        loop {
            // The exclusion is checked at the square being stepped
            // from: on an edge file a wrapping direction ends the walk.
            if is_first_column_exclusion(position as usize, direction)
                || is_eighth_column_exclusion(position as usize, direction)
            {
                break;
            }
            position += direction;
            if !is_valid_coordinate(position) {
                break;
            }
            let blocked = push_major(board, figure, position as usize, out);
            if blocked {
                break;
            }
        }
    }
}
