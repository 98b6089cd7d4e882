//! Knight move generation: eight L-shaped jump offsets.
//!
//! Jump offsets reach two files sideways, so wrap exclusion needs the
//! second and seventh columns as well as the edge files.

use super::push_major;
use crate::board::Board;
use crate::figure::Figure;
use crate::geometry::{
    is_valid_coordinate, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN,
};
use crate::moves::Move;

const CANDIDATE_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

fn is_first_column_exclusion(position: usize, offset: i32) -> bool {
    FIRST_COLUMN[position] && matches!(offset, -17 | -10 | 6 | 15)
}

fn is_second_column_exclusion(position: usize, offset: i32) -> bool {
    SECOND_COLUMN[position] && matches!(offset, -10 | 6)
}

fn is_seventh_column_exclusion(position: usize, offset: i32) -> bool {
    SEVENTH_COLUMN[position] && matches!(offset, -6 | 10)
}

fn is_eighth_column_exclusion(position: usize, offset: i32) -> bool {
    EIGHTH_COLUMN[position] && matches!(offset, -15 | -6 | 10 | 17)
}

pub(super) fn moves(board: &Board, knight: &Figure, out: &mut Vec<Move>) {
    for offset in CANDIDATE_OFFSETS {
        if is_first_column_exclusion(knight.coordinate, offset)
            || is_second_column_exclusion(knight.coordinate, offset)
            || is_seventh_column_exclusion(knight.coordinate, offset)
            || is_eighth_column_exclusion(knight.coordinate, offset)
        {
            continue;
        }
        let candidate = knight.coordinate as i32 + offset;
        if is_valid_coordinate(candidate) {
            push_major(board, knight, candidate as usize, out);
        }
    }
}
