//! Board geometry: coordinates, rank/column lookup tables, and algebraic
//! notation.
//!
//! Squares are numbered 0..64 row-major with rank 8 at index 0, so a8 = 0
//! and h1 = 63. Move offsets are plain integer additions on this index;
//! the rank and column masks below exist because such an addition can
//! silently wrap to an adjacent rank (a king on h4 plus +1 lands on a3).
//! Callers exclude wrapping offsets per square before adding.

use crate::error::{EngineError, EngineResult};

/// Linear square index in `[0, 64)`.
pub type Coordinate = usize;

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_ROW: usize = 8;

const fn rank_mask(first: usize) -> [bool; NUM_SQUARES] {
    let mut mask = [false; NUM_SQUARES];
    let mut i = first;
    while i < first + SQUARES_PER_ROW {
        mask[i] = true;
        i += 1;
    }
    mask
}

const fn column_mask(column: usize) -> [bool; NUM_SQUARES] {
    let mut mask = [false; NUM_SQUARES];
    let mut i = column;
    while i < NUM_SQUARES {
        mask[i] = true;
        i += SQUARES_PER_ROW;
    }
    mask
}

pub const EIGHTH_RANK: [bool; NUM_SQUARES] = rank_mask(0);
pub const SEVENTH_RANK: [bool; NUM_SQUARES] = rank_mask(8);
pub const SIXTH_RANK: [bool; NUM_SQUARES] = rank_mask(16);
pub const FIFTH_RANK: [bool; NUM_SQUARES] = rank_mask(24);
pub const FOURTH_RANK: [bool; NUM_SQUARES] = rank_mask(32);
pub const THIRD_RANK: [bool; NUM_SQUARES] = rank_mask(40);
pub const SECOND_RANK: [bool; NUM_SQUARES] = rank_mask(48);
pub const FIRST_RANK: [bool; NUM_SQUARES] = rank_mask(56);

pub const FIRST_COLUMN: [bool; NUM_SQUARES] = column_mask(0);
pub const SECOND_COLUMN: [bool; NUM_SQUARES] = column_mask(1);
pub const SEVENTH_COLUMN: [bool; NUM_SQUARES] = column_mask(6);
pub const EIGHTH_COLUMN: [bool; NUM_SQUARES] = column_mask(7);

/// Check that a candidate destination (possibly computed by adding a
/// signed offset) lies on the board.
#[inline]
pub fn is_valid_coordinate(candidate: i32) -> bool {
    candidate >= 0 && candidate < NUM_SQUARES as i32
}

/// Algebraic notation for a coordinate, e.g. `0` -> `"a8"`.
///
/// Out-of-range input is a contract violation; callers validate first.
pub fn notation(coordinate: Coordinate) -> String {
    debug_assert!(coordinate < NUM_SQUARES);
    let file = b'a' + (coordinate % SQUARES_PER_ROW) as u8;
    let rank = b'8' - (coordinate / SQUARES_PER_ROW) as u8;
    let mut s = String::with_capacity(2);
    s.push(file as char);
    s.push(rank as char);
    s
}

/// Parse an algebraic square reference (`"e2"`) into a coordinate.
///
/// The only fallible geometry lookup: malformed or out-of-range strings
/// come straight from user input.
pub fn coordinate_from_notation(position: &str) -> EngineResult<Coordinate> {
    let mut chars = position.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => (file, rank),
        _ => return Err(EngineError::InvalidNotation(position.to_owned())),
    };
    let column = file as usize - 'a' as usize;
    let row = '8' as usize - rank as usize;
    Ok(row * SQUARES_PER_ROW + column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trip_all_squares() {
        for coordinate in 0..NUM_SQUARES {
            let name = notation(coordinate);
            assert_eq!(
                coordinate_from_notation(&name).unwrap(),
                coordinate,
                "round trip failed for {name}"
            );
        }
    }

    #[test]
    fn known_corners() {
        assert_eq!(notation(0), "a8");
        assert_eq!(notation(7), "h8");
        assert_eq!(notation(56), "a1");
        assert_eq!(notation(63), "h1");
        assert_eq!(coordinate_from_notation("e2").unwrap(), 52);
        assert_eq!(coordinate_from_notation("e4").unwrap(), 36);
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for bad in ["", "e", "e9", "i4", "e22", "4e", "  ", "e2 "] {
            assert!(
                matches!(
                    coordinate_from_notation(bad),
                    Err(EngineError::InvalidNotation(_))
                ),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn masks_mark_the_expected_squares() {
        // Rank 8 is the first row of indices, rank 1 the last.
        assert!(EIGHTH_RANK[0] && EIGHTH_RANK[7] && !EIGHTH_RANK[8]);
        assert!(FIRST_RANK[56] && FIRST_RANK[63] && !FIRST_RANK[55]);
        assert!(SECOND_RANK[48] && SEVENTH_RANK[8]);
        // Columns repeat every 8 squares.
        for row in 0..8 {
            assert!(FIRST_COLUMN[row * 8]);
            assert!(SECOND_COLUMN[row * 8 + 1]);
            assert!(SEVENTH_COLUMN[row * 8 + 6]);
            assert!(EIGHTH_COLUMN[row * 8 + 7]);
        }
        assert_eq!(FIRST_COLUMN.iter().filter(|&&b| b).count(), 8);
    }

    #[test]
    fn coordinate_validity_bounds() {
        assert!(is_valid_coordinate(0));
        assert!(is_valid_coordinate(63));
        assert!(!is_valid_coordinate(-1));
        assert!(!is_valid_coordinate(64));
    }
}
