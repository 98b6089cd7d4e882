//! Piece color and the color-dependent board facts: pawn direction,
//! starting rank, promotion rank.

use crate::geometry::{Coordinate, EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign applied to pawn move offsets. White pawns advance toward
    /// index 0 (rank 8 first), black pawns toward index 63.
    pub fn direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank a pawn of this color double-pushes from.
    pub fn is_pawn_start_rank(self, coordinate: Coordinate) -> bool {
        match self {
            Color::White => SECOND_RANK[coordinate],
            Color::Black => SEVENTH_RANK[coordinate],
        }
    }

    /// Far rank for this color; a pawn arriving here promotes.
    pub fn is_promotion_rank(self, coordinate: Coordinate) -> bool {
        match self {
            Color::White => EIGHTH_RANK[coordinate],
            Color::Black => FIRST_RANK[coordinate],
        }
    }

    /// One-character display prefix, `w` or `b`.
    pub fn prefix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
