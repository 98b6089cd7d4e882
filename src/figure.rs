//! Figures as plain values.
//!
//! The piece kinds form a closed sum type; a [`Figure`] is a small
//! `Copy` value owned by the square it stands on. Moving a figure
//! between squares transfers the value, so a cloned board shares
//! nothing with its source.

use crate::color::Color;
use crate::geometry::Coordinate;

/// Centipawn piece values (pawn = 100). The king value dwarfs the sum
/// of everything else so no exchange ever trades it away.
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 18_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl FigureKind {
    /// Material value in centipawns.
    pub fn value(self) -> i32 {
        match self {
            FigureKind::King => KING_VALUE,
            FigureKind::Queen => QUEEN_VALUE,
            FigureKind::Rook => ROOK_VALUE,
            FigureKind::Bishop => BISHOP_VALUE,
            FigureKind::Knight => KNIGHT_VALUE,
            FigureKind::Pawn => PAWN_VALUE,
        }
    }

    /// Single-letter display code.
    pub fn letter(self) -> char {
        match self {
            FigureKind::King => 'K',
            FigureKind::Queen => 'Q',
            FigureKind::Rook => 'R',
            FigureKind::Bishop => 'B',
            FigureKind::Knight => 'N',
            FigureKind::Pawn => 'P',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Figure {
    pub kind: FigureKind,
    pub color: Color,
    pub coordinate: Coordinate,
    /// False until the figure executes its first move. Gates castling
    /// (king and rook) and the pawn double push.
    pub has_moved: bool,
}

impl Figure {
    pub fn new(kind: FigureKind, color: Color, coordinate: Coordinate) -> Figure {
        Figure {
            kind,
            color,
            coordinate,
            has_moved: false,
        }
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    /// Two-character display code, color prefix plus type letter:
    /// `"wK"`, `"bP"`.
    pub fn code(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.color.prefix());
        s.push(self.kind.letter());
        s
    }
}
