//! Move variants and their execution.
//!
//! A move stores the moved figure (and, for captures, the captured
//! figure) by value together with the destination coordinate. It is
//! valid only relative to the board snapshot it was generated from;
//! once the live board advances, previously generated moves are stale
//! and must be regenerated. Executing a stale move panics in
//! [`Board::relocate`] when the source square turns out empty.
//!
//! `execute` never mutates its input: it clones the board, applies the
//! transition to the clone, and returns the clone.

use crate::board::Board;
use crate::color::Color;
use crate::figure::{Figure, FigureKind};
use crate::geometry::Coordinate;

/// A transition between two coordinates, by kind.
///
/// Equality is structural: same kind, same moved figure, same
/// destination, and (for attack, castle, and promotion variants) the
/// same captured figure, rook, or promotion figure. Search uses this to
/// correlate moves across cloned boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// Quiet move of any non-pawn figure.
    Major { figure: Figure, destination: Coordinate },
    /// Capture by a non-pawn figure; the destination is the captured
    /// figure's square.
    MajorAttack { figure: Figure, captured: Figure },
    /// Single pawn push onto an empty square.
    PawnMove { figure: Figure, destination: Coordinate },
    /// Double pawn push from the starting rank; marks the arriving
    /// pawn as en-passant-eligible.
    PawnJump { figure: Figure, destination: Coordinate },
    /// Diagonal pawn capture.
    PawnAttack { figure: Figure, captured: Figure },
    /// En-passant capture: the captured pawn is *not* on the
    /// destination square but one rank behind it.
    PawnEnPassantAttack {
        figure: Figure,
        captured: Figure,
        destination: Coordinate,
    },
    /// Decorates a pawn push or capture that reaches the far rank;
    /// after executing the inner move the arriving pawn is replaced by
    /// the promotion figure (queen unless the caller chose otherwise).
    PawnPromotion {
        inner: Box<Move>,
        promotion: FigureKind,
    },
    KingSideCastle {
        king: Figure,
        destination: Coordinate,
        rook: Figure,
        rook_destination: Coordinate,
    },
    QueenSideCastle {
        king: Figure,
        destination: Coordinate,
        rook: Figure,
        rook_destination: Coordinate,
    },
}

impl Move {
    /// The figure performing the move (the pawn, for promotions).
    pub fn figure(&self) -> &Figure {
        match self {
            Move::Major { figure, .. }
            | Move::MajorAttack { figure, .. }
            | Move::PawnMove { figure, .. }
            | Move::PawnJump { figure, .. }
            | Move::PawnAttack { figure, .. }
            | Move::PawnEnPassantAttack { figure, .. } => figure,
            Move::PawnPromotion { inner, .. } => inner.figure(),
            Move::KingSideCastle { king, .. } | Move::QueenSideCastle { king, .. } => king,
        }
    }

    pub fn source(&self) -> Coordinate {
        self.figure().coordinate
    }

    /// Where the moved figure ends up.
    pub fn destination(&self) -> Coordinate {
        match self {
            Move::Major { destination, .. }
            | Move::PawnMove { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::KingSideCastle { destination, .. }
            | Move::QueenSideCastle { destination, .. } => *destination,
            Move::MajorAttack { captured, .. } | Move::PawnAttack { captured, .. } => {
                captured.coordinate
            }
            Move::PawnPromotion { inner, .. } => inner.destination(),
        }
    }

    /// The captured figure, if this move is a capture.
    pub fn captured(&self) -> Option<&Figure> {
        match self {
            Move::MajorAttack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassantAttack { captured, .. } => Some(captured),
            Move::PawnPromotion { inner, .. } => inner.captured(),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured().is_some()
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    /// Replace the promotion choice. A no-op on non-promotion moves.
    pub fn with_promotion(self, promotion: FigureKind) -> Move {
        match self {
            Move::PawnPromotion { inner, .. } => Move::PawnPromotion { inner, promotion },
            other => other,
        }
    }

    /// Apply this move to a board, returning the successor board. The
    /// input board is never mutated.
    ///
    /// The en-passant marker carries over to the successor only when
    /// this move is the double push setting it.
    pub fn execute(&self, board: &Board) -> Board {
        let mut next = board.clone();
        next.set_en_passant_pawn(None);
        match self {
            Move::Major { figure, destination }
            | Move::PawnMove { figure, destination } => {
                next.relocate(figure.coordinate, *destination);
            }
            Move::PawnJump { figure, destination } => {
                next.relocate(figure.coordinate, *destination);
                next.set_en_passant_pawn(Some(*destination));
            }
            Move::MajorAttack { figure, captured }
            | Move::PawnAttack { figure, captured } => {
                // The captured figure occupies the destination square
                // and is overwritten by the relocation.
                next.relocate(figure.coordinate, captured.coordinate);
            }
            Move::PawnEnPassantAttack {
                figure,
                captured,
                destination,
            } => {
                next.release(captured.coordinate);
                next.relocate(figure.coordinate, *destination);
            }
            Move::PawnPromotion { inner, promotion } => {
                next = inner.execute(board);
                let pawn = inner.figure();
                let mut promoted = Figure::new(*promotion, pawn.color, inner.destination());
                promoted.has_moved = true;
                next.place(promoted);
            }
            Move::KingSideCastle {
                king,
                destination,
                rook,
                rook_destination,
            }
            | Move::QueenSideCastle {
                king,
                destination,
                rook,
                rook_destination,
            } => {
                next.relocate(king.coordinate, *destination);
                next.relocate(rook.coordinate, *rook_destination);
            }
        }
        next
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::geometry::notation;
        write!(
            f,
            "{}{}{}{}",
            self.figure().code(),
            notation(self.source()),
            if self.is_attack() { "x" } else { "-" },
            notation(self.destination())
        )?;
        if let Move::PawnPromotion { promotion, .. } = self {
            write!(f, "={}", promotion.letter())?;
        }
        Ok(())
    }
}
