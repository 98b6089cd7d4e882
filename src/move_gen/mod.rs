//! Pseudo-legal move generation, split per piece kind.
//!
//! Each generator enumerates a figure's movement geometry against the
//! current board occupancy, ignorant of whether the resulting position
//! leaves its own king in check. That filtering belongs to the
//! [`Player`](crate::player::Player).

mod king;
mod knight;
mod pawn;
mod sliding;

use crate::board::Board;
use crate::figure::{Figure, FigureKind};
use crate::moves::Move;

/// Append every pseudo-legal move of `figure` on `board` to `out`.
pub fn pseudo_legal_moves(board: &Board, figure: &Figure, out: &mut Vec<Move>) {
    match figure.kind {
        FigureKind::King => king::moves(board, figure, out),
        FigureKind::Knight => knight::moves(board, figure, out),
        FigureKind::Queen => sliding::moves(board, figure, &sliding::QUEEN_DIRECTIONS, out),
        FigureKind::Rook => sliding::moves(board, figure, &sliding::ROOK_DIRECTIONS, out),
        FigureKind::Bishop => sliding::moves(board, figure, &sliding::BISHOP_DIRECTIONS, out),
        FigureKind::Pawn => pawn::moves(board, figure, out),
    }
}

/// Quiet-or-capture handling shared by the non-pawn generators: an
/// empty destination yields a quiet move, an opposite-color occupant a
/// capture, an own-color occupant nothing.
///
/// Returns true when the destination was occupied, so sliding walkers
/// know to stop.
fn push_major(board: &Board, figure: &Figure, destination: usize, out: &mut Vec<Move>) -> bool {
    match board.figure_at(destination) {
        None => {
            out.push(Move::Major {
                figure: *figure,
                destination,
            });
            false
        }
        Some(occupant) => {
            if occupant.color != figure.color {
                out.push(Move::MajorAttack {
                    figure: *figure,
                    captured: *occupant,
                });
            }
            true
        }
    }
}
