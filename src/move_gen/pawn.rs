//! Pawn move generation: four offset cases scaled by the pawn's
//! forward direction.
//!
//! - 8: single push onto an empty square, promoting on the far rank.
//! - 16: double push, only from the color's starting rank with both
//!   squares empty.
//! - 7 and 9: diagonal captures, including the en-passant case where
//!   the captured pawn stands beside the mover rather than on the
//!   destination square. Edge files exclude the offset that would wrap.

use crate::board::Board;
use crate::color::Color;
use crate::figure::{Figure, FigureKind};
use crate::geometry::{is_valid_coordinate, Coordinate, FIRST_COLUMN, EIGHTH_COLUMN};
use crate::moves::Move;

const CANDIDATE_OFFSETS: [i32; 4] = [8, 16, 7, 9];

pub(super) fn moves(board: &Board, pawn: &Figure, out: &mut Vec<Move>) {
    let direction = pawn.color.direction();
    for offset in CANDIDATE_OFFSETS {
        let candidate = pawn.coordinate as i32 + offset * direction;
        if !is_valid_coordinate(candidate) {
            continue;
        }
        let destination = candidate as usize;
        match offset {
            8 => single_push(board, pawn, destination, out),
            16 => double_push(board, pawn, destination, out),
            7 | 9 => {
                if !wraps_at_edge(pawn, offset) {
                    diagonal(board, pawn, destination, out);
                }
            }
            _ => unreachable!(),
        }
    }
}

fn single_push(board: &Board, pawn: &Figure, destination: Coordinate, out: &mut Vec<Move>) {
    if board.figure_at(destination).is_none() {
        out.push(promote_if_due(
            pawn,
            Move::PawnMove {
                figure: *pawn,
                destination,
            },
        ));
    }
}

fn double_push(board: &Board, pawn: &Figure, destination: Coordinate, out: &mut Vec<Move>) {
    if !pawn.has_moved && pawn.color.is_pawn_start_rank(pawn.coordinate) {
        let intervening = (pawn.coordinate as i32 + 8 * pawn.color.direction()) as Coordinate;
        if board.figure_at(intervening).is_none() && board.figure_at(destination).is_none() {
            out.push(Move::PawnJump {
                figure: *pawn,
                destination,
            });
        }
    }
}

/// A diagonal offset wraps when the pawn stands on the edge file the
/// offset leans over. Which file that is depends on the pawn's color,
/// because the offset is scaled by the direction sign.
fn wraps_at_edge(pawn: &Figure, offset: i32) -> bool {
    match (offset, pawn.color) {
        (7, Color::White) | (9, Color::Black) => EIGHTH_COLUMN[pawn.coordinate],
        (7, Color::Black) | (9, Color::White) => FIRST_COLUMN[pawn.coordinate],
        _ => unreachable!(),
    }
}

fn diagonal(board: &Board, pawn: &Figure, destination: Coordinate, out: &mut Vec<Move>) {
    match board.figure_at(destination) {
        Some(occupant) => {
            if occupant.color != pawn.color {
                out.push(promote_if_due(
                    pawn,
                    Move::PawnAttack {
                        figure: *pawn,
                        captured: *occupant,
                    },
                ));
            }
        }
        None => en_passant(board, pawn, destination, out),
    }
}

/// The en-passant case: the destination diagonal is empty, but the
/// square one rank behind it (beside the mover, same rank) holds the
/// pawn the board currently marks as en-passant-eligible.
fn en_passant(board: &Board, pawn: &Figure, destination: Coordinate, out: &mut Vec<Move>) {
    let beside = destination as i32 - 8 * pawn.color.direction();
    debug_assert!(is_valid_coordinate(beside));
    let beside = beside as Coordinate;
    if board.en_passant_pawn() != Some(beside) {
        return;
    }
    if let Some(occupant) = board.figure_at(beside) {
        if occupant.color != pawn.color && occupant.kind == FigureKind::Pawn {
            out.push(Move::PawnEnPassantAttack {
                figure: *pawn,
                captured: *occupant,
                destination,
            });
        }
    }
}

fn promote_if_due(pawn: &Figure, mv: Move) -> Move {
    if pawn.color.is_promotion_rank(mv.destination()) {
        // Queen is the default choice; the caller may swap it out
        // before the move is applied.
        Move::PawnPromotion {
            inner: Box::new(mv),
            promotion: FigureKind::Queen,
        }
    } else {
        mv
    }
}
