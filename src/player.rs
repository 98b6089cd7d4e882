//! The per-color player: legality filtering, check state, checkmate,
//! and castling eligibility.
//!
//! A player holds its current legal-move list and an in-check flag.
//! Both change only through [`Player::make_move`], which executes the
//! chosen move on a cloned board and rejects it when the resulting
//! position exposes the mover's own king, leaving the live board
//! untouched.

use tracing::{debug, trace};

use crate::board::Board;
use crate::color::Color;
use crate::figure::{Figure, FigureKind};
use crate::geometry::Coordinate;
use crate::moves::Move;

/// Outcome of a move application. `LeavesInCheck` is a normal rejected
/// transition, not an error: the board is unchanged and the caller
/// picks another move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    LeavesInCheck,
}

/// Per-side castle geometry: squares that must be empty, squares that
/// must not be attacked (the king's transit and destination), and the
/// rook's home plus both destinations.
struct CastleLane {
    empty: &'static [Coordinate],
    unattacked: [Coordinate; 2],
    rook_home: Coordinate,
    king_to: Coordinate,
    rook_to: Coordinate,
}

const WHITE_KING_HOME: Coordinate = 60;
const BLACK_KING_HOME: Coordinate = 4;

const WHITE_KING_SIDE: CastleLane = CastleLane {
    empty: &[61, 62],
    unattacked: [61, 62],
    rook_home: 63,
    king_to: 62,
    rook_to: 61,
};
const WHITE_QUEEN_SIDE: CastleLane = CastleLane {
    empty: &[57, 58, 59],
    unattacked: [58, 59],
    rook_home: 56,
    king_to: 58,
    rook_to: 59,
};
const BLACK_KING_SIDE: CastleLane = CastleLane {
    empty: &[5, 6],
    unattacked: [5, 6],
    rook_home: 7,
    king_to: 6,
    rook_to: 5,
};
const BLACK_QUEEN_SIDE: CastleLane = CastleLane {
    empty: &[1, 2, 3],
    unattacked: [2, 3],
    rook_home: 0,
    king_to: 2,
    rook_to: 3,
};

#[derive(Clone)]
pub struct Player {
    color: Color,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    /// A player for the given board with its pseudo-legal moves
    /// computed. Castle moves join the list on the first
    /// [`Player::recalculate`], once the opponent's move list exists.
    pub fn new(color: Color, board: &Board) -> Player {
        Player {
            color,
            legal_moves: board.pseudo_legal_moves(color),
            in_check: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Recompute the in-check flag from the opponent's current moves.
    /// Used when a session is rebuilt around an arbitrary board.
    pub fn refresh_check(&mut self, board: &Board, opponent_moves: &[Move]) {
        self.in_check = attacks_king(board, self.color, opponent_moves);
    }

    /// Rebuild the full legal-move set: pseudo-legal generation plus
    /// the castle moves permitted against the opponent's current
    /// pseudo-legal attacks.
    pub fn recalculate(&mut self, board: &Board, opponent_moves: &[Move]) {
        let mut moves = board.pseudo_legal_moves(self.color);
        self.append_castle_moves(board, opponent_moves, &mut moves);
        self.legal_moves = moves;
    }

    /// Execute `mv` through the legality gate.
    ///
    /// On `Done` the live board is replaced by the candidate board,
    /// both players' legal-move lists are recomputed against it, this
    /// player's check flag clears, and the opponent's is set when the
    /// new position attacks their king. On `LeavesInCheck` nothing
    /// changes.
    pub fn make_move(&mut self, mv: &Move, board: &mut Board, opponent: &mut Player) -> MoveStatus {
        let candidate = mv.execute(board);
        let opponent_replies = candidate.pseudo_legal_moves(opponent.color);
        if attacks_king(&candidate, self.color, &opponent_replies) {
            trace!(player = %self.color, r#move = %mv, "rejected: leaves own king in check");
            return MoveStatus::LeavesInCheck;
        }

        *board = candidate;
        // Check flags first: castling eligibility in `recalculate`
        // reads them, and the lists must reflect the new position.
        let own_moves = board.pseudo_legal_moves(self.color);
        self.in_check = false;
        opponent.in_check = attacks_king(board, opponent.color, &own_moves);
        self.recalculate(board, &opponent_replies);
        opponent.recalculate(board, &own_moves);
        debug!(player = %self.color, r#move = %mv, opponent_in_check = opponent.in_check, "move applied");
        MoveStatus::Done
    }

    /// Checkmate: in check with no legal move whose resulting board
    /// removes the attack on the king.
    pub fn is_in_checkmate(&self, board: &Board) -> bool {
        self.in_check && !self.has_escape_moves(board)
    }

    /// Whether any current legal move, hypothetically executed, leaves
    /// the king unattacked.
    fn has_escape_moves(&self, board: &Board) -> bool {
        self.legal_moves.iter().any(|mv| {
            let candidate = mv.execute(board);
            let replies = candidate.pseudo_legal_moves(self.color.opponent());
            !attacks_king(&candidate, self.color, &replies)
        })
    }

    /// Castle moves currently permitted: king unmoved, player not in
    /// check, lane squares empty, rook home and unmoved, and no lane
    /// square under attack.
    fn append_castle_moves(&self, board: &Board, opponent_moves: &[Move], out: &mut Vec<Move>) {
        if self.in_check {
            return;
        }
        let king_home = match self.color {
            Color::White => WHITE_KING_HOME,
            Color::Black => BLACK_KING_HOME,
        };
        let Some(king) = board.figure_at(king_home) else {
            return;
        };
        if king.kind != FigureKind::King || king.color != self.color || king.has_moved {
            return;
        }
        let (king_side, queen_side) = match self.color {
            Color::White => (&WHITE_KING_SIDE, &WHITE_QUEEN_SIDE),
            Color::Black => (&BLACK_KING_SIDE, &BLACK_QUEEN_SIDE),
        };
        if let Some(rook) = self.castle_rook(board, opponent_moves, king_side) {
            out.push(Move::KingSideCastle {
                king: *king,
                destination: king_side.king_to,
                rook,
                rook_destination: king_side.rook_to,
            });
        }
        if let Some(rook) = self.castle_rook(board, opponent_moves, queen_side) {
            out.push(Move::QueenSideCastle {
                king: *king,
                destination: queen_side.king_to,
                rook,
                rook_destination: queen_side.rook_to,
            });
        }
    }

    /// The lane's rook, if this castle is currently permitted.
    fn castle_rook(
        &self,
        board: &Board,
        opponent_moves: &[Move],
        lane: &CastleLane,
    ) -> Option<Figure> {
        if lane.empty.iter().any(|&sq| board.figure_at(sq).is_some()) {
            return None;
        }
        let rook = board.figure_at(lane.rook_home)?;
        if rook.kind != FigureKind::Rook || rook.color != self.color || rook.has_moved {
            return None;
        }
        if lane
            .unattacked
            .iter()
            .any(|&sq| attacks_on_square(opponent_moves, sq))
        {
            return None;
        }
        Some(*rook)
    }
}

/// Whether any of `moves` lands on `coordinate`.
fn attacks_on_square(moves: &[Move], coordinate: Coordinate) -> bool {
    moves.iter().any(|mv| mv.destination() == coordinate)
}

/// Whether `opponent_moves` attacks the `color` king on `board`.
///
/// # Panics
///
/// A board without the king is an internal invariant violation.
pub(crate) fn attacks_king(board: &Board, color: Color, opponent_moves: &[Move]) -> bool {
    let Some(king) = board.king(color) else {
        panic!("no {color} king on the board");
    };
    attacks_on_square(opponent_moves, king.coordinate)
}
