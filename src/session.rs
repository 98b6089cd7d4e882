//! The game session: the board plus both players, with the operations
//! a front-end drives.
//!
//! The core carries no process-wide state; everything lives in a
//! `GameSession` value passed to the entry points. Sessions clone
//! cheaply enough for the search to explore move trees on independent
//! copies.

use crate::board::Board;
use crate::color::Color;
use crate::error::{EngineError, EngineResult};
use crate::geometry::Coordinate;
use crate::moves::Move;
use crate::player::{MoveStatus, Player};

#[derive(Clone)]
pub struct GameSession {
    board: Board,
    white: Player,
    black: Player,
    turn: Color,
}

impl GameSession {
    /// A session at the standard initial position, white to move, both
    /// players' full legal-move sets computed.
    pub fn new() -> GameSession {
        let board = Board::standard();
        let mut white = Player::new(Color::White, &board);
        let mut black = Player::new(Color::Black, &board);
        // Fold castle moves into both lists (none are eligible in the
        // initial position, but the lists must be full from the start).
        let black_moves = black.legal_moves().to_vec();
        white.recalculate(&board, &black_moves);
        let white_moves = white.legal_moves().to_vec();
        black.recalculate(&board, &white_moves);
        GameSession {
            board,
            white,
            black,
            turn: Color::White,
        }
    }

    /// A session rebuilt around an arbitrary board position with the
    /// given side to move. Both players' legal-move lists and check
    /// flags are recomputed from the board alone.
    pub fn from_board(board: Board, turn: Color) -> GameSession {
        let mut white = Player::new(Color::White, &board);
        let mut black = Player::new(Color::Black, &board);
        let black_moves = black.legal_moves().to_vec();
        let white_moves = white.legal_moves().to_vec();
        // Check flags first: castling eligibility depends on them.
        white.refresh_check(&board, &black_moves);
        black.refresh_check(&board, &white_moves);
        white.recalculate(&board, &black_moves);
        let white_full = white.legal_moves().to_vec();
        black.recalculate(&board, &white_full);
        GameSession {
            board,
            white,
            black,
            turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Current legal moves for a color.
    pub fn legal_moves(&self, color: Color) -> &[Move] {
        self.player(color).legal_moves()
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.player(color).is_in_check()
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.player(color).is_in_checkmate(&self.board)
    }

    /// Resolve a (source, destination) pair against the side to move.
    ///
    /// Validates the selection before the move lookup: the source must
    /// hold a figure of the side to move, and the pair must match a
    /// move in the current legal list.
    pub fn select_move(&self, from: Coordinate, to: Coordinate) -> EngineResult<Move> {
        let figure = self
            .board
            .figure_at(from)
            .ok_or(EngineError::EmptySquare(from))?;
        if figure.color != self.turn {
            return Err(EngineError::WrongColor(from));
        }
        self.legal_moves(self.turn)
            .iter()
            .find(|mv| mv.source() == from && mv.destination() == to)
            .cloned()
            .ok_or(EngineError::NoSuchMove { from, to })
    }

    /// Apply a move for the figure's owner through the legality gate.
    /// On `Done` the turn passes to the opponent; on `LeavesInCheck`
    /// the session is unchanged.
    pub fn apply(&mut self, mv: &Move) -> MoveStatus {
        let mover = mv.figure().color;
        let GameSession {
            board,
            white,
            black,
            turn,
        } = self;
        let (player, opponent) = match mover {
            Color::White => (white, black),
            Color::Black => (black, white),
        };
        let status = player.make_move(mv, board, opponent);
        if status == MoveStatus::Done {
            *turn = mover.opponent();
        }
        status
    }

    /// Read-only board rendering for display.
    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
