//! Full-rules scenarios driven through [`GameSession`]: the legality
//! gate, en passant, castling eligibility, promotion, and checkmate.

use chess_rules::board::Board;
use chess_rules::color::Color;
use chess_rules::error::EngineError;
use chess_rules::figure::{Figure, FigureKind};
use chess_rules::geometry::{coordinate_from_notation, Coordinate};
use chess_rules::moves::Move;
use chess_rules::player::MoveStatus;
use chess_rules::session::GameSession;

fn sq(name: &str) -> Coordinate {
    coordinate_from_notation(name).unwrap()
}

/// Select and apply a move that must be legal, failing the test loudly
/// otherwise.
fn play(session: &mut GameSession, from: &str, to: &str) {
    let mv = session
        .select_move(sq(from), sq(to))
        .unwrap_or_else(|err| panic!("{from}-{to} should be selectable: {err}"));
    assert_eq!(
        session.apply(&mv),
        MoveStatus::Done,
        "{from}-{to} should pass the legality gate"
    );
}

fn bare_kings() -> Board {
    let mut board = Board::empty();
    board.place(Figure::new(FigureKind::King, Color::White, sq("e1")));
    board.place(Figure::new(FigureKind::King, Color::Black, sq("e8")));
    board
}

#[test]
fn en_passant_capture_removes_the_jumped_pawn() {
    let mut session = GameSession::new();
    play(&mut session, "e2", "e4");
    play(&mut session, "a7", "a6");
    play(&mut session, "e4", "e5");
    play(&mut session, "d7", "d5");
    assert_eq!(session.board().en_passant_pawn(), Some(sq("d5")));

    let capture = session.select_move(sq("e5"), sq("d6")).unwrap();
    assert!(
        matches!(capture, Move::PawnEnPassantAttack { .. }),
        "e5xd6 should be the en passant capture, got {capture}"
    );
    assert_eq!(session.apply(&capture), MoveStatus::Done);

    let board = session.board();
    assert_eq!(board.figure_at(sq("d6")).unwrap().kind, FigureKind::Pawn);
    assert_eq!(board.figure_at(sq("d6")).unwrap().color, Color::White);
    assert!(board.figure_at(sq("d5")).is_none(), "jumped pawn removed");
    assert!(board.figure_at(sq("e5")).is_none());
    assert_eq!(board.active_figures_of(Color::Black).count(), 15);
}

#[test]
fn en_passant_window_closes_after_one_move() {
    let mut session = GameSession::new();
    play(&mut session, "e2", "e4");
    assert_eq!(session.board().en_passant_pawn(), Some(sq("e4")));
    play(&mut session, "b8", "c6");
    assert_eq!(session.board().en_passant_pawn(), None);
}

#[test]
fn rejected_move_leaves_the_session_untouched() {
    let mut session = GameSession::new();
    play(&mut session, "e2", "e4");
    play(&mut session, "e7", "e5");
    play(&mut session, "f2", "f4");
    play(&mut session, "d8", "h4");
    assert!(session.is_in_check(Color::White));

    // a2-a3 is pseudo-legal but ignores the check.
    let careless = session.select_move(sq("a2"), sq("a3")).unwrap();
    assert_eq!(session.apply(&careless), MoveStatus::LeavesInCheck);
    assert_eq!(session.turn(), Color::White, "turn did not pass");
    assert!(
        session.board().figure_at(sq("a2")).is_some(),
        "board unchanged after rejection"
    );
    assert!(session.is_in_check(Color::White));

    // g2-g3 blocks the diagonal and is accepted.
    play(&mut session, "g2", "g3");
    assert!(!session.is_in_check(Color::White));
    assert_eq!(session.turn(), Color::Black);
}

#[test]
fn fools_mate_is_checkmate() {
    let mut session = GameSession::new();
    play(&mut session, "f2", "f3");
    play(&mut session, "e7", "e5");
    play(&mut session, "g2", "g4");
    play(&mut session, "d8", "h4");

    assert!(session.is_in_check(Color::White));
    assert!(session.is_in_checkmate(Color::White));
    assert!(!session.is_in_checkmate(Color::Black));
}

#[test]
fn check_without_mate_is_not_checkmate() {
    let mut session = GameSession::new();
    play(&mut session, "e2", "e4");
    play(&mut session, "e7", "e5");
    play(&mut session, "f2", "f4");
    play(&mut session, "d8", "h4");
    assert!(session.is_in_check(Color::White));
    assert!(!session.is_in_checkmate(Color::White), "g3 still blocks");
}

#[test]
fn back_rank_position_is_checkmate() {
    let mut board = Board::empty();
    board.place(Figure::new(FigureKind::King, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::Pawn, Color::White, sq("g2")));
    board.place(Figure::new(FigureKind::Pawn, Color::White, sq("h2")));
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("a1")));
    board.place(Figure::new(FigureKind::King, Color::Black, sq("a8")));

    let session = GameSession::from_board(board, Color::White);
    assert!(session.is_in_check(Color::White));
    assert!(session.is_in_checkmate(Color::White));
}

fn castle_destinations(session: &GameSession, color: Color) -> Vec<Coordinate> {
    session
        .legal_moves(color)
        .iter()
        .filter(|mv| {
            matches!(
                mv,
                Move::KingSideCastle { .. } | Move::QueenSideCastle { .. }
            )
        })
        .map(Move::destination)
        .collect()
}

#[test]
fn castling_is_offered_when_the_lane_is_clear() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("a1")));
    let session = GameSession::from_board(board, Color::White);
    let castles = castle_destinations(&session, Color::White);
    assert!(castles.contains(&sq("g1")), "king-side castle offered");
    assert!(castles.contains(&sq("c1")), "queen-side castle offered");
}

#[test]
fn castling_moves_king_and_rook_together() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    let mut session = GameSession::from_board(board, Color::White);
    play(&mut session, "e1", "g1");
    assert_eq!(
        session.board().figure_at(sq("g1")).unwrap().kind,
        FigureKind::King
    );
    assert_eq!(
        session.board().figure_at(sq("f1")).unwrap().kind,
        FigureKind::Rook
    );
    assert!(session.board().figure_at(sq("e1")).is_none());
    assert!(session.board().figure_at(sq("h1")).is_none());
}

#[test]
fn no_castling_through_an_attacked_square() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    // The rook on f8 covers f1, the square the king passes over.
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("f8")));
    let session = GameSession::from_board(board, Color::White);
    assert!(castle_destinations(&session, Color::White).is_empty());
}

#[test]
fn no_castling_while_in_check() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("e5")));
    let session = GameSession::from_board(board, Color::White);
    assert!(session.is_in_check(Color::White));
    assert!(castle_destinations(&session, Color::White).is_empty());
}

#[test]
fn check_delivered_by_a_move_revokes_castling() {
    let mut board = Board::empty();
    board.place(Figure::new(FigureKind::King, Color::White, sq("e1")));
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::King, Color::Black, sq("g8")));
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("a8")));
    let mut session = GameSession::from_board(board, Color::Black);
    assert!(castle_destinations(&session, Color::White).contains(&sq("g1")));

    // Ra8-e8 checks along the e-file; castling may not answer it.
    play(&mut session, "a8", "e8");
    assert!(session.is_in_check(Color::White));
    assert!(castle_destinations(&session, Color::White).is_empty());
    assert!(matches!(
        session.select_move(sq("e1"), sq("g1")),
        Err(EngineError::NoSuchMove { .. })
    ));
}

#[test]
fn blocking_a_check_restores_castling_at_once() {
    let mut board = Board::empty();
    board.place(Figure::new(FigureKind::King, Color::White, sq("e1")));
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::Bishop, Color::White, sq("d3")));
    board.place(Figure::new(FigureKind::King, Color::Black, sq("g8")));
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("e5")));
    let mut session = GameSession::from_board(board, Color::White);
    assert!(session.is_in_check(Color::White));
    assert!(castle_destinations(&session, Color::White).is_empty());

    // Bd3-e2 blocks the e-file; the castle is legal again in the very
    // list this move leaves behind, not one ply later.
    play(&mut session, "d3", "e2");
    assert!(!session.is_in_check(Color::White));
    assert!(castle_destinations(&session, Color::White).contains(&sq("g1")));
}

#[test]
fn no_castling_after_the_king_has_moved() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    let mut king = Figure::new(FigureKind::King, Color::White, sq("e1"));
    king.has_moved = true;
    board.place(king);
    let session = GameSession::from_board(board, Color::White);
    assert!(castle_destinations(&session, Color::White).is_empty());
}

#[test]
fn no_castling_through_an_occupied_square() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::Bishop, Color::White, sq("f1")));
    let session = GameSession::from_board(board, Color::White);
    assert!(castle_destinations(&session, Color::White).is_empty());
}

#[test]
fn queen_side_ignores_attacks_on_the_knight_square() {
    let mut board = bare_kings();
    board.place(Figure::new(FigureKind::Rook, Color::White, sq("a1")));
    // b1 is crossed only by the rook, so an attack there is harmless.
    board.place(Figure::new(FigureKind::Rook, Color::Black, sq("b8")));
    let session = GameSession::from_board(board, Color::White);
    assert!(castle_destinations(&session, Color::White).contains(&sq("c1")));
}

#[test]
fn promotion_applies_the_chosen_figure() {
    let mut board = Board::empty();
    board.place(Figure::new(FigureKind::King, Color::White, sq("h1")));
    board.place(Figure::new(FigureKind::King, Color::Black, sq("h8")));
    board.place(Figure::new(FigureKind::Pawn, Color::White, sq("b7")));
    let mut session = GameSession::from_board(board, Color::White);

    let mv = session.select_move(sq("b7"), sq("b8")).unwrap();
    assert!(mv.is_promotion());
    let chosen = mv.with_promotion(FigureKind::Knight);
    assert_eq!(session.apply(&chosen), MoveStatus::Done);

    let promoted = session.board().figure_at(sq("b8")).unwrap();
    assert_eq!(promoted.kind, FigureKind::Knight);
    assert_eq!(promoted.color, Color::White);
    assert!(session.board().figure_at(sq("b7")).is_none());
}

#[test]
fn selection_errors_name_the_problem() {
    let session = GameSession::new();
    assert!(matches!(
        session.select_move(sq("e4"), sq("e5")),
        Err(EngineError::EmptySquare(_))
    ));
    assert!(matches!(
        session.select_move(sq("e7"), sq("e5")),
        Err(EngineError::WrongColor(_))
    ));
    assert!(matches!(
        session.select_move(sq("e2"), sq("e5")),
        Err(EngineError::NoSuchMove { .. })
    ));
}
