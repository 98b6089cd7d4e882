//! Depth-limited adversarial search: negamax with alpha-beta pruning
//! over cloned game sessions.
//!
//! One consistent convention throughout: a node's value is the material
//! balance signed for the side to move, and each level negates the
//! child's score with the alpha-beta window negated and swapped. Every
//! candidate passes through the same legality gate as a real move. A
//! candidate that leaves the mover in check is skipped, not scored.
//!
//! Each branch explores its own session clone, so no board is shared
//! between branches and no undo logic exists. That trades an O(pieces)
//! copy per node for simplicity; search depth stays small (≤ 6 plies),
//! bounded by the plain call stack.

use instant::Instant;
use std::time::Duration;
use tracing::debug;

use crate::color::Color;
use crate::moves::Move;
use crate::player::MoveStatus;
use crate::session::GameSession;

/// Alpha-beta window bound; outside any reachable material score.
pub const SCORE_INFINITY: i32 = 1_000_000;
/// Score of a position with no playable reply for the side to move.
pub const CHECKMATE_SCORE: i32 = 100_000;

/// Outcome of a root search.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The best top-level candidate, ready to apply to the real
    /// session. `None` when the mover has no playable move.
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Search `depth` plies ahead for `color` and pick the best move.
pub fn find_best_move(session: &GameSession, color: Color, depth: u32) -> SearchReport {
    let started = Instant::now();
    let mut nodes = 0u64;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;
    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;

    for mv in session.legal_moves(color).to_vec() {
        let mut child = session.clone();
        if child.apply(&mv) == MoveStatus::LeavesInCheck {
            continue;
        }
        let score = -negamax(
            &child,
            color.opponent(),
            depth.saturating_sub(1),
            -beta,
            -alpha,
            &mut nodes,
        );
        debug!(candidate = %mv, score, "root candidate scored");
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
    }

    let report = SearchReport {
        best_move,
        score: best_score,
        nodes,
        elapsed: started.elapsed(),
    };
    debug!(
        ?color,
        depth,
        nodes = report.nodes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        best = report.best_move.as_ref().map(ToString::to_string),
        score = report.score,
        "search finished"
    );
    report
}

fn negamax(
    session: &GameSession,
    color: Color,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return sign(color) * session.board().material_balance();
    }

    let mut best = -SCORE_INFINITY;
    for mv in session.legal_moves(color).to_vec() {
        let mut child = session.clone();
        if child.apply(&mv) == MoveStatus::LeavesInCheck {
            continue;
        }
        let score = -negamax(&child, color.opponent(), depth - 1, -beta, -alpha, nodes);
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if beta <= alpha {
            break;
        }
    }

    if best == -SCORE_INFINITY {
        // Every candidate left the king exposed: the side to move is
        // lost. (Stalemate is not distinguished; draw rules are out of
        // scope.)
        return -CHECKMATE_SCORE;
    }
    best
}
