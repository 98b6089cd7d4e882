//! A rules-correct chess engine core.
//!
//! The crate maintains board state, generates legal moves per piece,
//! detects check and checkmate, executes moves by producing new
//! immutable board snapshots, and searches for a best move with
//! depth-limited alpha-beta negamax.
//!
//! The layers build leaf-first: [`geometry`] (coordinates, masks,
//! notation) feeds [`board`] and [`move_gen`] (per-piece pseudo-legal
//! generation), [`moves`] materializes transitions as new boards,
//! [`player`] filters legality and tracks check state, and [`search`]
//! explores player-filtered move trees. [`session::GameSession`] ties a
//! board and both players together for a front-end to drive.
//!
//! ```
//! use chess_rules::prelude::*;
//!
//! let mut session = GameSession::new();
//! let from = coordinate_from_notation("e2").unwrap();
//! let to = coordinate_from_notation("e4").unwrap();
//! let mv = session.select_move(from, to).unwrap();
//! assert_eq!(session.apply(&mv), MoveStatus::Done);
//!
//! let reply = find_best_move(&session, Color::Black, 2);
//! assert!(reply.best_move.is_some());
//! ```

pub mod board;
pub mod color;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod move_gen;
pub mod moves;
pub mod player;
pub mod search;
pub mod session;

/// The common imports for driving a game.
pub mod prelude {
    pub use crate::board::Board;
    pub use crate::color::Color;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::figure::{Figure, FigureKind};
    pub use crate::geometry::{coordinate_from_notation, notation, Coordinate};
    pub use crate::moves::Move;
    pub use crate::player::MoveStatus;
    pub use crate::search::{find_best_move, SearchReport};
    pub use crate::session::GameSession;
}
