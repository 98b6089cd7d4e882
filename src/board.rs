//! The board: 64 squares, each owning at most one figure, plus the
//! transient en-passant marker.
//!
//! Boards are treated as immutable snapshots. Move execution clones the
//! board and returns the clone; nothing mutates a board other observers
//! may still hold. Figures are `Copy`, so the clone is a flat array
//! copy with no shared state between snapshots. That is what makes
//! game-tree search safe without undo logic.

use crate::color::Color;
use crate::figure::{Figure, FigureKind};
use crate::geometry::{Coordinate, NUM_SQUARES, SQUARES_PER_ROW};
use crate::move_gen;
use crate::moves::Move;

/// One board slot. Created empty; gains and loses its figure through
/// move execution or explicit placement (setup, promotion).
#[derive(Clone, Copy, Debug)]
pub struct Square {
    coordinate: Coordinate,
    figure: Option<Figure>,
}

impl Square {
    fn empty(coordinate: Coordinate) -> Square {
        Square {
            coordinate,
            figure: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.figure.is_some()
    }

    /// Place a figure, discarding any previous occupant (a capture
    /// overwrites the destination).
    pub fn place(&mut self, figure: Figure) {
        self.figure = Some(figure);
    }

    /// Move the figure out of this square, leaving it empty.
    pub fn release(&mut self) -> Option<Figure> {
        self.figure.take()
    }
}

#[derive(Clone)]
pub struct Board {
    squares: [Square; NUM_SQUARES],
    /// Square of the pawn that just double-pushed, if any. Set only by
    /// `PawnJump` execution, cleared by every other move.
    en_passant_pawn: Option<Coordinate>,
}

impl Board {
    /// A board with all 64 squares empty.
    pub fn empty() -> Board {
        let mut coordinate = 0;
        Board {
            squares: [(); NUM_SQUARES].map(|_| {
                let square = Square::empty(coordinate);
                coordinate += 1;
                square
            }),
            en_passant_pawn: None,
        }
    }

    /// The standard initial position.
    pub fn standard() -> Board {
        use FigureKind::*;

        let mut board = Board::empty();
        const BACK_RANK: [FigureKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.place(Figure::new(kind, Color::Black, file));
            board.place(Figure::new(kind, Color::White, 56 + file));
        }
        for file in 0..SQUARES_PER_ROW {
            board.place(Figure::new(Pawn, Color::Black, 8 + file));
            board.place(Figure::new(Pawn, Color::White, 48 + file));
        }
        board
    }

    pub fn square(&self, coordinate: Coordinate) -> &Square {
        &self.squares[coordinate]
    }

    pub fn figure_at(&self, coordinate: Coordinate) -> Option<&Figure> {
        self.squares[coordinate].figure()
    }

    /// Place a figure on the square its coordinate names.
    pub fn place(&mut self, figure: Figure) {
        self.squares[figure.coordinate].place(figure);
    }

    /// Move the figure out of a square, leaving the square empty.
    pub fn release(&mut self, coordinate: Coordinate) -> Option<Figure> {
        self.squares[coordinate].release()
    }

    /// Relocate a figure between squares, marking it as moved. A
    /// destination occupant is overwritten (captured).
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty, which means the move being
    /// executed was generated from a different board snapshot.
    pub(crate) fn relocate(&mut self, from: Coordinate, to: Coordinate) {
        let Some(mut figure) = self.release(from) else {
            panic!("move executed against a board it was not generated from (empty source square {from})");
        };
        figure.coordinate = to;
        figure.has_moved = true;
        self.squares[to].place(figure);
    }

    pub fn en_passant_pawn(&self) -> Option<Coordinate> {
        self.en_passant_pawn
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Option<Coordinate>) {
        self.en_passant_pawn = pawn;
    }

    /// All figures still on the board.
    pub fn active_figures(&self) -> impl Iterator<Item = &Figure> {
        self.squares.iter().filter_map(|square| square.figure())
    }

    /// All figures of one color still on the board.
    pub fn active_figures_of(&self, color: Color) -> impl Iterator<Item = &Figure> {
        self.active_figures()
            .filter(move |figure| figure.color == color)
    }

    /// Every pseudo-legal move for a color: each active figure's
    /// movement geometry against the current occupancy, with no
    /// self-check filtering (that is the player's job).
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for figure in self.active_figures_of(color) {
            move_gen::pseudo_legal_moves(self, figure, &mut moves);
        }
        moves
    }

    /// Locate a color's king.
    pub fn king(&self, color: Color) -> Option<&Figure> {
        self.active_figures_of(color)
            .find(|figure| figure.kind == FigureKind::King)
    }

    /// Signed material balance: white piece values minus black piece
    /// values, in centipawns. No positional component.
    pub fn material_balance(&self) -> i32 {
        let mut score = 0;
        for figure in self.active_figures() {
            match figure.color {
                Color::White => score += figure.value(),
                Color::Black => score -= figure.value(),
            }
        }
        score
    }

    /// Read-only display projection: the 8x8 grid with two-character
    /// piece codes, ranks 8 down to 1.
    ///
    /// ```text
    ///     a    b    c    d    e    f    g    h
    /// - .---------------------------------------.
    /// 8 | bR | bN | bB | bQ | bK | bB | bN | bR |
    /// ...
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("    a    b    c    d    e    f    g    h\n");
        out.push_str("- .---------------------------------------.\n");
        for row in 0..SQUARES_PER_ROW {
            out.push_str(&format!("{} |", 8 - row));
            for file in 0..SQUARES_PER_ROW {
                match self.figure_at(row * SQUARES_PER_ROW + file) {
                    Some(figure) => out.push_str(&format!(" {} |", figure.code())),
                    None => out.push_str("    |"),
                }
            }
            out.push('\n');
            if row + 1 < SQUARES_PER_ROW {
                out.push_str("- |----|----|----|----|----|----|----|----|\n");
            } else {
                out.push_str("- ^---------------------------------------^\n");
            }
        }
        out
    }
}
