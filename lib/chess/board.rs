use crate::chess::{Color, OutOfBounds, Piece, Role, Square};
use derive_more::{Display, Error};
use std::fmt;
use std::ops::Index;

/// A side is missing its king.
///
/// Legal play never leads here, so this indicates a corrupted position.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "the {_0} king is missing from the board")]
pub struct MissingKing(#[error(not(source))] pub Color);

/// The piece placement on the chess board.
///
/// This is a plain value, every change produces a new board and leaves the
/// original untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut squares = [[None; 8]; 8];
        for c in Color::ALL {
            let home = c.home_row() as usize;
            let pawns = (c.home_row() + c.forward()) as usize;
            for (col, &r) in BACK.iter().enumerate() {
                squares[home][col] = Some(Piece::new(r, c));
                squares[pawns][col] = Some(Piece::new(Pawn, c));
            }
        }

        Board(squares)
    }
}

impl Board {
    /// A board without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.row() as usize][sq.col() as usize]
    }

    /// The [`Piece`] at the given coordinates, if any.
    ///
    /// Fails if the coordinates are not on the board.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> Result<Option<Piece>, OutOfBounds> {
        Ok(self.get(Square::new(row, col)?))
    }

    /// A copy of this board with the content of one [`Square`] replaced.
    #[inline(always)]
    #[must_use]
    pub fn with(mut self, sq: Square, piece: Option<Piece>) -> Self {
        self.0[sq.row() as usize][sq.col() as usize] = piece;
        self
    }

    /// Whether the given [`Square`] is vacant.
    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self.get(sq)?, sq)))
    }

    /// An iterator over the pieces of one side.
    pub fn pieces(&self, side: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.iter().filter(move |(p, _)| p.color() == side)
    }

    /// [`Square`] occupied by the king of the given [`Color`].
    pub fn king(&self, side: Color) -> Result<Square, MissingKing> {
        self.pieces(side)
            .find(|(p, _)| p.role() == Role::King)
            .map(|(_, sq)| sq)
            .ok_or(MissingKing(side))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

/// Prints a diagram from white's point of view.
///
/// Pieces are drawn as figurines, or as ASCII letters with `{:#}`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "     a   b   c   d   e   f   g   h";
        const RULE: &str = "   +---+---+---+---+---+---+---+---+";

        writeln!(f, "{FILES}")?;
        writeln!(f, "{RULE}")?;
        for (row, squares) in self.0.iter().enumerate() {
            let rank = 8 - row;
            write!(f, " {rank} |")?;

            for piece in squares {
                match piece {
                    Some(p) if f.alternate() => write!(f, " {p:#} |")?,
                    Some(p) => write!(f, " {p} |")?,
                    None => f.write_str("   |")?,
                }
            }

            writeln!(f, " {rank}")?;
            writeln!(f, "{RULE}")?;
        }

        f.write_str(FILES)
    }
}
