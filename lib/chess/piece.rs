use crate::chess::{Color, Role};
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Besides its identity, a piece carries the bits of history the rules care
/// about: whether it has ever moved, which matters for castling, and whether
/// it is a pawn that advanced two squares on the previous turn, which makes
/// it vulnerable to capture en passant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
    moved: bool,
    double_stepped: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has never moved.
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            moved: false,
            double_stepped: false,
        }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has moved since the start of the game.
    #[inline(always)]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Whether this is a pawn that advanced two squares on the previous move.
    #[inline(always)]
    pub fn double_stepped(&self) -> bool {
        self.double_stepped
    }

    /// A copy of this piece that has moved.
    #[inline(always)]
    pub fn moved(self) -> Self {
        Piece {
            moved: true,
            ..self
        }
    }

    /// A copy of this piece with the double step flag set to `flag`.
    #[inline(always)]
    pub fn with_double_step(self, flag: bool) -> Self {
        Piece {
            double_stepped: flag,
            ..self
        }
    }

    /// Whether `other` belongs to the opponent.
    #[inline(always)]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// The ASCII letter of this piece, upper case for white.
    pub fn letter(&self) -> char {
        let c = match self.role {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// The Unicode figurine of this piece.
    pub fn figurine(&self) -> char {
        use Color::*;
        use Role::*;
        match (self.role, self.color) {
            (Pawn, White) => '♙',
            (Knight, White) => '♘',
            (Bishop, White) => '♗',
            (Rook, White) => '♖',
            (Queen, White) => '♕',
            (King, White) => '♔',
            (Pawn, Black) => '♟',
            (Knight, Black) => '♞',
            (Bishop, Black) => '♝',
            (Rook, Black) => '♜',
            (Queen, Black) => '♛',
            (King, Black) => '♚',
        }
    }
}

/// Prints the figurine, or the ASCII letter with the alternate flag `{:#}`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char(self.letter())
        } else {
            f.write_char(self.figurine())
        }
    }
}
