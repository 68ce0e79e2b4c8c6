use crate::chess::{Piece, Role, Square};
use derive_more::Display;
use std::fmt;

/// The kind of a chess [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveKind {
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "capture")]
    Capture,
    #[display(fmt = "castle")]
    Castle,
    #[display(fmt = "en passant")]
    EnPassant,
    #[display(fmt = "promotion")]
    Promotion,
}

/// A chess move.
///
/// Besides the squares involved, a move remembers the piece that moved and the
/// piece it captured as they were right before the move was played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    whence: Square,
    whither: Square,
    kind: MoveKind,
    piece: Piece,
    capture: Option<Piece>,
    promotion: Option<Role>,
}

impl Move {
    /// Constructs a [`Move`] that is yet to choose a promotion, if any.
    #[inline(always)]
    pub fn new(
        whence: Square,
        whither: Square,
        kind: MoveKind,
        piece: Piece,
        capture: Option<Piece>,
    ) -> Self {
        Move {
            whence,
            whither,
            kind,
            piece,
            capture,
            promotion: None,
        }
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The [`MoveKind`].
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The [`Piece`] moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Piece`] captured, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// The [`Role`] chosen for promotion, if any.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Role> {
        self.promotion
    }

    /// This move with the promotion [`Role`] chosen.
    #[inline(always)]
    #[must_use]
    pub fn promote(self, role: Role) -> Self {
        Move {
            promotion: Some(role),
            ..self
        }
    }

    /// This move with no promotion [`Role`] chosen.
    #[inline(always)]
    #[must_use]
    pub fn unpromoted(self) -> Self {
        Move {
            promotion: None,
            ..self
        }
    }

    /// Whether this move captures a piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether this is a promotion move.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        self.kind == MoveKind::Promotion
    }

    /// Whether this is a castling move.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.kind == MoveKind::Castle
    }

    /// Whether this is an en passant capture move.
    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Whether this move is a pawn advancing two squares.
    #[inline(always)]
    pub fn is_double_step(&self) -> bool {
        self.piece.role() == Role::Pawn && (self.whither.row() - self.whence.row()).abs() == 2
    }
}

/// Prints the move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.whence, self.whither)?;
        if let Some(r) = self.promotion {
            write!(f, "{r}")?;
        }

        Ok(())
    }
}
