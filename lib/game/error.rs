use crate::chess::{MissingKing, Move, OutOfBounds, Outcome};
use derive_more::{Display, Error, From};

/// Represents an illegal [`Move`] in the current position.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// Represents a [`Move`] with a missing or impossible promotion.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{_0}` requires promoting to a knight, bishop, rook or queen on the last rank")]
pub struct InvalidPromotionChoice(#[error(not(source))] pub Move);

/// The reason why the [`Game`][`crate::game::Game`] rejected a request.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
pub enum GameError {
    #[display(fmt = "{_0}")]
    OutOfBounds(OutOfBounds),

    #[display(fmt = "{_0}")]
    IllegalMove(IllegalMove),

    #[display(fmt = "{_0}")]
    MissingKing(MissingKing),

    #[display(fmt = "{_0}")]
    InvalidPromotionChoice(InvalidPromotionChoice),

    #[display(fmt = "the game has already ended in a {_0}")]
    GameHasEnded(#[error(not(source))] Outcome),
}
