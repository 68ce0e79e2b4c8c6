use crate::chess::{Color, Move, Outcome, Piece, Status};

/// A summary of a finished game.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Summary {
    pub outcome: Outcome,
    pub history: Vec<Move>,
    pub captured: [Vec<Piece>; 2],
}

impl Summary {
    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        self.outcome.winner()
    }

    /// The pieces the given side lost.
    pub fn captured(&self, side: Color) -> &[Piece] {
        &self.captured[side as usize]
    }
}

/// A change in the state of a [`Game`][`crate::game::Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    /// A move was played, leaving the opponent in the given [`Status`].
    Played(Move, Status),

    /// The game is over.
    Ended(Summary),

    /// The game started over.
    Reset,
}

/// Trait for types interested in the progress of a game.
#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    /// Called after every change, once the new state is in place.
    fn notify(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Observer for F {
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}
