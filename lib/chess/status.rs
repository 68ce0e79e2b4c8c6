use derive_more::Display;

/// The state of the game from the point of view of the side to move.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[default]
    #[display(fmt = "active")]
    Active,
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
}

impl Status {
    /// Classifies a position given whether the side to move is in check and
    /// whether it has any legal moves.
    #[inline(always)]
    pub fn new(in_check: bool, has_moves: bool) -> Self {
        match (in_check, has_moves) {
            (false, true) => Status::Active,
            (true, true) => Status::Check,
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
        }
    }

    /// Whether no further moves can be played.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }

    /// Whether the side to move is in check.
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        matches!(self, Status::Check | Status::Checkmate)
    }
}
