use crate::chess::{Board, Color, Move, Outcome, Piece, Role, Square, Status};
use crate::rules::{apply, legal_moves, status};
use derive_more::Constructor;
use tracing::{debug, info, instrument};

mod error;
mod event;

pub use error::*;
pub use event::*;

/// The piece currently selected by the side to move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Selection {
    pub piece: Piece,
    pub square: Square,
}

/// Holds the state of a game of chess.
///
/// Every request either applies in full or is rejected leaving the game as
/// it was. Observers are notified after the new state is in place.
pub struct Game {
    board: Board,
    turn: Color,
    status: Status,
    history: Vec<Move>,
    captured: [Vec<Piece>; 2],
    selection: Option<Selection>,
    moves: Vec<Move>,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            turn: Color::White,
            status: Status::Active,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            selection: None,
            moves: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl Game {
    /// Starts a game from the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game from an arbitrary position with the given side to move.
    ///
    /// Both sides must have a king.
    #[instrument(level = "debug", err)]
    pub fn from_board(board: Board, turn: Color) -> Result<Self, GameError> {
        board.king(!turn)?;
        let status = status(turn, &board)?;

        Ok(Game {
            board,
            turn,
            status,
            ..Game::default()
        })
    }

    /// Registers an [`Observer`].
    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The [`Status`] of the side to move.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The current [`Selection`], if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The legal moves of the current [`Selection`].
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every move played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The last move played, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// The pieces the given side lost, in the order they were captured.
    pub fn captured(&self, side: Color) -> &[Piece] {
        &self.captured[side as usize]
    }

    /// The [`Outcome`] of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Checkmate => Some(Outcome::Checkmate(!self.turn)),
            Status::Stalemate => Some(Outcome::Stalemate),
            Status::Active | Status::Check => self.kingless().map(|c| Outcome::Checkmate(!c)),
        }
    }

    /// Whether no further moves can be played.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        self.outcome().and_then(|o| o.winner())
    }

    /// The side that lost its king, which legal play never allows.
    fn kingless(&self) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.board.king(c).is_err())
    }

    /// Selects the piece on the given [`Square`] and computes its legal moves.
    ///
    /// Selecting a vacant square or an enemy piece clears the selection.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn select(&mut self, square: Square) -> &[Move] {
        match self.board.get(square) {
            Some(piece) if piece.color() == self.turn => {
                self.selection = Some(Selection::new(piece, square));
                self.moves = legal_moves(piece, square, &self.board);
            }

            _ => {
                self.selection = None;
                self.moves.clear();
            }
        }

        debug!(moves = self.moves.len());
        &self.moves
    }

    /// Plays a [`Move`] from the legal moves of the current [`Selection`].
    ///
    /// Promotions must have chosen a [`Role`], see [`Game::play_with`].
    #[instrument(level = "debug", skip(self, m), fields(turn = %self.turn, %m), err)]
    pub fn play(&mut self, m: Move) -> Result<Status, GameError> {
        if let Some(o) = self.outcome() {
            return Err(GameError::GameHasEnded(o));
        }

        if !self.moves.contains(&m.unpromoted()) {
            return Err(IllegalMove(m).into());
        }

        let chosen = match (m.is_promotion(), m.promotion()) {
            (true, Some(r)) => r.is_promotable(),
            (false, None) => true,
            _ => false,
        };

        if !chosen {
            return Err(InvalidPromotionChoice(m).into());
        }

        let board = apply(&self.board, &m);
        let turn = !self.turn;
        let next = status(turn, &board)?;

        if let Some(p) = m.capture() {
            self.captured[p.color() as usize].push(p);
        }

        self.board = board;
        self.turn = turn;
        self.status = next;
        self.history.push(m);
        self.selection = None;
        self.moves.clear();

        debug!(status = %next);
        self.notify(&Event::Played(m, next));

        if let Some(outcome) = self.outcome() {
            info!(%outcome, moves = self.history.len(), "game over");
            let summary = Summary {
                outcome,
                history: self.history.clone(),
                captured: self.captured.clone(),
            };

            self.notify(&Event::Ended(summary));
        }

        Ok(next)
    }

    /// Plays a [`Move`], asking `choose` for the [`Role`] to promote to if
    /// the move is a promotion that has yet to choose one.
    pub fn play_with<F>(&mut self, m: Move, choose: F) -> Result<Status, GameError>
    where
        F: FnOnce(&Move) -> Role,
    {
        if m.is_promotion() && m.promotion().is_none() && self.moves.contains(&m) {
            let role = choose(&m);
            self.play(m.promote(role))
        } else {
            self.play(m)
        }
    }

    /// Starts over from the standard starting position.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        let observers = std::mem::take(&mut self.observers);
        *self = Game {
            observers,
            ..Game::default()
        };

        self.notify(&Event::Reset);
    }

    fn notify(&mut self, event: &Event) {
        for o in &mut self.observers {
            o.notify(event);
        }
    }
}
