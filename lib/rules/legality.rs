use crate::chess::{Board, Color, MissingKing, Move, Piece, Square, Status};
use crate::rules::{apply, is_in_check, raw_moves};

/// Generates the legal moves of a [`Piece`] standing on the given [`Square`].
///
/// These are the [raw moves][`raw_moves`] that do not leave the mover's own
/// king in check.
pub fn legal_moves(piece: Piece, whence: Square, board: &Board) -> Vec<Move> {
    raw_moves(piece, whence, board)
        .into_iter()
        .filter(|m| is_safe(m, board))
        .collect()
}

/// All legal moves of one side.
pub fn all_legal_moves(side: Color, board: &Board) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|(p, sq)| legal_moves(p, sq, board))
        .collect()
}

/// Whether one side has at least one legal move.
pub fn has_legal_moves(side: Color, board: &Board) -> bool {
    board.pieces(side).any(|(p, sq)| {
        raw_moves(p, sq, board)
            .iter()
            .any(|m| is_safe(m, board))
    })
}

/// Classifies the position from the point of view of the side to move.
pub fn status(side: Color, board: &Board) -> Result<Status, MissingKing> {
    let in_check = is_in_check(side, board)?;
    Ok(Status::new(in_check, has_legal_moves(side, board)))
}

/// Whether the mover's king is safe after the move, a lost king never is.
#[inline(always)]
fn is_safe(m: &Move, board: &Board) -> bool {
    matches!(is_in_check(m.piece().color(), &apply(board, m)), Ok(false))
}
