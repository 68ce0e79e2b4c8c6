use crate::chess::{Board, Color, MissingKing};
use crate::rules::movegen::steps;

/// Whether the king of the given [`Color`] is attacked.
///
/// Fails if that side has no king on the board.
pub fn is_in_check(side: Color, board: &Board) -> Result<bool, MissingKing> {
    let king = board.king(side)?;

    Ok(board
        .pieces(!side)
        .any(|(p, sq)| steps(p, sq, board).iter().any(|m| m.whither() == king)))
}
