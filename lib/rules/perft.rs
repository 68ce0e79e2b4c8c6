use crate::chess::{Board, Color, Move, Role};
use crate::rules::{all_legal_moves, apply};

/// Every legal move of one side, with each promotion expanded into one move
/// per promotable [`Role`].
pub fn expanded_moves(side: Color, board: &Board) -> Vec<Move> {
    all_legal_moves(side, board)
        .into_iter()
        .flat_map(|m| {
            let choices = if m.is_promotion() {
                Role::PROMOTIONS.map(|r| Some(m.promote(r)))
            } else {
                [Some(m), None, None, None]
            };

            choices.into_iter().flatten()
        })
        .collect()
}

/// Counts the leaf nodes of the game tree `depth` plies deep.
///
/// See [perft](https://www.chessprogramming.org/Perft).
pub fn perft(side: Color, board: &Board, depth: u32) -> usize {
    match depth {
        0 => 1,
        1 => expanded_moves(side, board).len(),
        d => expanded_moves(side, board)
            .iter()
            .map(|m| perft(!side, &apply(board, m), d - 1))
            .sum(),
    }
}
