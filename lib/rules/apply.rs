use crate::chess::{Board, Move, MoveKind, Piece, Role, Square};

/// Plays a [`Move`] on a copy of the [`Board`].
///
/// The move is trusted to be one generated for this board. A promotion that
/// is yet to choose its [`Role`] leaves the pawn itself on the last rank,
/// which is good enough to tell whether the move is legal.
pub fn apply(board: &Board, m: &Move) -> Board {
    let mut next = expire_double_steps(board);
    let (whence, whither) = (m.whence(), m.whither());
    let piece = m.piece().with_double_step(false).moved();

    next = next.with(whence, None);

    match m.kind() {
        MoveKind::Castle => {
            let (rook_from, rook_to) = if whither.col() > whence.col() {
                (7, 5)
            } else {
                (0, 3)
            };

            if let (Ok(from), Ok(to)) = (
                Square::new(whence.row(), rook_from),
                Square::new(whence.row(), rook_to),
            ) {
                let rook = next.get(from).map(Piece::moved);
                next = next.with(from, None).with(to, rook);
            }

            next = next.with(whither, Some(piece));
        }

        MoveKind::EnPassant => {
            // the victim stands beside the capturing pawn, not behind its destination
            if let Ok(victim) = Square::new(whence.row(), whither.col()) {
                next = next.with(victim, None);
            }

            next = next.with(whither, Some(piece));
        }

        MoveKind::Promotion => {
            let promoted = match m.promotion() {
                Some(r) => Piece::new(r, piece.color()).moved(),
                None => piece,
            };

            next = next.with(whither, Some(promoted));
        }

        MoveKind::Normal | MoveKind::Capture => {
            let piece = piece.with_double_step(m.is_double_step());
            next = next.with(whither, Some(piece));
        }
    }

    next
}

/// The window for capturing en passant lasts a single turn.
fn expire_double_steps(board: &Board) -> Board {
    board
        .iter()
        .filter(|(p, _)| p.role() == Role::Pawn && p.double_stepped())
        .fold(*board, |b, (p, sq)| b.with(sq, Some(p.with_double_step(false))))
}
