use crate::chess::{Board, Color, Move, MoveKind, Piece, Role, Square};
use crate::rules::{apply, is_in_check};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generates the moves of a [`Piece`] standing on the given [`Square`],
/// without regard to whether they leave its own king in check.
///
/// The piece must stand on `whence`, the result is otherwise meaningless.
pub fn raw_moves(piece: Piece, whence: Square, board: &Board) -> Vec<Move> {
    let mut moves = steps(piece, whence, board);
    if piece.role() == Role::King {
        moves.extend(castles(piece, whence, board));
    }

    moves
}

/// Every raw move except castling.
///
/// Castling never captures, so these are all the moves that may hit an
/// enemy piece.
pub(crate) fn steps(piece: Piece, whence: Square, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    match piece.role() {
        Role::Pawn => pawn(piece, whence, board, &mut moves),
        Role::Knight => leap(piece, whence, board, &KNIGHT, &mut moves),
        Role::Bishop => slide(piece, whence, board, &DIAGONAL, &mut moves),
        Role::Rook => slide(piece, whence, board, &ORTHOGONAL, &mut moves),
        Role::Queen => {
            slide(piece, whence, board, &ORTHOGONAL, &mut moves);
            slide(piece, whence, board, &DIAGONAL, &mut moves);
        }
        Role::King => {
            leap(piece, whence, board, &ORTHOGONAL, &mut moves);
            leap(piece, whence, board, &DIAGONAL, &mut moves);
        }
    }

    moves
}

/// Moves onto a square that is vacant or held by the opponent.
fn target(piece: Piece, whence: Square, whither: Square, board: &Board) -> Option<Move> {
    match board.get(whither) {
        None => Some(Move::new(whence, whither, MoveKind::Normal, piece, None)),
        Some(p) if p.is_enemy_of(&piece) => {
            Some(Move::new(whence, whither, MoveKind::Capture, piece, Some(p)))
        }
        Some(_) => None,
    }
}

fn leap(piece: Piece, whence: Square, board: &Board, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(whither) = whence.offset(dr, dc) {
            moves.extend(target(piece, whence, whither, board));
        }
    }
}

fn slide(piece: Piece, whence: Square, board: &Board, rays: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(dr, dc) in rays {
        let mut next = whence.offset(dr, dc);
        while let Some(whither) = next {
            moves.extend(target(piece, whence, whither, board));
            if !board.is_empty(whither) {
                break;
            }

            next = whither.offset(dr, dc);
        }
    }
}

fn pawn(piece: Piece, whence: Square, board: &Board, moves: &mut Vec<Move>) {
    let side = piece.color();
    let forward = side.forward();
    let last = (!side).home_row();

    let mut push = |whither: Square, kind: MoveKind, capture: Option<Piece>| {
        let kind = if whither.row() == last {
            MoveKind::Promotion
        } else {
            kind
        };

        moves.push(Move::new(whence, whither, kind, piece, capture));
    };

    if let Some(single) = whence.offset(forward, 0).filter(|&s| board.is_empty(s)) {
        push(single, MoveKind::Normal, None);

        if whence.row() == side.home_row() + forward {
            if let Some(double) = single.offset(forward, 0).filter(|&s| board.is_empty(s)) {
                push(double, MoveKind::Normal, None);
            }
        }
    }

    for dc in [-1, 1] {
        let Some(whither) = whence.offset(forward, dc) else {
            continue;
        };

        match board.get(whither) {
            Some(p) if p.is_enemy_of(&piece) => push(whither, MoveKind::Capture, Some(p)),
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(piece, whence, whither, board) {
                    push(whither, MoveKind::EnPassant, Some(victim));
                }
            }
        }
    }
}

/// The enemy pawn that may be taken en passant by moving onto `whither`.
///
/// The victim sits beside the capturing pawn, on the row it landed on after
/// advancing two squares on the previous move.
fn en_passant_victim(piece: Piece, whence: Square, whither: Square, board: &Board) -> Option<Piece> {
    let beside = whence.offset(0, whither.col() - whence.col())?;
    let victim = board.get(beside)?;
    let landing = (!piece.color()).home_row() + 3 * (!piece.color()).forward();

    let eligible = victim.role() == Role::Pawn
        && victim.is_enemy_of(&piece)
        && victim.double_stepped()
        && beside.row() == landing;

    eligible.then_some(victim)
}

/// Castling moves of an unmoved king on its home square.
///
/// The squares between king and rook must be vacant, and the king may neither
/// stand in, pass through, nor land on an attacked square.
fn castles(king: Piece, whence: Square, board: &Board) -> Vec<Move> {
    let side = king.color();
    let home = side.home_row();

    if king.has_moved() || whence.row() != home || whence.col() != 4 {
        return Vec::new();
    }

    if !is_safe(side, board) {
        return Vec::new();
    }

    // (rook column, columns that must be vacant, transit column, king destination)
    let wings: [(i8, &[i8], i8, i8); 2] = [(7, &[5, 6], 5, 6), (0, &[1, 2, 3], 3, 2)];

    let mut moves = Vec::new();
    for (rook, between, transit, destination) in wings {
        let unmoved_rook = Square::new(home, rook)
            .ok()
            .and_then(|sq| board.get(sq))
            .is_some_and(|p| p.role() == Role::Rook && p.color() == side && !p.has_moved());

        let vacant = between
            .iter()
            .all(|&c| Square::new(home, c).is_ok_and(|sq| board.is_empty(sq)));

        if !unmoved_rook || !vacant {
            continue;
        }

        let (Ok(transit), Ok(whither)) = (Square::new(home, transit), Square::new(home, destination))
        else {
            continue;
        };

        let through = Move::new(whence, transit, MoveKind::Normal, king, None);
        let onto = Move::new(whence, whither, MoveKind::Normal, king, None);
        if is_safe(side, &apply(board, &through)) && is_safe(side, &apply(board, &onto)) {
            moves.push(Move::new(whence, whither, MoveKind::Castle, king, None));
        }
    }

    moves
}

#[inline(always)]
fn is_safe(side: Color, board: &Board) -> bool {
    matches!(is_in_check(side, board), Ok(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Color::*;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn place(board: Board, s: &str, p: Piece) -> Board {
        board.with(sq(s), Some(p))
    }

    fn destinations(moves: &[Move]) -> Vec<String> {
        let mut ds: Vec<_> = moves.iter().map(|m| m.whither().to_string()).collect();
        ds.sort();
        ds
    }

    #[test]
    fn pawns_may_advance_two_squares_from_their_home_rank() {
        let b = Board::default();
        let p = Piece::new(Role::Pawn, White);
        let moves = raw_moves(p, sq("e2"), &b);
        assert_eq!(destinations(&moves), ["e3", "e4"]);
        assert!(moves.iter().all(|m| m.kind() == MoveKind::Normal));

        let p = Piece::new(Role::Pawn, Black);
        assert_eq!(destinations(&raw_moves(p, sq("d7"), &b)), ["d5", "d6"]);
    }

    #[test]
    fn pawns_are_blocked_by_any_piece_ahead() {
        let p = Piece::new(Role::Pawn, White);
        let b = place(Board::default(), "e3", Piece::new(Role::Knight, Black));
        assert_eq!(raw_moves(p, sq("e2"), &b), vec![]);

        let b = place(Board::default(), "e4", Piece::new(Role::Knight, White));
        assert_eq!(destinations(&raw_moves(p, sq("e2"), &b)), ["e3"]);
    }

    #[test]
    fn pawns_capture_diagonally_forward() {
        let p = Piece::new(Role::Pawn, White);
        let b = Board::empty()
            .with(sq("d4"), Some(p))
            .with(sq("c5"), Some(Piece::new(Role::Rook, Black)))
            .with(sq("e5"), Some(Piece::new(Role::Rook, White)))
            .with(sq("d5"), Some(Piece::new(Role::Rook, Black)));

        let moves = raw_moves(p, sq("d4"), &b);
        assert_eq!(destinations(&moves), ["c5"]);
        assert_eq!(moves[0].kind(), MoveKind::Capture);
        assert_eq!(moves[0].capture(), Some(Piece::new(Role::Rook, Black)));
    }

    #[test]
    fn pawns_reaching_the_last_rank_only_promote() {
        let p = Piece::new(Role::Pawn, White).moved();
        let victim = Piece::new(Role::Bishop, Black);
        let b = Board::empty().with(sq("b7"), Some(p)).with(sq("c8"), Some(victim));

        let moves = raw_moves(p, sq("b7"), &b);
        assert_eq!(destinations(&moves), ["b8", "c8"]);
        assert!(moves.iter().all(|m| m.kind() == MoveKind::Promotion));
        assert!(moves.iter().all(|m| m.promotion().is_none()));
        assert!(moves.iter().any(|m| m.capture() == Some(victim)));

        let p = Piece::new(Role::Pawn, Black).moved();
        let b = Board::empty().with(sq("h2"), Some(p));
        let moves = raw_moves(p, sq("h2"), &b);
        assert_eq!(destinations(&moves), ["h1"]);
        assert_eq!(moves[0].kind(), MoveKind::Promotion);
    }

    #[test]
    fn pawns_capture_en_passant_a_pawn_that_just_double_stepped() {
        let p = Piece::new(Role::Pawn, White).moved();
        let victim = Piece::new(Role::Pawn, Black).moved().with_double_step(true);
        let b = Board::empty().with(sq("e5"), Some(p)).with(sq("d5"), Some(victim));

        let moves = raw_moves(p, sq("e5"), &b);
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].whither(), sq("d6"));
        assert_eq!(ep[0].capture(), Some(victim));
    }

    #[test]
    fn pawns_cannot_capture_en_passant_without_a_double_step() {
        let p = Piece::new(Role::Pawn, White).moved();
        let victim = Piece::new(Role::Pawn, Black).moved();
        let b = Board::empty().with(sq("e5"), Some(p)).with(sq("d5"), Some(victim));
        assert!(raw_moves(p, sq("e5"), &b).iter().all(|m| !m.is_en_passant()));

        let p = Piece::new(Role::Pawn, Black).moved();
        let victim = Piece::new(Role::Pawn, White).moved().with_double_step(true);
        let b = Board::empty().with(sq("c5"), Some(p)).with(sq("d5"), Some(victim));
        assert!(raw_moves(p, sq("c5"), &b).iter().all(|m| !m.is_en_passant()));

        let b = Board::empty().with(sq("c4"), Some(p)).with(sq("d4"), Some(victim));
        assert_eq!(raw_moves(p, sq("c4"), &b).iter().filter(|m| m.is_en_passant()).count(), 1);
    }

    #[test]
    fn knights_jump_over_pieces() {
        let n = Piece::new(Role::Knight, White);
        let moves = raw_moves(n, sq("b1"), &Board::default());
        assert_eq!(destinations(&moves), ["a3", "c3"]);
    }

    #[proptest]
    fn knights_have_up_to_eight_moves_on_an_empty_board(s: Square, c: Color) {
        let n = Piece::new(Role::Knight, c);
        let b = Board::empty().with(s, Some(n));
        let moves = raw_moves(n, s, &b);
        assert!((2..=8).contains(&moves.len()));
        for m in moves {
            let (dr, dc) = (m.whither().row() - s.row(), m.whither().col() - s.col());
            assert_eq!(dr.abs() * dc.abs(), 2);
        }
    }

    #[proptest]
    fn rooks_attack_fourteen_squares_on_an_empty_board(s: Square, c: Color) {
        let r = Piece::new(Role::Rook, c);
        let b = Board::empty().with(s, Some(r));
        assert_eq!(raw_moves(r, s, &b).len(), 14);
    }

    #[proptest]
    fn queens_move_like_rooks_and_bishops(s: Square, c: Color) {
        let b = Board::empty().with(s, Some(Piece::new(Role::Queen, c)));
        let rook = raw_moves(Piece::new(Role::Rook, c), s, &b).len();
        let bishop = raw_moves(Piece::new(Role::Bishop, c), s, &b).len();
        assert_eq!(raw_moves(Piece::new(Role::Queen, c), s, &b).len(), rook + bishop);
    }

    #[test]
    fn sliders_stop_at_the_first_occupied_square() {
        let r = Piece::new(Role::Rook, White);
        let b = Board::empty()
            .with(sq("a1"), Some(r))
            .with(sq("a4"), Some(Piece::new(Role::Pawn, Black)))
            .with(sq("c1"), Some(Piece::new(Role::Pawn, White)));

        let moves = raw_moves(r, sq("a1"), &b);
        assert_eq!(destinations(&moves), ["a2", "a3", "a4", "b1"]);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }

    #[test]
    fn pieces_in_the_starting_position_are_boxed_in() {
        let b = Board::default();
        for (p, s) in b.iter().filter(|(p, _)| !matches!(p.role(), Role::Pawn | Role::Knight)) {
            assert_eq!(raw_moves(p, s, &b), vec![]);
        }
    }

    fn castling_position() -> Board {
        let k = Piece::new(Role::King, White);
        let r = Piece::new(Role::Rook, White);
        Board::empty()
            .with(sq("e1"), Some(k))
            .with(sq("a1"), Some(r))
            .with(sq("h1"), Some(r))
            .with(sq("e8"), Some(Piece::new(Role::King, Black)))
    }

    fn castles_of(b: &Board) -> Vec<String> {
        let k = b.get(sq("e1")).unwrap();
        destinations(&raw_moves(k, sq("e1"), b).into_iter().filter(Move::is_castling).collect::<Vec<_>>())
    }

    #[test]
    fn king_castles_to_either_side_when_the_path_is_clear() {
        assert_eq!(castles_of(&castling_position()), ["c1", "g1"]);
    }

    #[test]
    fn king_cannot_castle_after_moving() {
        let b = castling_position();
        let b = b.with(sq("e1"), b.get(sq("e1")).map(Piece::moved));
        assert_eq!(castles_of(&b), Vec::<String>::new());
    }

    #[test]
    fn king_cannot_castle_with_a_rook_that_moved() {
        let b = castling_position();
        let b = b.with(sq("h1"), b.get(sq("h1")).map(Piece::moved));
        assert_eq!(castles_of(&b), ["c1"]);
    }

    #[test]
    fn king_cannot_castle_through_pieces() {
        let b = castling_position().with(sq("b1"), Some(Piece::new(Role::Knight, White)));
        assert_eq!(castles_of(&b), ["g1"]);
    }

    #[test]
    fn king_cannot_castle_out_of_through_or_into_check() {
        let attacker = Some(Piece::new(Role::Rook, Black));

        let b = castling_position().with(sq("e5"), attacker);
        assert_eq!(castles_of(&b), Vec::<String>::new());

        let b = castling_position().with(sq("f5"), attacker);
        assert_eq!(castles_of(&b), ["c1"]);

        let b = castling_position().with(sq("c5"), attacker);
        assert_eq!(castles_of(&b), ["g1"]);

        // only b1 is attacked, which the king never crosses
        let b = castling_position().with(sq("b5"), attacker);
        assert_eq!(castles_of(&b), ["c1", "g1"]);
    }
}
