use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Coordinates that fall outside of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "square `({_0}, {_1})` is out of bounds")]
pub struct OutOfBounds(pub i8, pub i8);

/// A square on the chess board.
///
/// Row `0` is black's back rank and row `7` white's, while columns run from
/// `0` to `7` left to right from white's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Result<Self, OutOfBounds> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square { row, col })
        } else {
            Err(OutOfBounds(row, col))
        }
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// The square displaced by `(dr, dc)`, if it is still on the board.
    #[inline(always)]
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Square::new(self.row + dr, self.col + dc).ok()
    }

    /// An iterator over all 64 squares, row by row.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(b'a' + self.col as u8))?;
        f.write_char(char::from(b'8' - self.row as u8))?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a file in `a..=h` followed by a rank in `1..=8`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => {
                Square::new((b'8' - r) as i8, (f - b'a') as i8).map_err(|_| ParseSquareError)
            }

            _ => Err(ParseSquareError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_row_and_column(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), Ok(sq));
    }

    #[proptest]
    fn new_fails_if_row_out_of_bounds(#[filter(!(0..8).contains(&#r))] r: i8, #[strategy(0i8..8)] c: i8) {
        assert_eq!(Square::new(r, c), Err(OutOfBounds(r, c)));
    }

    #[proptest]
    fn new_fails_if_column_out_of_bounds(#[strategy(0i8..8)] r: i8, #[filter(!(0..8).contains(&#c))] c: i8) {
        assert_eq!(Square::new(r, c), Err(OutOfBounds(r, c)));
    }

    #[proptest]
    fn offset_stays_on_the_board(sq: Square, #[strategy(-8i8..=8)] dr: i8, #[strategy(-8i8..=8)] dc: i8) {
        match sq.offset(dr, dc) {
            Some(s) => assert_eq!((s.row() - sq.row(), s.col() - sq.col()), (dr, dc)),
            None => assert!(Square::new(sq.row() + dr, sq.col() + dc).is_err()),
        }
    }

    #[test]
    fn iter_visits_every_square_once() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn squares_are_named_from_whites_perspective() {
        assert_eq!(Square::new(6, 4).map(|s| s.to_string()), Ok("e2".into()));
        assert_eq!(Square::new(0, 0).map(|s| s.to_string()), Ok("a8".into()));
        assert_eq!(Square::new(7, 7).map(|s| s.to_string()), Ok("h1".into()));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        #[strategy(1u8..=8)] r: u8,
    ) {
        assert_eq!(format!("{c}{r}").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(
        #[strategy("[a-h]")] f: String,
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(format!("{f}{c}").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError));
    }
}
