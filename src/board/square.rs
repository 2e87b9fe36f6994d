use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const BOARD_SIZE: u8 = 8;

/// A square on the board. Row 0 is White's back rank, column 0 the left edge
/// seen from White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub column: u8,
}

impl Square {
    /// Coerces integer coordinates into a square, `None` when either is off the board.
    pub fn new(row: impl Into<i64>, column: impl Into<i64>) -> Option<Square> {
        let row = u8::try_from(row.into()).ok()?;
        let column = u8::try_from(column.into()).ok()?;
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Square { row, column })
        } else {
            None
        }
    }
    pub const fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
    pub const fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.column as usize
    }
    pub fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square {
                row: index as u8 / BOARD_SIZE,
                column: index as u8 % BOARD_SIZE,
            })
        } else {
            None
        }
    }
    /// The square `steps` away along `direction`, or `None` past the edge.
    pub fn offset(&self, direction: Direction, steps: i64) -> Option<Square> {
        let (row_delta, column_delta) = direction.delta();
        Square::new(self.row as i64 + row_delta as i64 * steps, self.column as i64 + column_delta as i64 * steps)
    }
    pub fn jump(&self, row_delta: i8, column_delta: i8) -> Option<Square> {
        Square::new(self.row as i64 + row_delta as i64, self.column as i64 + column_delta as i64)
    }
    pub fn squares_to_edge(&self, direction: Direction) -> u8 {
        let (row_delta, column_delta) = direction.delta();
        let limit = |position: u8, delta: i8| match delta {
            1 => (BOARD_SIZE - 1).saturating_sub(position),
            -1 => position,
            _ => u8::MAX,
        };
        limit(self.row, row_delta).min(limit(self.column, column_delta))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_coordinates_off_the_board() {
        assert_eq!(Square::new(3, 4), Some(Square { row: 3, column: 4 }));
        assert_eq!(Square::new(-1, 4), None);
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::new(300i64, 2), None);
        assert!(!Square { row: 0, column: 9 }.is_on_board());
        assert!(Square { row: 7, column: 7 }.is_on_board());
    }
    #[test]
    fn squares_to_edge() {
        let square = Square { row: 3, column: 3 };
        assert_eq!(square.squares_to_edge(Direction::North), 4);
        assert_eq!(square.squares_to_edge(Direction::SouthWest), 3);
        assert_eq!(Square { row: 0, column: 6 }.squares_to_edge(Direction::NorthEast), 1);
    }
    #[test]
    fn index_round_trips() {
        for index in 0..64 {
            assert_eq!(Square::from_index(index).map(|square| square.index()), Some(index));
        }
        assert_eq!(Square::from_index(64), None);
    }
}
