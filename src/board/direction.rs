use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::board::Team;

// Opposite directions sit at mirrored positions, so `opposite` is `7 - index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Direction {
    North,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    East,
    South,
}

// (row, column) per direction; north is towards increasing row.
const DIRECTION_DELTAS: [(i8, i8); 8] = [(1, 0), (0, -1), (1, -1), (1, 1), (-1, -1), (-1, 1), (0, 1), (-1, 0)];

impl Direction {
    pub const fn delta(self) -> (i8, i8) {
        DIRECTION_DELTAS[self as usize]
    }
    pub const fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::West,
            Direction::NorthWest,
            Direction::NorthEast,
            Direction::SouthWest,
            Direction::SouthEast,
            Direction::East,
            Direction::South,
        ]
    }
    pub const fn vertical() -> [Direction; 2] {
        [Direction::North, Direction::South]
    }
    pub const fn horizontal() -> [Direction; 2] {
        [Direction::West, Direction::East]
    }
    pub const fn diagonal() -> [Direction; 4] {
        [Direction::NorthWest, Direction::NorthEast, Direction::SouthWest, Direction::SouthEast]
    }
    pub fn opposite(self) -> Direction {
        Direction::try_from(7 - u8::from(self)).unwrap_or(self)
    }
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
    /// The way a team's pawns advance.
    pub fn forward(team: Team) -> Direction {
        match team {
            Team::White => Direction::North,
            Team::Black => Direction::South,
        }
    }
    /// The two diagonals a team's pawns capture along.
    pub fn forward_diagonals(team: Team) -> [Direction; 2] {
        match team {
            Team::White => [Direction::NorthWest, Direction::NorthEast],
            Team::Black => [Direction::SouthWest, Direction::SouthEast],
        }
    }
}
