use crate::board::square::Square;
use crate::error::MatchError;
use derive_more::{Display, From};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black,
}

impl Team {
    pub fn enemy(&self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
    /// The row this team's pawns stand on when an enemy pawn has just
    /// double-stepped alongside them.
    pub fn en_passant_row(&self) -> u8 {
        match self {
            Team::White => 4,
            Team::Black => 3,
        }
    }
}

impl FromStr for Team {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "W" | "WHITE" => Ok(Team::White),
            "B" | "BLACK" => Ok(Team::Black),
            _ => Err(MatchError::UnknownTeam(s.to_string())),
        }
    }
}

impl<T, const N: usize> Index<Team> for [T; N] {
    type Output = T;

    fn index(&self, index: Team) -> &Self::Output {
        &self[index as usize]
    }
}
impl<T, const N: usize> IndexMut<Team> for [T; N] {
    fn index_mut(&mut self, index: Team) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn all() -> [PieceKind; 6] {
        [PieceKind::Pawn, PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen, PieceKind::King]
    }
    pub fn char(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl FromStr for PieceKind {
    type Err = MatchError;

    // Accepts both the short codes stored per piece ("P", "KN", "KI", ...) and full names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P" | "PAWN" => Ok(PieceKind::Pawn),
            "R" | "ROOK" => Ok(PieceKind::Rook),
            "KN" | "N" | "KNIGHT" => Ok(PieceKind::Knight),
            "B" | "BISHOP" => Ok(PieceKind::Bishop),
            "Q" | "QUEEN" => Ok(PieceKind::Queen),
            "KI" | "K" | "KING" => Ok(PieceKind::King),
            _ => Err(MatchError::UnknownPieceKind(s.to_string())),
        }
    }
}

impl<T, const N: usize> Index<PieceKind> for [T; N] {
    type Output = T;

    fn index(&self, index: PieceKind) -> &Self::Output {
        &self[index as usize]
    }
}
impl<T, const N: usize> IndexMut<PieceKind> for [T; N] {
    fn index_mut(&mut self, index: PieceKind) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

/// A piece of one match. Captured pieces stay in the store with `captured`
/// set and are invisible to occupancy lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub team: Team,
    #[serde(rename = "piece_type")]
    pub kind: PieceKind,
    #[serde(flatten)]
    pub square: Square,
    pub move_count: u32,
    pub captured: bool,
}

impl Piece {
    pub fn new(id: u32, team: Team, kind: PieceKind, square: Square) -> Piece {
        Piece {
            id: PieceId(id),
            team,
            kind,
            square,
            move_count: 0,
            captured: false,
        }
    }
    pub fn with_move_count(mut self, move_count: u32) -> Piece {
        self.move_count = move_count;
        self
    }
    pub fn char(&self) -> char {
        match self.team {
            Team::White => self.kind.char().to_ascii_uppercase(),
            Team::Black => self.kind.char(),
        }
    }
}
