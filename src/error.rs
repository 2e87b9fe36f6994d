//! Errors raised around the legality engine: parsing piece codes, loading
//! configuration and applying moves to a match.
//!
//! The engine itself never fails; every input resolves to a verdict.

use crate::board::{PieceId, PieceKind, Team};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// No piece with this id belongs to the match
    #[error("piece {id} not found in match")]
    PieceNotFound { id: PieceId },

    #[error("unknown team code: {0}")]
    UnknownTeam(String),

    #[error("unknown piece type code: {0}")]
    UnknownPieceKind(String),

    /// The match holds a different number of pieces of one kind than the starting layout has squares for
    #[error("cannot reset {team} {kind}: layout has {expected} squares, match has {found} pieces")]
    LayoutMismatch { team: Team, kind: PieceKind, expected: usize, found: usize },

    #[error("invalid engine config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type MatchResult<T> = Result<T, MatchError>;
