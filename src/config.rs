use crate::board::PieceKind;
use crate::error::MatchResult;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::path::Path;

bitflags! {
    /// Piece kinds whose full movement rule is enforced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RuleSet: u8 {
        const PAWN = 1 << 0;
        const ROOK = 1 << 1;
        const KNIGHT = 1 << 2;
        const BISHOP = 1 << 3;
        const QUEEN = 1 << 4;
        const KING = 1 << 5;

        /// Pawn and bishop checks only; every other kind goes to the fallback.
        const REFERENCE = Self::PAWN.bits() | Self::BISHOP.bits();
    }
}

impl RuleSet {
    pub fn of(kind: PieceKind) -> RuleSet {
        match kind {
            PieceKind::Pawn => RuleSet::PAWN,
            PieceKind::Rook => RuleSet::ROOK,
            PieceKind::Knight => RuleSet::KNIGHT,
            PieceKind::Bishop => RuleSet::BISHOP,
            PieceKind::Queen => RuleSet::QUEEN,
            PieceKind::King => RuleSet::KING,
        }
    }
    pub fn covers(&self, kind: PieceKind) -> bool {
        self.contains(RuleSet::of(kind))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::REFERENCE
    }
}

/// What happens to a piece kind that is not in the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Any on-board destination is accepted.
    #[default]
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: RuleSet,
    pub fallback: Fallback,
}

impl EngineConfig {
    /// Every kind checked, nothing allowed by default.
    pub fn complete() -> Self {
        Self {
            rules: RuleSet::all(),
            fallback: Fallback::Deny,
        }
    }
    pub fn from_toml_str(s: &str) -> MatchResult<Self> {
        Ok(toml::from_str(s)?)
    }
    pub fn load(path: impl AsRef<Path>) -> MatchResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
