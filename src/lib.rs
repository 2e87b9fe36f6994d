pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod legality;

pub use board::{BoardView, Piece, PieceId, PieceKind, Snapshot, Square, Team};
pub use config::{EngineConfig, Fallback, RuleSet};
pub use error::{MatchError, MatchResult};
pub use game::{ChessMatch, MoveOutcome};
pub use legality::{check_move, Verdict};
