pub mod chess_match;
pub mod layout;

pub use chess_match::{ChessMatch, MoveOutcome};
