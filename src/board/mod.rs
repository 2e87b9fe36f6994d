pub mod bitboard;
pub mod direction;
pub mod piece;
pub mod snapshot;
pub mod square;

pub use bitboard::Bitboard;
pub use direction::Direction;
pub use piece::{Piece, PieceId, PieceKind, Team};
pub use snapshot::{BoardView, Snapshot};
pub use square::Square;
