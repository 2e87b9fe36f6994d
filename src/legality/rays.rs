use crate::board::{Bitboard, BoardView, Direction, Piece, PieceKind};

/// Walks from `piece` along `direction` for up to `max_steps` squares.
///
/// Empty squares are included. The first occupied square ends the walk; it
/// is included when it holds an enemy, except on a pawn's vertical walk,
/// since pawns never capture straight ahead.
pub fn walk_ray<B: BoardView>(board: &B, piece: &Piece, direction: Direction, max_steps: u8) -> Bitboard {
    let mut ray = Bitboard::EMPTY;
    let steps = max_steps.min(piece.square.squares_to_edge(direction));
    for step in 1..=steps {
        let Some(square) = piece.square.offset(direction, step as i64) else {
            break;
        };
        match board.occupant(square, None) {
            None => ray.insert(square),
            Some(occupant) => {
                let blocks_capture = piece.kind == PieceKind::Pawn && direction.is_vertical();
                if occupant.team != piece.team && !blocks_capture {
                    ray.insert(square);
                }
                break;
            }
        }
    }
    ray
}

pub(crate) fn walk_rays<B: BoardView>(board: &B, piece: &Piece, directions: &[Direction], max_steps: u8) -> Bitboard {
    directions.iter().fold(Bitboard::EMPTY, |squares, direction| squares | walk_ray(board, piece, *direction, max_steps))
}

pub fn vertical_squares<B: BoardView>(board: &B, piece: &Piece, max_steps: u8) -> Bitboard {
    walk_rays(board, piece, &Direction::vertical(), max_steps)
}

pub fn horizontal_squares<B: BoardView>(board: &B, piece: &Piece, max_steps: u8) -> Bitboard {
    walk_rays(board, piece, &Direction::horizontal(), max_steps)
}

pub fn diagonal_squares<B: BoardView>(board: &B, piece: &Piece, max_steps: u8) -> Bitboard {
    walk_rays(board, piece, &Direction::diagonal(), max_steps)
}

pub fn orthogonal_squares<B: BoardView>(board: &B, piece: &Piece, max_steps: u8) -> Bitboard {
    vertical_squares(board, piece, max_steps) | horizontal_squares(board, piece, max_steps)
}
