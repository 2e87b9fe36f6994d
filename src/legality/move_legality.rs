use super::rays::{diagonal_squares, orthogonal_squares, walk_ray, walk_rays};
use crate::board::{Bitboard, BoardView, Direction, Piece, PieceId, PieceKind, Square, Team};
use crate::config::{EngineConfig, Fallback};
use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, trace};

const KNIGHT_JUMPS: [(i8, i8); 8] = [(2, -1), (2, 1), (-2, -1), (-2, 1), (1, -2), (-1, -2), (1, 2), (-1, 2)];
const FULL_RAY: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Verdict {
    pub legal: bool,
    /// The enemy piece removed by the move, if any.
    pub captured: Option<PieceId>,
}

impl Verdict {
    pub const ILLEGAL: Verdict = Verdict { legal: false, captured: None };

    fn legal(captured: Option<PieceId>) -> Verdict {
        Verdict { legal: true, captured }
    }
}

/// Every destination a piece may reach, plus the pawn each en-passant
/// destination would take.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub squares: Bitboard,
    pub en_passant: ArrayVec<(Square, PieceId), 2>,
}

impl Candidates {
    // An enemy standing on the destination is taken before any en-passant pawn.
    fn captured_at<B: BoardView>(&self, board: &B, team: Team, destination: Square) -> Option<PieceId> {
        board
            .occupant(destination, Some(team))
            .map(|occupant| occupant.id)
            .or_else(|| self.en_passant.iter().find(|(target, _)| *target == destination).map(|(_, id)| *id))
    }
}

impl From<Bitboard> for Candidates {
    fn from(squares: Bitboard) -> Self {
        Candidates { squares, ..Default::default() }
    }
}

/// Decides whether `piece` may move to (`row`, `column`) on `board`.
///
/// Never fails: coordinates off the board, or a piece that is not on the
/// board, give an illegal verdict. Kinds outside `config.rules` follow
/// `config.fallback`.
pub fn check_move<B: BoardView>(board: &B, piece: &Piece, row: impl Into<i64>, column: impl Into<i64>, config: &EngineConfig) -> Verdict {
    let Some(destination) = Square::new(row, column) else {
        debug!(piece = %piece.id, "destination off the board");
        return Verdict::ILLEGAL;
    };
    if !piece.square.is_on_board() || board.piece(piece.id).is_none() {
        debug!(piece = %piece.id, "piece not on the board");
        return Verdict::ILLEGAL;
    }

    let verdict = if config.rules.covers(piece.kind) {
        let candidates = candidates(board, piece);
        trace!(piece = %piece.id, kind = %piece.kind, squares = candidates.squares.0, "candidate squares");
        if candidates.squares.contains(destination) {
            Verdict::legal(candidates.captured_at(board, piece.team, destination))
        } else {
            Verdict::ILLEGAL
        }
    } else {
        match config.fallback {
            Fallback::Allow => Verdict::legal(board.occupant(destination, Some(piece.team)).map(|occupant| occupant.id)),
            Fallback::Deny => Verdict::ILLEGAL,
        }
    };

    debug!(piece = %piece.id, kind = %piece.kind, %destination, legal = verdict.legal, captured = ?verdict.captured, "checked move");
    verdict
}

/// Candidate destinations under the full rule for the piece's kind.
pub fn candidates<B: BoardView>(board: &B, piece: &Piece) -> Candidates {
    match piece.kind {
        PieceKind::Pawn => pawn_candidates(board, piece),
        PieceKind::Bishop => diagonal_squares(board, piece, FULL_RAY).into(),
        PieceKind::Rook => orthogonal_squares(board, piece, FULL_RAY).into(),
        PieceKind::Queen => (orthogonal_squares(board, piece, FULL_RAY) | diagonal_squares(board, piece, FULL_RAY)).into(),
        PieceKind::Knight => knight_squares(board, piece).into(),
        PieceKind::King => walk_rays(board, piece, &Direction::all(), 1).into(),
    }
}

fn pawn_candidates<B: BoardView>(board: &B, pawn: &Piece) -> Candidates {
    let forward = Direction::forward(pawn.team);
    let steps = if pawn.move_count == 0 { 2 } else { 1 };
    let mut candidates = Candidates::from(walk_ray(board, pawn, forward, steps));

    for diagonal in Direction::forward_diagonals(pawn.team) {
        if let Some(square) = pawn.square.offset(diagonal, 1) {
            if board.occupant(square, Some(pawn.team)).is_some() {
                candidates.squares.insert(square);
            }
        }
    }

    if pawn.square.row == pawn.team.en_passant_row() {
        for side in Direction::horizontal() {
            let Some(alongside) = pawn.square.offset(side, 1) else {
                continue;
            };
            let double_stepped = board
                .occupant(alongside, Some(pawn.team))
                .filter(|enemy| enemy.kind == PieceKind::Pawn && enemy.move_count == 1);
            // the square the enemy pawn skipped over, behind it from its own side
            let behind = Direction::forward(pawn.team.enemy()).opposite();
            let target = alongside.offset(behind, 1).filter(|target| board.occupant(*target, None).is_none());
            if let (Some(enemy), Some(target)) = (double_stepped, target) {
                candidates.squares.insert(target);
                candidates.en_passant.push((target, enemy.id));
            }
        }
    }
    candidates
}

fn knight_squares<B: BoardView>(board: &B, knight: &Piece) -> Bitboard {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|(row, column)| knight.square.jump(*row, *column))
        .filter(|square| board.occupant(*square, None).map_or(true, |occupant| occupant.team != knight.team))
        .collect()
}
