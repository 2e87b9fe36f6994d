use super::layout::{home_squares, standard_pieces, HOME_SQUARES};
use crate::board::{BoardView, Piece, PieceId, PieceKind, Snapshot, Square, Team};
use crate::config::EngineConfig;
use crate::error::{MatchError, MatchResult};
use crate::legality::{candidates, check_move, Candidates, Verdict};
use serde::Serialize;
use std::fmt::Display;
use tracing::{info, warn};

/// What the players of a match are told after a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub id: PieceId,
    pub team: Team,
    pub piece_type: PieceKind,
    pub row: u8,
    pub column: u8,
    pub move_count: u32,
    pub move_valid: bool,
    pub captured_piece: Option<PieceId>,
}

impl MoveOutcome {
    fn new(piece: &Piece, verdict: Verdict) -> Self {
        Self {
            id: piece.id,
            team: piece.team,
            piece_type: piece.kind,
            row: piece.square.row,
            column: piece.square.column,
            move_count: piece.move_count,
            move_valid: verdict.legal,
            captured_piece: verdict.captured,
        }
    }
}

/// The authoritative piece store of one match. Moves are checked against a
/// snapshot and applied here; `&mut self` keeps one application in flight.
#[derive(Debug, Clone)]
pub struct ChessMatch {
    pieces: Vec<Piece>,
    config: EngineConfig,
}

impl ChessMatch {
    pub fn new(config: EngineConfig) -> Self {
        Self::from_pieces(standard_pieces(), config)
    }
    pub fn from_pieces(pieces: Vec<Piece>, config: EngineConfig) -> Self {
        Self { pieces, config }
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Any piece of the match, captured or not.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.pieces)
    }
    pub fn candidates(&self, id: PieceId) -> MatchResult<Candidates> {
        let piece = self.piece(id).ok_or(MatchError::PieceNotFound { id })?;
        Ok(candidates(&self.snapshot(), piece))
    }
    /// Non-captured pieces left per kind.
    pub fn material(&self, team: Team) -> [usize; 6] {
        let snapshot = self.snapshot();
        let mut material = [0; 6];
        for kind in PieceKind::all() {
            material[kind] = snapshot.pieces_of(team, kind).count();
        }
        material
    }

    /// Checks the move and, when legal, moves the piece, bumps its move count
    /// and marks the captured piece.
    pub fn move_piece(&mut self, id: PieceId, row: impl Into<i64>, column: impl Into<i64>) -> MatchResult<MoveOutcome> {
        let index = self.pieces.iter().position(|piece| piece.id == id).ok_or(MatchError::PieceNotFound { id })?;
        let (row, column) = (row.into(), column.into());
        let verdict = check_move(&self.snapshot(), &self.pieces[index], row, column, &self.config);

        if let Some(destination) = Square::new(row, column).filter(|_| verdict.legal) {
            let mover = &self.pieces[index];
            if let Some(friend) = self.snapshot().occupant(destination, None).filter(|friend| friend.team == mover.team && friend.id != id) {
                warn!(piece = %id, kind = %mover.kind, %destination, sharing = %friend.id, "fallback move lands on a friendly piece");
            }
            if let Some(captured) = verdict.captured {
                if let Some(piece) = self.pieces.iter_mut().find(|piece| piece.id == captured) {
                    piece.captured = true;
                }
            }
            let piece = &mut self.pieces[index];
            piece.square = destination;
            piece.move_count += 1;
            info!(piece = %id, kind = %piece.kind, %destination, captured = ?verdict.captured, "moved piece");
        }
        Ok(MoveOutcome::new(&self.pieces[index], verdict))
    }

    /// Puts every piece back on its home square with a clean history.
    pub fn reset(&mut self) -> MatchResult<()> {
        for team in [Team::White, Team::Black] {
            for kind in PieceKind::all() {
                let expected = HOME_SQUARES[team][kind].len();
                let found = self.pieces.iter().filter(|piece| piece.team == team && piece.kind == kind).count();
                if expected != found {
                    return Err(MatchError::LayoutMismatch { team, kind, expected, found });
                }
            }
        }

        self.pieces.sort_by_key(|piece| piece.id);
        for team in [Team::White, Team::Black] {
            for kind in PieceKind::all() {
                let pieces = self.pieces.iter_mut().filter(|piece| piece.team == team && piece.kind == kind);
                for (piece, home) in pieces.zip(home_squares(team, kind)) {
                    piece.square = home;
                    piece.move_count = 0;
                    piece.captured = false;
                }
            }
        }
        info!(pieces = self.pieces.len(), "reset match");
        Ok(())
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Display for ChessMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        for row in (0..8u8).rev() {
            write!(f, "{}", row)?;
            for column in 0..8u8 {
                match snapshot.occupant(Square { row, column }, None) {
                    Some(piece) => write!(f, " {}", piece.char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for column in 0..8 {
            write!(f, " {}", column)?;
        }
        Ok(())
    }
}
