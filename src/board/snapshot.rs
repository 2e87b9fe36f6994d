use super::bitboard::Bitboard;
use super::piece::{Piece, PieceId, PieceKind, Team};
use super::square::Square;
use tracing::warn;

/// Read access to the pieces of one match at one instant.
pub trait BoardView {
    /// The non-captured, on-board piece with this id.
    fn piece(&self, id: PieceId) -> Option<&Piece>;
    /// The non-captured piece on `square`. With `enemies_of` set, only a
    /// piece of the other team counts.
    fn occupant(&self, square: Square, enemies_of: Option<Team>) -> Option<&Piece>;
    fn pieces_of(&self, team: Team, kind: PieceKind) -> impl Iterator<Item = &Piece> + '_;
}

/// Indexed, borrowed view over a piece list. Captured pieces and pieces
/// whose coordinates fall off the board are left out of every index.
pub struct Snapshot<'a> {
    pieces: &'a [Piece],
    squares: [Option<usize>; 64],
    pub occupied_squares: Bitboard,
}

impl<'a> Snapshot<'a> {
    pub fn new(pieces: &'a [Piece]) -> Self {
        let mut snapshot = Snapshot {
            pieces,
            squares: [None; 64],
            occupied_squares: Bitboard::EMPTY,
        };
        for (index, piece) in pieces.iter().enumerate().filter(|(_, piece)| !piece.captured) {
            if !piece.square.is_on_board() {
                warn!(piece = %piece.id, square = %piece.square, "piece is off the board");
                continue;
            }
            let square = piece.square.index();
            if let Some(other) = snapshot.squares[square] {
                warn!(square = %piece.square, kept = %pieces[other].id, ignored = %piece.id, "two pieces share a square");
                continue;
            }
            snapshot.squares[square] = Some(index);
            snapshot.occupied_squares.set_bit(square);
        }
        snapshot
    }
    pub fn len(&self) -> usize {
        self.occupied_squares.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.occupied_squares == 0
    }
}

impl BoardView for Snapshot<'_> {
    fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id && is_indexed(piece))
    }
    fn occupant(&self, square: Square, enemies_of: Option<Team>) -> Option<&Piece> {
        if !square.is_on_board() {
            return None;
        }
        let piece = &self.pieces[(*self.squares.get(square.index())?)?];
        match enemies_of {
            Some(team) if piece.team == team => None,
            _ => Some(piece),
        }
    }
    fn pieces_of(&self, team: Team, kind: PieceKind) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| is_indexed(piece) && piece.team == team && piece.kind == kind)
    }
}

fn is_indexed(piece: &Piece) -> bool {
    !piece.captured && piece.square.is_on_board()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(row: u8, column: u8) -> Square {
        Square { row, column }
    }

    #[test]
    fn captured_pieces_are_not_occupants() {
        let mut captured = Piece::new(2, Team::Black, PieceKind::Pawn, square(2, 2));
        captured.captured = true;
        let pieces = [Piece::new(1, Team::White, PieceKind::Pawn, square(1, 1)), captured];
        let snapshot = Snapshot::new(&pieces);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.occupant(square(2, 2), None).is_none());
        assert!(snapshot.piece(PieceId(2)).is_none());
        assert_eq!(snapshot.pieces_of(Team::Black, PieceKind::Pawn).count(), 0);
    }
    #[test]
    fn enemy_filter() {
        let pieces = [Piece::new(1, Team::White, PieceKind::Rook, square(0, 0)), Piece::new(2, Team::Black, PieceKind::Rook, square(7, 0))];
        let snapshot = Snapshot::new(&pieces);

        assert_eq!(snapshot.occupant(square(0, 0), None).map(|piece| piece.id), Some(PieceId(1)));
        assert!(snapshot.occupant(square(0, 0), Some(Team::Black)).is_none());
        assert_eq!(snapshot.occupant(square(0, 0), Some(Team::White)).map(|piece| piece.id), Some(PieceId(1)));
        assert_eq!(snapshot.occupant(square(7, 0), Some(Team::White)).map(|piece| piece.id), Some(PieceId(2)));
        assert!(snapshot.occupant(square(4, 4), None).is_none());
    }
    #[test]
    fn first_piece_wins_a_shared_square() {
        let pieces = [Piece::new(1, Team::White, PieceKind::Queen, square(3, 3)), Piece::new(2, Team::Black, PieceKind::Queen, square(3, 3))];
        let snapshot = Snapshot::new(&pieces);
        assert_eq!(snapshot.occupant(square(3, 3), None).map(|piece| piece.id), Some(PieceId(1)));
        assert_eq!(snapshot.len(), 1);
    }
    #[test]
    fn off_board_coordinates_do_not_alias() {
        // (0, 9) and (8, 0) flatten to the indices of (1, 1) and a past-the-end square
        let pieces = [
            Piece::new(1, Team::White, PieceKind::Pawn, square(0, 0)),
            Piece::new(2, Team::Black, PieceKind::Rook, square(0, 9)),
            Piece::new(3, Team::Black, PieceKind::Pawn, square(8, 0)),
        ];
        let snapshot = Snapshot::new(&pieces);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.occupant(square(1, 1), None).is_none());
        assert!(snapshot.occupant(square(0, 9), None).is_none());
        assert!(snapshot.piece(PieceId(2)).is_none());
        assert!(snapshot.piece(PieceId(3)).is_none());
        assert_eq!(snapshot.pieces_of(Team::Black, PieceKind::Rook).count(), 0);
    }
    #[test]
    fn empty_snapshot() {
        let snapshot = Snapshot::new(&[]);
        assert!(snapshot.is_empty());
        assert!(snapshot.piece(PieceId(1)).is_none());
    }
}
