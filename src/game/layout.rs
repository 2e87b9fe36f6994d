use crate::board::{Piece, PieceKind, Square, Team};

const WHITE_PAWNS: [(u8, u8); 8] = [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7)];
const BLACK_PAWNS: [(u8, u8); 8] = [(6, 0), (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7)];

/// Home squares indexed by team then kind, in the order pieces of that kind are dealt.
pub static HOME_SQUARES: [[&[(u8, u8)]; 6]; 2] = [
    // White: pawn, rook, knight, bishop, queen, king
    [&WHITE_PAWNS, &[(0, 0), (0, 7)], &[(0, 1), (0, 6)], &[(0, 2), (0, 5)], &[(0, 3)], &[(0, 4)]],
    // Black
    [&BLACK_PAWNS, &[(7, 0), (7, 7)], &[(7, 1), (7, 6)], &[(7, 2), (7, 5)], &[(7, 4)], &[(7, 3)]],
];

pub fn home_squares(team: Team, kind: PieceKind) -> impl Iterator<Item = Square> {
    HOME_SQUARES[team][kind].iter().map(|&(row, column)| Square { row, column })
}

/// The 32 pieces of a fresh match, ids 1 to 32.
pub fn standard_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    let mut deal = |team: Team, kind: PieceKind, square: Square| {
        let id = pieces.len() as u32 + 1;
        pieces.push(Piece::new(id, team, kind, square));
    };

    for (black, white) in home_squares(Team::Black, PieceKind::Pawn).zip(home_squares(Team::White, PieceKind::Pawn)) {
        deal(Team::Black, PieceKind::Pawn, black);
        deal(Team::White, PieceKind::Pawn, white);
    }
    for kind in [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen, PieceKind::King] {
        for team in [Team::Black, Team::White] {
            for square in home_squares(team, kind) {
                deal(team, kind, square);
            }
        }
    }
    pieces
}
