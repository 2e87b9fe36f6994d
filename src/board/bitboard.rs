use crate::board::square::Square;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::ops::Deref;

/// One bit per square, bit `row * 8 + column`.
#[derive(BitOrAssign, BitAndAssign, BitXorAssign, BitAnd, BitOr, BitXor, Not, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub fn from_square(square: Square) -> Self {
        Self(1 << square.index())
    }

    pub fn bit(&self, n: usize) -> u64 {
        (self.0 >> n) & 1
    }
    pub fn set_bit(&mut self, n: usize) {
        self.0 |= 1 << n;
    }
    pub fn clear_bit(&mut self, n: usize) {
        self.0 &= !(1 << n);
    }
    pub fn contains(&self, square: Square) -> bool {
        square.is_on_board() && self.bit(square.index()) != 0
    }
    pub fn insert(&mut self, square: Square) {
        self.set_bit(square.index());
    }
    pub fn lsb(&self) -> usize {
        self.trailing_zeros() as usize
    }
    pub fn pop_lsb(&mut self) -> usize {
        let index = self.lsb();
        self.clear_bit(index);
        index
    }
    pub fn squares(self) -> impl Iterator<Item = Square> {
        self.filter_map(Square::from_index)
    }
}
impl Iterator for Bitboard {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.pop_lsb();
        Some(index)
    }
}
impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bitboard = Bitboard::EMPTY;
        for square in iter {
            bitboard.insert(square);
        }
        bitboard
    }
}
impl Deref for Bitboard {
    type Target = u64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl PartialEq<u64> for Bitboard {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}
