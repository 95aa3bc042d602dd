//! Helpers on raw `u64` masks. Bit `i` corresponds to `Square` index `i` (A8=bit 0 … H1=bit 63).

use crate::square::Square;

/// Single-bit mask for `sq`.
#[inline(always)]
pub const fn bit(sq: Square) -> u64 {
    1u64 << sq.index()
}

pub trait BitboardExt: Copy {
    /// True if the bit for `sq` is set.
    fn has(self, sq: Square) -> bool;
    /// Index (0..=63) of the least-significant set bit. Meaningless on an empty mask.
    fn lsb(self) -> u8;
    /// Return the least-significant set square and clear it.
    fn pop_lsb(&mut self) -> Option<Square>;
    /// Iterate set squares in ascending index order.
    fn squares(self) -> Squares;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn has(self, sq: Square) -> bool {
        self & bit(sq) != 0
    }

    #[inline(always)]
    fn lsb(self) -> u8 {
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn pop_lsb(&mut self) -> Option<Square> {
        if *self == 0 {
            return None;
        }
        let idx = self.lsb();
        *self &= *self - 1;
        Square::from_index(idx).ok()
    }

    #[inline]
    fn squares(self) -> Squares {
        Squares(self)
    }
}

/// Iterator over the set squares of a mask.
#[derive(Debug, Clone)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}
