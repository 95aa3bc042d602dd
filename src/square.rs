//! Square type: 0..=63 indexing where A8=0, H8=7, A1=56, H1=63.
//! Files run A..H left to right, ranks are counted from the top (rank index 0 is rank 8).
//! The newtype keeps raw integers from being mistaken for board squares.

use crate::board::Color;
use crate::error::InvalidSquare;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File letters by file index.
pub const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
/// Rank digits by rank index (top to bottom).
pub const RANK_NAMES: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $idx:expr),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($idx);)*
        }
    };
}

named_squares! {
    A8 = 0,  B8 = 1,  C8 = 2,  D8 = 3,  E8 = 4,  F8 = 5,  G8 = 6,  H8 = 7,
    A7 = 8,  B7 = 9,  C7 = 10, D7 = 11, E7 = 12, F7 = 13, G7 = 14, H7 = 15,
    A6 = 16, B6 = 17, C6 = 18, D6 = 19, E6 = 20, F6 = 21, G6 = 22, H6 = 23,
    A5 = 24, B5 = 25, C5 = 26, D5 = 27, E5 = 28, F5 = 29, G5 = 30, H5 = 31,
    A4 = 32, B4 = 33, C4 = 34, D4 = 35, E4 = 36, F4 = 37, G4 = 38, H4 = 39,
    A3 = 40, B3 = 41, C3 = 42, D3 = 43, E3 = 44, F3 = 45, G3 = 46, H3 = 47,
    A2 = 48, B2 = 49, C2 = 50, D2 = 51, E2 = 52, F2 = 53, G2 = 54, H2 = 55,
    A1 = 56, B1 = 57, C1 = 58, D1 = 59, E1 = 60, F1 = 61, G1 = 62, H1 = 63,
}

impl Square {
    pub const COUNT: usize = 64;

    /// Create a square from a 0..=63 index.
    #[inline]
    pub const fn from_index(i: u8) -> Result<Square, InvalidSquare> {
        if i < 64 {
            Ok(Square(i))
        } else {
            Err(InvalidSquare::Index(i))
        }
    }

    /// Create a square from file (0=A) and rank (0=rank 8) indices.
    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Result<Square, InvalidSquare> {
        if file < 8 && rank < 8 {
            Ok(Square(rank * 8 + file))
        } else {
            Err(InvalidSquare::FileRank { file, rank })
        }
    }

    /// Parse a two-character name such as `e4` or `E4`.
    pub fn from_name(name: &str) -> Result<Square, InvalidSquare> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(InvalidSquare::Name(name.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = b'8'.wrapping_sub(bytes[1]);
        Square::from_file_rank(file, rank).map_err(|_| InvalidSquare::Name(name.to_string()))
    }

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// File index, 0 (A) to 7 (H).
    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank index counted from the top, 0 (rank 8) to 7 (rank 1).
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Light/dark parity of the square itself. A8 is a light square.
    #[inline]
    pub const fn color(self) -> Color {
        if (self.file() + self.rank()) % 2 == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Algebraic name, file letter then rank digit (`e4`).
    pub fn name(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(FILE_NAMES[self.file() as usize]);
        s.push(RANK_NAMES[self.rank() as usize]);
        s
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = InvalidSquare;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Square::from_index(i)
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl FromStr for Square {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_name(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_NAMES[self.file() as usize],
            RANK_NAMES[self.rank() as usize]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_indices() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H8.index(), 7);
        assert_eq!(Square::A1.index(), 56);
        assert_eq!(Square::H1.index(), 63);
    }

    #[test]
    fn out_of_range_is_rejected_not_wrapped() {
        assert_eq!(Square::from_index(64), Err(InvalidSquare::Index(64)));
        assert_eq!(
            Square::from_file_rank(8, 0),
            Err(InvalidSquare::FileRank { file: 8, rank: 0 })
        );
        assert!(Square::from_file_rank(0, 8).is_err());
    }

    #[test]
    fn file_rank_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_file_rank(sq.file(), sq.rank()), Ok(sq));
        }
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::E4.rank(), 4);
    }

    #[test]
    fn names() {
        assert_eq!(Square::A8.name(), "a8");
        assert_eq!(Square::H1.to_string(), "h1");
        assert_eq!(Square::from_name("E4"), Ok(Square::E4));
        assert_eq!(Square::from_name("e3"), Ok(Square::E3));
        for bad in ["", "e", "e44", "i4", "e9", "e0", "4e"] {
            assert_eq!(
                Square::from_name(bad),
                Err(InvalidSquare::Name(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn parity() {
        assert_eq!(Square::A8.color(), Color::Light);
        assert_eq!(Square::H1.color(), Color::Light);
        assert_eq!(Square::A1.color(), Color::Dark);
        assert_eq!(Square::E4.color(), Color::Light);
    }
}
