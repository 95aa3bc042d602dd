// src/board/piece.rs

use super::fen_tables::{CHAR_TO_PIECE, PIECE_TO_CHAR};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides. Light moves first and is written in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Light,
    Dark,
}

/// Kind of a piece. An empty square has no kind (`Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A kind together with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Slot in per-color arrays.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side-to-move letter of a position string.
    pub const fn side_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }

    pub fn from_side_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "w" => Ok(Color::Light),
            "b" => Ok(Color::Dark),
            _ => Err(ParseError::UnknownSide(s.to_string())),
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase symbol.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Kind for a symbol in either case.
    pub fn from_symbol(c: char) -> Option<Self> {
        Piece::from_char(c).ok().map(|p| p.kind)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Piece {
    #[inline(always)]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Uppercase letters are light, lowercase dark.
    pub fn from_char(c: char) -> Result<Self, ParseError> {
        if !c.is_ascii() {
            return Err(ParseError::UnknownPieceChar(c));
        }
        CHAR_TO_PIECE[c as usize].ok_or(ParseError::UnknownPieceChar(c))
    }

    #[inline]
    pub const fn to_char(self) -> char {
        PIECE_TO_CHAR[self.color.index() * 6 + self.kind.index()]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::Light, Color::Dark);
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(!!Color::Dark, Color::Dark);
    }

    #[test]
    fn char_roundtrip_all_twelve() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let p = Piece::new(kind, color);
                assert_eq!(Piece::from_char(p.to_char()), Ok(p));
            }
        }
    }

    #[test]
    fn case_marks_color() {
        assert_eq!(
            Piece::from_char('K'),
            Ok(Piece::new(PieceKind::King, Color::Light))
        );
        assert_eq!(
            Piece::from_char('n'),
            Ok(Piece::new(PieceKind::Knight, Color::Dark))
        );
        assert_eq!(PieceKind::Queen.symbol(), 'q');
        assert_eq!(PieceKind::from_symbol('R'), Some(PieceKind::Rook));
    }

    #[test]
    fn unknown_letters_fail() {
        for c in ['x', 'Z', '1', '/', ' ', 'é'] {
            assert_eq!(Piece::from_char(c), Err(ParseError::UnknownPieceChar(c)));
        }
    }

    #[test]
    fn kinds_hash_by_value() {
        use std::collections::HashSet;
        let set: HashSet<PieceKind> = PieceKind::ALL.iter().rev().copied().collect();
        assert_eq!(set.len(), 6);
        assert!(set.contains(&PieceKind::Bishop));
    }
}
