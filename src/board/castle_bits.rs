// src/board/castle_bits.rs

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Underlying bit type for castling rights.
pub type CastleBits = u8;

pub const CASTLE_LK: CastleBits = 0b0001;
pub const CASTLE_LQ: CastleBits = 0b0010;
pub const CASTLE_DK: CastleBits = 0b0100;
pub const CASTLE_DQ: CastleBits = 0b1000;

/// Canonical render order: light king, light queen, dark king, dark queen.
const FIELD_ORDER: [(CastleBits, char); 4] = [
    (CASTLE_LK, 'K'),
    (CASTLE_LQ, 'Q'),
    (CASTLE_DK, 'k'),
    (CASTLE_DQ, 'q'),
];

/// Set of the four castling rights. Tracked only; castling itself is never executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastleRights(CastleBits);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(CASTLE_LK | CASTLE_LQ | CASTLE_DK | CASTLE_DQ);
    pub const LIGHT_KINGSIDE: CastleRights = CastleRights(CASTLE_LK);
    pub const LIGHT_QUEENSIDE: CastleRights = CastleRights(CASTLE_LQ);
    pub const DARK_KINGSIDE: CastleRights = CastleRights(CASTLE_DK);
    pub const DARK_QUEENSIDE: CastleRights = CastleRights(CASTLE_DQ);

    #[inline(always)]
    pub const fn bits(self) -> CastleBits {
        self.0
    }

    #[inline(always)]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: CastleRights) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: CastleRights) {
        self.0 &= !other.0;
    }

    /// Parse the castling field: `-` or any arrangement of `KQkq` without repeats.
    pub fn from_field(field: &str) -> Result<Self, ParseError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut bits: CastleBits = 0;
        for c in field.chars() {
            let flag = FIELD_ORDER
                .iter()
                .find(|&&(_, g)| g == c)
                .map(|&(flag, _)| flag)
                .ok_or(ParseError::UnknownCastleChar(c))?;
            if bits & flag != 0 {
                return Err(ParseError::DuplicateCastleRight(c));
            }
            bits |= flag;
        }
        // An empty field is not a valid spelling of "no rights".
        if bits == 0 {
            return Err(ParseError::UnknownCastleChar('-'));
        }
        Ok(CastleRights(bits))
    }

    /// Render in canonical order, `-` when empty.
    pub fn to_field(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        FIELD_ORDER
            .iter()
            .filter(|&&(flag, _)| self.0 & flag != 0)
            .map(|&(_, c)| c)
            .collect()
    }
}

impl std::ops::BitOr for CastleRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        CastleRights(self.0 | rhs.0)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}
