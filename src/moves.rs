// src/moves.rs

use crate::board::{CastleRights, Color, Piece};
use crate::error::ParseError;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A from/to pair. Carries no piece or flags; the board supplies those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Coordinate text such as `e2e4`.
    pub fn to_coord(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts `e2e4`, `E2E4`, `e2-e4` and `E2-E4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::InvalidMoveText(s.to_string());
        let (from, to) = match s.len() {
            4 => (s.get(0..2), s.get(2..4)),
            5 if s.as_bytes()[2] == b'-' => (s.get(0..2), s.get(3..5)),
            _ => return Err(bad()),
        };
        let from = from.ok_or_else(bad)?.parse::<Square>().map_err(|_| bad())?;
        let to = to.ok_or_else(bad)?.parse::<Square>().map_err(|_| bad())?;
        Ok(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Everything needed to take back one applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub prev_side: Color,
    pub prev_castle_rights: CastleRights,
    pub prev_en_passant: Option<Square>,
    pub prev_halfmove_clock: u32,
    pub prev_fullmove_number: u32,
}
