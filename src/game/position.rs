//! Position strings: board notation followed by five state fields,
//! e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`.

use super::GameState;
use crate::board::{BitboardSet, CastleRights, Color};
use crate::error::ParseError;
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse all six fields. The result is built on the side and only
    /// returned once every field has been accepted.
    pub fn from_position_string(s: &str) -> Result<Self, ParseError> {
        parse_position(s)
            .inspect_err(|e| debug!(position = s, error = %e, "rejected position string"))
    }

    /// Inverse of [`GameState::from_position_string`], castle letters in `KQkq` order.
    pub fn to_position_string(&self) -> String {
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), Square::name);
        format!(
            "{} {} {} {} {} {}",
            self.board.to_notation(),
            self.side_to_move.side_char(),
            self.castle_rights.to_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_position(s: &str) -> Result<GameState, ParseError> {
    let mut fields: ArrayVec<&str, 6> = ArrayVec::new();
    for field in s.split_whitespace() {
        if fields.try_push(field).is_err() {
            return Err(ParseError::WrongFieldCount {
                found: s.split_whitespace().count(),
            });
        }
    }
    let [board, side, castle, ep, halfmove, fullmove] = fields
        .into_inner()
        .map_err(|partial| ParseError::WrongFieldCount {
            found: partial.len(),
        })?;

    let board = BitboardSet::from_notation(board)?;
    let side_to_move = Color::from_side_str(side)?;
    let castle_rights = CastleRights::from_field(castle)?;
    let en_passant_target = match ep {
        "-" => None,
        name => Some(Square::from_name(name)?),
    };
    let halfmove_clock = parse_counter(halfmove)
        .ok_or_else(|| ParseError::HalfmoveClock(halfmove.to_string()))?;
    let fullmove_number = parse_counter(fullmove)
        .ok_or_else(|| ParseError::FullmoveNumber(fullmove.to_string()))?;

    Ok(GameState {
        board,
        side_to_move,
        castle_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        history: Vec::new(),
    })
}

/// Plain ASCII digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_position_string(s)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_position_string())
    }
}
