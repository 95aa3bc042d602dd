//! Board notation: eight `/`-separated ranks, rank 8 first.
//! Piece letters mark color by case; a digit 1-8 is a run of empty squares.

use super::{BitboardSet, Piece};
use crate::error::ParseError;
use crate::square::{FILE_NAMES, RANK_NAMES, Square};
use arrayvec::ArrayVec;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use tracing::debug;

impl BitboardSet {
    /// Parse board notation into a fresh set. Nothing is returned unless the
    /// whole string is valid.
    pub fn from_notation(s: &str) -> Result<Self, ParseError> {
        parse_board(s)
            .inspect_err(|e| debug!(notation = s, error = %e, "rejected board notation"))
    }

    /// Exact inverse of [`BitboardSet::from_notation`].
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(64);
        let mut empty_run = 0u8;

        for sq in Square::all() {
            if sq.file() == 0 && sq.rank() != 0 {
                flush_run(&mut out, &mut empty_run);
                out.push('/');
            }
            match self.get_piece_at(sq) {
                Some(piece) => {
                    flush_run(&mut out, &mut empty_run);
                    out.push(piece.to_char());
                }
                None => empty_run += 1,
            }
        }
        flush_run(&mut out, &mut empty_run);
        out
    }

    /// Eight-line text picture, rank 8 on top, `.` for empty squares.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(8 * 18 + 18);
        for rank in 0..8u8 {
            out.push(RANK_NAMES[rank as usize]);
            for file in 0..8u8 {
                let glyph = Square::from_file_rank(file, rank)
                    .ok()
                    .and_then(|sq| self.get_piece_at(sq))
                    .map_or('.', Piece::to_char);
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }
        out.push(' ');
        for f in FILE_NAMES {
            let _ = write!(out, " {f}");
        }
        out
    }
}

#[inline]
fn flush_run(out: &mut String, run: &mut u8) {
    if *run > 0 {
        out.push((b'0' + *run) as char);
        *run = 0;
    }
}

fn parse_board(s: &str) -> Result<BitboardSet, ParseError> {
    let mut ranks: ArrayVec<&str, 8> = ArrayVec::new();
    for group in s.split('/') {
        if ranks.try_push(group).is_err() {
            return Err(ParseError::WrongRankCount {
                found: s.split('/').count(),
            });
        }
    }
    if !ranks.is_full() {
        return Err(ParseError::WrongRankCount { found: ranks.len() });
    }

    let mut scratch = BitboardSet::empty();
    for (rank_idx, group) in ranks.iter().enumerate() {
        // Errors name the rank as a player reads it, 8 for the first group.
        let rank = 8 - rank_idx;
        let mut file: u8 = 0;
        let mut prev_digit = false;

        for c in group.chars() {
            if let Some(d) = c.to_digit(10) {
                if prev_digit {
                    return Err(ParseError::ConsecutiveDigits { rank });
                }
                if !(1..=8).contains(&d) {
                    return Err(ParseError::InvalidEmptyRun { rank, digit: c });
                }
                file += d as u8;
                if file > 8 {
                    return Err(ParseError::RankOverflow { rank });
                }
                prev_digit = true;
            } else {
                let piece = Piece::from_char(c)?;
                let sq = Square::from_file_rank(file, rank_idx as u8)
                    .map_err(|_| ParseError::RankOverflow { rank })?;
                scratch.set_piece_at(sq, Some(piece));
                file += 1;
                prev_digit = false;
            }
        }

        if file < 8 {
            return Err(ParseError::RankUnderflow { rank, files: file });
        }
    }
    Ok(scratch)
}

impl FromStr for BitboardSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitboardSet::from_notation(s)
    }
}

impl TryFrom<String> for BitboardSet {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BitboardSet::from_notation(&s)
    }
}

impl From<BitboardSet> for String {
    fn from(b: BitboardSet) -> String {
        b.to_notation()
    }
}

impl fmt::Display for BitboardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
