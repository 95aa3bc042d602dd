// src/error.rs
// Caller-facing error types. Nothing in here is recoverable by retrying.

use crate::board::Color;
use crate::square::Square;
use thiserror::Error;

/// A square index, file/rank pair or name outside the 8x8 board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSquare {
    #[error("square index {0} is outside 0..63")]
    Index(u8),
    #[error("file {file} / rank {rank} is outside 0..7")]
    FileRank { file: u8, rank: u8 },
    #[error("malformed square name `{0}`")]
    Name(String),
}

/// Malformed board notation, position string or move text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    #[error("rank {rank} describes more than 8 squares")]
    RankOverflow { rank: usize },
    #[error("rank {rank} describes only {files} squares")]
    RankUnderflow { rank: usize, files: u8 },
    #[error("rank {rank} has two adjacent empty-run digits")]
    ConsecutiveDigits { rank: usize },
    #[error("rank {rank} has empty-run digit `{digit}` outside 1..8")]
    InvalidEmptyRun { rank: usize, digit: char },
    #[error("unknown piece character `{0}`")]
    UnknownPieceChar(char),
    #[error("expected 6 position fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("unknown side to move `{0}`")]
    UnknownSide(String),
    #[error("unknown castling character `{0}`")]
    UnknownCastleChar(char),
    #[error("castling right `{0}` listed twice")]
    DuplicateCastleRight(char),
    #[error("bad en-passant field: {0}")]
    EnPassant(#[from] InvalidSquare),
    #[error("half-move clock `{0}` is not a non-negative integer")]
    HalfmoveClock(String),
    #[error("full-move number `{0}` is not a non-negative integer")]
    FullmoveNumber(String),
    #[error("cannot read `{0}` as a move")]
    InvalidMoveText(String),
}

/// Rejected by the turn-ownership gate in `GameState::apply_move`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("piece on {square} belongs to {owner}, who is not to move")]
    NotSideToMove { square: Square, owner: Color },
}

/// A broken relationship between the nine masks of a `BitboardSet`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("squares {0:#018x} are claimed by both colors")]
    ColorOverlap(u64),
    #[error("occupied mask {all:#018x} differs from color union {colors:#018x}")]
    ColorUnion { all: u64, colors: u64 },
    #[error("{first} and {second} masks overlap on {mask:#018x}")]
    KindOverlap {
        first: &'static str,
        second: &'static str,
        mask: u64,
    },
    #[error("occupied mask {all:#018x} differs from kind union {kinds:#018x}")]
    KindUnion { all: u64, kinds: u64 },
}
