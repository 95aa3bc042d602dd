//! Game state: a `BitboardSet` plus side to move, castling rights, en-passant
//! target and the two move counters.
//!
//! The only legality rule enforced is turn ownership: the piece on the source
//! square must belong to the side to move. Paths, move shapes and checks are
//! never examined.

mod position;

use crate::board::{BitboardSet, CastleRights, Color, Piece};
use crate::error::IllegalMove;
use crate::moves::{Move, MoveRecord};
use crate::square::Square;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use position::START_POSITION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: BitboardSet,
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
    /// Counts moves onto empty squares. Never reset; see `apply_move`.
    halfmove_clock: u32,
    /// Starts at 1 and increments after each dark move.
    fullmove_number: u32,
    #[serde(default)]
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Standard starting position, light to move.
    pub fn new() -> Self {
        GameState {
            board: BitboardSet::starting(),
            side_to_move: Color::Light,
            castle_rights: CastleRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &BitboardSet {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline(always)]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline(always)]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied since this state was created, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn get_piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get_piece_at(sq)
    }

    /// The piece on `from`, provided it belongs to the side to move.
    fn owned_piece(&self, from: Square) -> Result<Piece, IllegalMove> {
        let piece = self
            .board
            .get_piece_at(from)
            .ok_or(IllegalMove::EmptySource(from))?;
        if piece.color != self.side_to_move {
            return Err(IllegalMove::NotSideToMove {
                square: from,
                owner: piece.color,
            });
        }
        Ok(piece)
    }

    /// True when `from` holds a piece of the side to move. `to` is not examined.
    pub fn is_move_pseudo_legal(&self, from: Square, _to: Square) -> bool {
        self.owned_piece(from).is_ok()
    }

    /// Move the piece on `from` to `to` and pass the turn.
    ///
    /// The half-move clock goes up by one when `to` was empty and is left
    /// alone on a capture; pawn moves do not reset it. The full-move number
    /// goes up after a dark move. Castling rights and the en-passant target
    /// are carried over untouched. On error nothing changes.
    #[instrument(level = "debug", skip(self), fields(side = %self.side_to_move))]
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), IllegalMove> {
        let piece = self
            .owned_piece(from)
            .inspect_err(|e| debug!(error = %e, "move rejected"))?;
        let mover = self.side_to_move;
        let captured = if from == to {
            None
        } else {
            self.board.get_piece_at(to)
        };

        let record = MoveRecord {
            mv: Move::new(from, to),
            piece,
            captured,
            prev_side: mover,
            prev_castle_rights: self.castle_rights,
            prev_en_passant: self.en_passant_target,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        };

        if !self.board.has_piece_at(to) {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.board.move_piece(from, to);
        self.side_to_move = !mover;
        self.history.push(record);

        debug!(
            piece = %piece,
            captured = ?captured,
            halfmove = self.halfmove_clock,
            fullmove = self.fullmove_number,
            "move applied"
        );
        Ok(())
    }

    /// [`GameState::apply_move`] taking a [`Move`].
    #[inline]
    pub fn play(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.apply_move(mv.from, mv.to)
    }

    /// Take back the most recent move, restoring the exact prior state.
    pub fn undo_move(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        let Move { from, to } = record.mv;

        if from != to {
            self.board.set_piece_at(to, record.captured);
        }
        self.board.set_piece_at(from, Some(record.piece));

        self.side_to_move = record.prev_side;
        self.castle_rights = record.prev_castle_rights;
        self.en_passant_target = record.prev_en_passant;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.fullmove_number = record.prev_fullmove_number;

        debug!(mv = %record.mv, "move undone");
        Some(record.mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn new_is_standard_start() {
        let g = GameState::new();
        assert_eq!(g.side_to_move(), Color::Light);
        assert_eq!(g.castle_rights(), CastleRights::ALL);
        assert_eq!(g.en_passant_target(), None);
        assert_eq!(g.halfmove_clock(), 0);
        assert_eq!(g.fullmove_number(), 1);
        assert_eq!(g.board(), &BitboardSet::starting());
    }

    #[test]
    fn ownership_gate() {
        let g = GameState::new();
        assert!(g.is_move_pseudo_legal(Square::E2, Square::E4));
        assert!(!g.is_move_pseudo_legal(Square::E7, Square::E5));
        assert!(!g.is_move_pseudo_legal(Square::E4, Square::E5));
        // Shape is never checked.
        assert!(g.is_move_pseudo_legal(Square::A1, Square::H8));
    }

    #[test]
    fn rejected_moves_report_why() {
        let mut g = GameState::new();
        assert_eq!(
            g.apply_move(Square::E4, Square::E5),
            Err(IllegalMove::EmptySource(Square::E4))
        );
        assert_eq!(
            g.apply_move(Square::E7, Square::E5),
            Err(IllegalMove::NotSideToMove {
                square: Square::E7,
                owner: Color::Dark
            })
        );
        assert_eq!(g, GameState::new());
    }

    #[test]
    fn undo_restores_capture() {
        let mut g = GameState::new();
        g.apply_move(Square::E2, Square::E4).unwrap();
        g.apply_move(Square::D7, Square::D5).unwrap();
        let before = g.clone();
        g.apply_move(Square::E4, Square::D5).unwrap();
        assert_eq!(
            g.get_piece_at(Square::D5),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
        assert_eq!(g.undo_move(), Some(Move::new(Square::E4, Square::D5)));
        assert_eq!(g, before);
        g.undo_move();
        g.undo_move();
        assert_eq!(g, GameState::new());
        assert_eq!(g.undo_move(), None);
    }

    #[test]
    fn move_onto_own_square_passes_turn_only() {
        let mut g = GameState::new();
        g.apply_move(Square::G1, Square::G1).unwrap();
        assert_eq!(g.side_to_move(), Color::Dark);
        assert_eq!(g.halfmove_clock(), 0);
        assert_eq!(g.board(), &BitboardSet::starting());
        g.undo_move();
        assert_eq!(g, GameState::new());
    }
}
