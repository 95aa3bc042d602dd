mod notation;

use crate::bitboard::{BitboardExt, bit};
use crate::error::InvariantViolation;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub mod castle_bits;
mod fen_tables;
mod piece;
pub use castle_bits::*;
pub use piece::{Color, Piece, PieceKind};

/// Starting position constants (A8 = bit 0, H1 = bit 63)
// ———————— Dark side (ranks 8 & 7) ————————
// Pawns on rank 7: bits 8–15
const DARK_PAWN_MASK: u64 = 0x0000_0000_0000_FF00;
// Rooks on a8 (bit 0) and h8 (bit 7)
const DARK_ROOK_MASK: u64 = (1 << 0) | (1 << 7);
// Knights on b8 (bit 1) and g8 (bit 6)
const DARK_KNIGHT_MASK: u64 = (1 << 1) | (1 << 6);
// Bishops on c8 (bit 2) and f8 (bit 5)
const DARK_BISHOP_MASK: u64 = (1 << 2) | (1 << 5);
// Queen on d8 (bit 3)
const DARK_QUEEN_MASK: u64 = 1 << 3;
// King on e8 (bit 4)
const DARK_KING_MASK: u64 = 1 << 4;

// ———————— Light side (ranks 2 & 1) ————————
// Pawns on rank 2: bits 48–55
const LIGHT_PAWN_MASK: u64 = 0x00FF_0000_0000_0000;
// Rooks on a1 (bit 56) and h1 (bit 63)
const LIGHT_ROOK_MASK: u64 = (1 << 56) | (1 << 63);
// Knights on b1 (bit 57) and g1 (bit 62)
const LIGHT_KNIGHT_MASK: u64 = (1 << 57) | (1 << 62);
// Bishops on c1 (bit 58) and f1 (bit 61)
const LIGHT_BISHOP_MASK: u64 = (1 << 58) | (1 << 61);
// Queen on d1 (bit 59)
const LIGHT_QUEEN_MASK: u64 = 1 << 59;
// King on e1 (bit 60)
const LIGHT_KING_MASK: u64 = 1 << 60;

/// Piece placement as nine mutually consistent masks.
///
/// Invariants, checked by [`BitboardSet::validate`]:
/// 1. `occupied_all` is the union of the two color masks.
/// 2. The color masks are disjoint.
/// 3. The six kind masks are pairwise disjoint.
/// 4. `occupied_all` is the union of the kind masks.
///
/// The fields are private; every mutation goes through [`BitboardSet::set_piece_at`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BitboardSet {
    occupied_all: u64,
    occupied_by_color: [u64; 2],
    occupied_by_kind: [u64; 6],
}

impl BitboardSet {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        BitboardSet {
            occupied_all: 0,
            occupied_by_color: [0; 2],
            occupied_by_kind: [0; 6],
        }
    }

    /// The standard starting placement.
    pub fn starting() -> Self {
        let mut b = BitboardSet::empty();
        let setup = [
            (PieceKind::Pawn, DARK_PAWN_MASK, LIGHT_PAWN_MASK),
            (PieceKind::Knight, DARK_KNIGHT_MASK, LIGHT_KNIGHT_MASK),
            (PieceKind::Bishop, DARK_BISHOP_MASK, LIGHT_BISHOP_MASK),
            (PieceKind::Rook, DARK_ROOK_MASK, LIGHT_ROOK_MASK),
            (PieceKind::Queen, DARK_QUEEN_MASK, LIGHT_QUEEN_MASK),
            (PieceKind::King, DARK_KING_MASK, LIGHT_KING_MASK),
        ];
        for (kind, dark, light) in setup {
            for sq in dark.squares() {
                b.set_piece_at(sq, Some(Piece::new(kind, Color::Dark)));
            }
            for sq in light.squares() {
                b.set_piece_at(sq, Some(Piece::new(kind, Color::Light)));
            }
        }
        b
    }

    #[inline(always)]
    /// Mask of all pieces (both colors).
    pub fn occupied(&self) -> u64 {
        self.occupied_all
    }

    #[inline(always)]
    /// Mask of all pieces for one side.
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupied_by_color[color.index()]
    }

    #[inline(always)]
    /// Mask of one kind, both colors.
    pub fn kind_mask(&self, kind: PieceKind) -> u64 {
        self.occupied_by_kind[kind.index()]
    }

    #[inline(always)]
    pub fn pieces(&self, kind: PieceKind, color: Color) -> u64 {
        self.kind_mask(kind) & self.occupancy(color)
    }

    pub fn piece_count(&self) -> u32 {
        self.occupied_all.count_ones()
    }

    #[inline(always)]
    pub fn has_piece_at(&self, sq: Square) -> bool {
        self.occupied_all.has(sq)
    }

    /// Returns the piece on `sq`, or None if empty.
    pub fn get_piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.has_piece_at(sq) {
            return None;
        }
        let color = if self.occupancy(Color::Light).has(sq) {
            Color::Light
        } else {
            Color::Dark
        };
        let kind = PieceKind::ALL
            .into_iter()
            .find(|&k| self.kind_mask(k).has(sq))?;
        Some(Piece::new(kind, color))
    }

    /// Place `piece` on `sq`, or empty it with `None`.
    ///
    /// Any previous occupant's bits are cleared first so that overwriting a
    /// square with a different kind cannot leave it in two kind masks.
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<Piece>) {
        let mask = bit(sq);

        self.occupied_all &= !mask;
        for bb in &mut self.occupied_by_color {
            *bb &= !mask;
        }
        for bb in &mut self.occupied_by_kind {
            *bb &= !mask;
        }

        if let Some(p) = piece {
            self.occupied_by_color[p.color.index()] |= mask;
            self.occupied_by_kind[p.kind.index()] |= mask;
            self.occupied_all |= mask;
        }

        trace!(square = %sq, piece = ?piece, "set_piece_at");
        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    /// Empty `sq`, returning what stood there.
    pub fn clear_square(&mut self, sq: Square) -> Option<Piece> {
        let prev = self.get_piece_at(sq);
        if prev.is_some() {
            self.set_piece_at(sq, None);
        }
        prev
    }

    /// Relocate whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// No-op when `from` is empty. Performs no legality check; the returned
    /// value is the overwritten occupant of `to`, if any.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.get_piece_at(from)?;
        if from == to {
            return None;
        }
        let captured = self.get_piece_at(to);
        self.set_piece_at(from, None);
        self.set_piece_at(to, Some(piece));
        captured
    }

    /// Occupied squares with their pieces, in square index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_all
            .squares()
            .filter_map(move |sq| self.get_piece_at(sq).map(|p| (sq, p)))
    }

    /// Check that the nine masks agree with each other.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let light = self.occupancy(Color::Light);
        let dark = self.occupancy(Color::Dark);
        if light & dark != 0 {
            return Err(InvariantViolation::ColorOverlap(light & dark));
        }
        if self.occupied_all != light | dark {
            return Err(InvariantViolation::ColorUnion {
                all: self.occupied_all,
                colors: light | dark,
            });
        }

        let mut seen: u64 = 0;
        for kind in PieceKind::ALL {
            let bb = self.kind_mask(kind);
            if seen & bb != 0 {
                let other = PieceKind::ALL
                    .into_iter()
                    .find(|&k| k != kind && self.kind_mask(k) & bb != 0)
                    .unwrap_or(kind);
                return Err(InvariantViolation::KindOverlap {
                    first: other.name(),
                    second: kind.name(),
                    mask: seen & bb,
                });
            }
            seen |= bb;
        }
        if self.occupied_all != seen {
            return Err(InvariantViolation::KindUnion {
                all: self.occupied_all,
                kinds: seen,
            });
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    #[inline]
    fn assert_consistent(&self) {
        let checked = self.validate();
        debug_assert!(checked.is_ok(), "bitboard invariant broken: {checked:?}");
    }
}
