// src/board/fen_tables.rs
// O(1) notation glyph <-> piece maps.

use super::{Color, Piece, PieceKind};

pub(super) const CHAR_TO_PIECE: [Option<Piece>; 128] = {
    let mut table: [Option<Piece>; 128] = [None; 128];

    // Uppercase = Light
    table['P' as usize] = Some(Piece::new(PieceKind::Pawn, Color::Light));
    table['N' as usize] = Some(Piece::new(PieceKind::Knight, Color::Light));
    table['B' as usize] = Some(Piece::new(PieceKind::Bishop, Color::Light));
    table['R' as usize] = Some(Piece::new(PieceKind::Rook, Color::Light));
    table['Q' as usize] = Some(Piece::new(PieceKind::Queen, Color::Light));
    table['K' as usize] = Some(Piece::new(PieceKind::King, Color::Light));

    // Lowercase = Dark
    table['p' as usize] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
    table['n' as usize] = Some(Piece::new(PieceKind::Knight, Color::Dark));
    table['b' as usize] = Some(Piece::new(PieceKind::Bishop, Color::Dark));
    table['r' as usize] = Some(Piece::new(PieceKind::Rook, Color::Dark));
    table['q' as usize] = Some(Piece::new(PieceKind::Queen, Color::Dark));
    table['k' as usize] = Some(Piece::new(PieceKind::King, Color::Dark));

    table
};

/// Indexed by `color * 6 + kind`.
pub(super) const PIECE_TO_CHAR: [char; 12] = {
    let mut t = ['\0'; 12];
    let mut i = 0;
    while i < 6 {
        let kind = PieceKind::ALL[i];
        t[i] = kind.symbol().to_ascii_uppercase();
        t[6 + i] = kind.symbol();
        i += 1;
    }
    t
};
