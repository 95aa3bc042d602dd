//! tests/notation_tests.rs
//! Board notation parsing and rendering, independent of game state.
use boardstate::board::{BitboardSet, Color, Piece, PieceKind};
use boardstate::error::ParseError;
use boardstate::square::Square;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[test]
fn well_formed_strings_roundtrip_exactly() {
    let boards = [
        START,
        "8/8/8/8/8/8/8/8",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        "k7/8/8/8/8/8/8/7K",
        "pppppppp/PPPPPPPP/nnnnnnnn/NNNNNNNN/1b1b1b1b/B1B1B1B1/r6q/1Q4R1",
    ];
    for s in boards {
        let b = BitboardSet::from_notation(s).unwrap();
        assert_eq!(b.to_notation(), s);
        assert_eq!(b.to_string(), s);
        assert!(b.validate().is_ok(), "{s}");
    }
}

#[test]
fn start_position_contents() {
    let b: BitboardSet = START.parse().unwrap();
    assert_eq!(b.piece_count(), 32);
    assert_eq!(b.occupancy(Color::Light).count_ones(), 16);
    assert_eq!(b.occupancy(Color::Dark).count_ones(), 16);
    assert_eq!(
        b.get_piece_at(Square::A1),
        Some(Piece::new(PieceKind::Rook, Color::Light))
    );
    assert_eq!(
        b.get_piece_at(Square::E8),
        Some(Piece::new(PieceKind::King, Color::Dark))
    );
    assert_eq!(b.pieces(PieceKind::Pawn, Color::Light).count_ones(), 8);
    assert_eq!(b.kind_mask(PieceKind::King).count_ones(), 2);
}

#[test]
fn empty_board() {
    let b = BitboardSet::from_notation("8/8/8/8/8/8/8/8").unwrap();
    for sq in Square::all() {
        assert!(!b.has_piece_at(sq), "{sq}");
        assert_eq!(b.get_piece_at(sq), None);
    }
    assert_eq!(b, BitboardSet::empty());
}

#[test]
fn consecutive_digits_are_rejected_not_normalised() {
    assert_eq!(
        BitboardSet::from_notation("44/8/8/8/8/8/8/8"),
        Err(ParseError::ConsecutiveDigits { rank: 8 })
    );
    assert_eq!(
        BitboardSet::from_notation("8/8/8/8/8/8/8/k16"),
        Err(ParseError::ConsecutiveDigits { rank: 1 })
    );
}

#[test]
fn rank_count_and_length() {
    assert!(matches!(
        BitboardSet::from_notation(""),
        Err(ParseError::WrongRankCount { found: 1 })
    ));
    assert!(matches!(
        BitboardSet::from_notation("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP"),
        Err(ParseError::WrongRankCount { found: 7 })
    ));
    assert!(matches!(
        BitboardSet::from_notation("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN"),
        Err(ParseError::RankUnderflow { rank: 1, files: 7 })
    ));
    assert!(matches!(
        BitboardSet::from_notation("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Err(ParseError::RankOverflow { rank: 8 })
    ));
    assert!(matches!(
        BitboardSet::from_notation("8/8/8/8/8/8/8/8 w"),
        Err(ParseError::UnknownPieceChar(' '))
    ));
}
