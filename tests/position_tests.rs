//! tests/position_tests.rs
//! Six-field position strings.
use boardstate::board::{CastleRights, Color};
use boardstate::error::{InvalidSquare, ParseError};
use boardstate::game::{GameState, START_POSITION};
use boardstate::square::Square;
use std::str::FromStr;

#[test]
fn canonical_strings_roundtrip() {
    let positions = [
        START_POSITION,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K2R w K - 49 120",
        "r3k3/8/8/8/8/8/8/8 b q - 7 33",
        "8/8/8/8/8/8/8/8 b Qk a6 0 0",
    ];
    for s in positions {
        let g = GameState::from_position_string(s).unwrap();
        assert_eq!(g.to_position_string(), s);
        assert_eq!(g.to_string(), s);
    }
}

#[test]
fn fields_are_decoded() {
    let g = GameState::from_str("4k3/8/8/3pP3/8/8/8/4K3 w k d6 12 40").unwrap();
    assert_eq!(g.side_to_move(), Color::Light);
    assert_eq!(g.castle_rights(), CastleRights::DARK_KINGSIDE);
    assert_eq!(g.en_passant_target(), Some(Square::D6));
    assert_eq!(g.halfmove_clock(), 12);
    assert_eq!(g.fullmove_number(), 40);
    assert_eq!(g.board().piece_count(), 4);
    assert!(g.history().is_empty());
}

#[test]
fn castle_letters_are_rendered_canonically() {
    let g = GameState::from_position_string("8/8/8/8/8/8/8/8 w qkQK - 0 1").unwrap();
    assert_eq!(g.to_position_string(), "8/8/8/8/8/8/8/8 w KQkq - 0 1");
}

#[test]
fn extra_whitespace_is_tolerated_on_input() {
    let g = GameState::from_position_string(
        "  rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR   w KQkq -\t0 1\n",
    )
    .unwrap();
    assert_eq!(g.to_position_string(), START_POSITION);
}

#[test]
fn each_field_fails_on_its_own() {
    let cases = [
        ("", ParseError::WrongFieldCount { found: 0 }),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            ParseError::WrongFieldCount { found: 5 },
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1",
            ParseError::RankUnderflow { rank: 1, files: 7 },
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR white KQkq - 0 1",
            ParseError::UnknownSide("white".into()),
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1",
            ParseError::UnknownCastleChar('x'),
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e 0 1",
            ParseError::EnPassant(InvalidSquare::Name("e".into())),
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 1.5 1",
            ParseError::HalfmoveClock("1.5".into()),
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one",
            ParseError::FullmoveNumber("one".into()),
        ),
    ];
    for (s, want) in cases {
        assert_eq!(GameState::from_position_string(s), Err(want), "{s}");
    }
}

#[test]
fn failed_parse_leaves_caller_state_alone() {
    let mut g = GameState::new();
    g.apply_move(Square::E2, Square::E4).unwrap();
    let before = g.clone();
    if let Ok(parsed) = GameState::from_position_string("8/8/8/8/8/8/8/8 w KQkq - 0 x") {
        g = parsed;
    }
    assert_eq!(g, before);
}
