//! Translation fixtures: spoken input and the SAN it must produce.

use spokenmove_foundation::ErrorKind;
use spokenmove_parser::MoveTranslator;

pub const FIXTURES: &[(&str, &str)] = &[
    ("bishop to D7", "Bd7"),
    ("rook A1", "Ra1"),
    ("queen captures H8", "Qxh8"),
    ("king takes F5", "Kxf5"),
    ("knight a to B4", "Nab4"),
    ("Bishop 2 h8", "B2h8"),
    ("Queen C2D3", "Qc2d3"),
    ("F captures G4 en passant", "fxg3"),
    ("a takes b5 en passant", "axb4"),
    ("E5", "e5"),
    ("h take G6", "hxg6"),
    ("c8 promote to Queen", "c8=Q"),
    ("F captures E8 promote to knight", "fxe8=N"),
    ("rook takes b7 mate", "Rxb7#"),
    ("Bishop A c3 check", "Bac3+"),
    ("E7 check", "e7+"),
    ("castle kingside", "O-O"),
    ("castle Queenside", "O-O-O"),
    ("Black Resigns", "1-0"),
    ("white resigns", "0-1"),
];

// =============================================================================
// Fixture Table
// =============================================================================

#[test]
fn fixtures_with_canonical_words() {
    let translator = MoveTranslator::new();
    for (input, expected) in FIXTURES {
        let san = translator
            .parse(input)
            .unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
        assert_eq!(san, *expected, "input {input:?}");
    }
}

#[test]
fn fixtures_with_speech_aliases() {
    let translator = MoveTranslator::with_speech_aliases();
    for (input, expected) in FIXTURES {
        let san = translator
            .parse(input)
            .unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
        assert_eq!(san, *expected, "input {input:?}");
    }
}

#[test]
fn en_passant_from_impossible_rank() {
    let err = MoveTranslator::new()
        .parse("g takes h7 en passant")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidEnPassant { rank: '7' });
}

#[test]
fn en_passant_from_every_impossible_rank() {
    let translator = MoveTranslator::new();
    for rank in ['1', '2', '3', '6', '7', '8'] {
        let err = translator
            .parse(&format!("b takes c{rank} en passant"))
            .unwrap_err();
        assert!(err.is_invalid_en_passant(), "rank {rank}: {err}");
    }
}

// =============================================================================
// Speech Misrecognitions
// =============================================================================

#[test]
fn misheard_words() {
    let translator = MoveTranslator::with_speech_aliases();
    let cases = [
        ("night to f3", "Nf3"),
        ("rock takes age8", "Rxh8"),
        ("truck to a1", "Ra1"),
        ("teen takes e2", "Kxe2"),
        ("efor", "e4"),
        ("efork", "e4"),
        ("rook to bforce", "Rb4"),
        ("queen to hotel5", "Qh5"),
    ];
    for (input, expected) in cases {
        assert_eq!(translator.parse(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn misheard_words_need_speech_aliases() {
    let translator = MoveTranslator::new();
    assert!(translator.parse("night to f3").unwrap_err().is_parse_error());
    assert!(translator.parse("efor").unwrap_err().is_parse_error());
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn rejects_non_moves() {
    let translator = MoveTranslator::with_speech_aliases();
    for input in [
        "",
        "   ",
        "check",
        "mate",
        "castle",
        "castle sideways",
        "knight",
        "bishop to",
        "e9",
        "i4",
        "pawn to e4",
        "white resigns check",
        "e4 e5",
    ] {
        let err = translator.parse(input).unwrap_err();
        assert!(err.is_parse_error(), "{input:?} gave {err}");
    }
}

#[test]
fn parse_error_reports_furthest_offset() {
    let err = MoveTranslator::new().parse("castle sideways").unwrap_err();
    let ErrorKind::ParseError {
        offset, expected, ..
    } = &err.kind
    else {
        panic!("expected a parse error, got {err}");
    };
    assert_eq!(*offset, 7);
    assert!(expected.contains(&"\"kingside\"".to_string()));
    assert!(expected.contains(&"\"queenside\"".to_string()));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let translator = MoveTranslator::new();
    assert_eq!(translator.parse("   knight to f3   ").unwrap(), "Nf3");
    assert_eq!(translator.parse("knight   to    f3").unwrap(), "Nf3");
}
