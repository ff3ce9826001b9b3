//! Integration tests for SAN reading and description.

use spokenmove_foundation::{CastleSide, ErrorKind, Piece, Side};
use spokenmove_parser::san::{Departure, Suffix};
use spokenmove_parser::{MoveTranslator, SanMove, describe};

#[test]
fn translated_notation_reads_as_typed_move() {
    let translator = MoveTranslator::new();

    let san = translator
        .parse("knight a takes B4 check")
        .unwrap()
        .to_san_move()
        .unwrap();
    let SanMove::Normal {
        piece,
        departure,
        capture,
        to,
        promotion,
        suffix,
    } = san
    else {
        panic!("expected a normal move");
    };
    assert_eq!(piece, Piece::Knight);
    assert!(matches!(departure, Some(Departure::File(f)) if f.to_char() == 'a'));
    assert!(capture);
    assert_eq!(to.to_string(), "b4");
    assert_eq!(promotion, None);
    assert_eq!(suffix, Some(Suffix::Check));
}

#[test]
fn castles_and_results() {
    assert_eq!(
        "O-O-O#".parse::<SanMove>().unwrap(),
        SanMove::Castle {
            side: CastleSide::Queenside,
            suffix: Some(Suffix::Checkmate),
        }
    );
    assert_eq!("0-1".parse::<SanMove>().unwrap(), SanMove::Resign(Side::White));
}

#[test]
fn promotion_reads_piece() {
    let san: SanMove = "fxe8=N".parse().unwrap();
    assert!(san.is_capture());
    assert!(matches!(
        san,
        SanMove::Normal {
            piece: Piece::Pawn,
            promotion: Some(Piece::Knight),
            ..
        }
    ));
}

#[test]
fn rejects_shapes_the_grammar_never_produces() {
    for text in [
        "", "Pe4", "E4", "Nf9", "Ke1=Q", "e4e5", "xe4", "exd", "O-O-O-O", "1/2-1/2", "e8=K+x",
    ] {
        let err = text.parse::<SanMove>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSan(_)), "{text:?}");
    }
}

#[test]
fn describe_reads_back_as_words() {
    let cases = [
        ("Nf3", "knight to f3"),
        ("Qh4xe1#", "queen h4 captures e1 checkmate"),
        ("exd6", "e captures d6"),
        ("a8=Q+", "a8 promote to queen check"),
        ("O-O", "castle kingside"),
        ("1-0", "black resigns"),
    ];
    for (san, words) in cases {
        assert_eq!(describe(san).unwrap(), words, "{san}");
    }
}

#[test]
fn describe_then_translate() {
    let translator = MoveTranslator::new();
    for san in ["R1a3", "Nbd7", "Qh4e1", "Bxe4+", "e8=Q#", "O-O-O+", "0-1"] {
        let words = describe(san).unwrap();
        assert_eq!(translator.parse(&words).unwrap(), san, "{words:?}");
    }
}
