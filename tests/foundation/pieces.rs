//! Integration tests for pieces, sides and castling directions.

use spokenmove_foundation::{CastleSide, Piece, Side};

#[test]
fn piece_letters() {
    let letters: String = Piece::LETTERED
        .iter()
        .filter_map(|p| p.letter())
        .collect();
    assert_eq!(letters, "KQRBN");
    assert_eq!(Piece::Pawn.letter(), None);
    assert_eq!(Piece::from_letter('N'), Some(Piece::Knight));
    assert_eq!(Piece::from_letter('P'), None);
}

#[test]
fn piece_names_ignore_case() {
    assert_eq!(Piece::from_name("Knight"), Some(Piece::Knight));
    assert_eq!(Piece::from_name("PAWN"), Some(Piece::Pawn));
    assert_eq!(Piece::from_name("night"), None);
    assert_eq!(Piece::Bishop.to_string(), "bishop");
}

#[test]
fn resignation_names_the_winner() {
    assert_eq!(Side::Black.resignation_result(), "1-0");
    assert_eq!(Side::White.resignation_result(), "0-1");
    assert_eq!(Side::from_resignation_result("1-0"), Some(Side::Black));
    assert_eq!(Side::from_resignation_result("1/2-1/2"), None);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn castle_sides() {
    assert_eq!(CastleSide::from_name("Queenside"), Some(CastleSide::Queenside));
    assert_eq!(CastleSide::Kingside.notation(), "O-O");
    assert_eq!(CastleSide::Queenside.notation(), "O-O-O");
    assert_eq!(CastleSide::from_name("long"), None);
}
